//! In-memory history of transactions submitted through the widgets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub description: String,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn pending(hash: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            description: description.into(),
            status: TransactionStatus::Pending,
        }
    }
}

/// Transactions in submission order, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if a transaction with the same hash is already tracked.
    pub fn add(&mut self, transaction: Transaction) -> bool {
        if self.transactions.iter().any(|t| t.hash == transaction.hash) {
            tracing::debug!(hash = %transaction.hash, "transaction already tracked");
            return false;
        }
        self.transactions.push(transaction);
        true
    }

    pub fn set_status(&mut self, hash: &str, status: TransactionStatus) -> bool {
        match self.transactions.iter_mut().find(|t| t.hash == hash) {
            Some(transaction) => {
                transaction.status = status;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> Vec<&Transaction> {
        self.transactions.iter().rev().take(limit).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Pending)
            .count()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_ignores_duplicate_hash() {
        let mut store = TransactionStore::new();
        assert!(store.add(Transaction::pending("0x1", "Swap")));
        assert!(!store.add(Transaction::pending("0x1", "Swap again")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut store = TransactionStore::new();
        store.add(Transaction::pending("0x1", "First"));
        store.add(Transaction::pending("0x2", "Second"));
        store.add(Transaction::pending("0x3", "Third"));

        let hashes: Vec<_> = store.recent(2).iter().map(|t| t.hash.as_str()).collect();
        assert_eq!(hashes, vec!["0x3", "0x2"]);
    }

    #[test]
    fn status_updates_and_pending_count() {
        let mut store = TransactionStore::new();
        store.add(Transaction::pending("0x1", "First"));
        store.add(Transaction::pending("0x2", "Second"));
        assert_eq!(store.pending_count(), 2);

        assert!(store.set_status("0x1", TransactionStatus::Confirmed));
        assert!(!store.set_status("0x9", TransactionStatus::Failed));
        assert_eq!(store.pending_count(), 1);

        store.clear();
        assert!(store.is_empty());
    }
}
