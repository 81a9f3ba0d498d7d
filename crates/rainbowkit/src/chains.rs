//! Chains exposed to descendant widgets.

use std::collections::HashSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_background: Option<String>,
}

impl Chain {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon_url: None,
            icon_background: None,
        }
    }
}

/// The chain list after normalization. Cloning shares the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedChains(Rc<[Chain]>);

impl NormalizedChains {
    pub fn get(&self, id: u64) -> Option<&Chain> {
        self.0.iter().find(|chain| chain.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chain> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Chain>> for NormalizedChains {
    fn from(chains: Vec<Chain>) -> Self {
        Self(chains.into())
    }
}

/// Prepares the caller's chains for descendants. Implementations must be pure.
pub trait ChainNormalizer {
    fn normalize(&self, chains: &[Chain]) -> NormalizedChains;
}

/// Keeps the first chain for each id, in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DedupChains;

impl ChainNormalizer for DedupChains {
    fn normalize(&self, chains: &[Chain]) -> NormalizedChains {
        let mut seen = HashSet::new();
        let chains: Vec<Chain> = chains
            .iter()
            .filter(|chain| seen.insert(chain.id))
            .cloned()
            .collect();
        chains.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let chains = vec![
            Chain::new(1, "Ethereum"),
            Chain::new(10, "Optimism"),
            Chain::new(1, "Mainnet duplicate"),
        ];

        let normalized = DedupChains.normalize(&chains);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized.get(1).map(|c| c.name.as_str()), Some("Ethereum"));
        let ids: Vec<_> = normalized.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 10]);
    }

    #[test]
    fn normalize_is_deterministic() {
        let chains = vec![Chain::new(137, "Polygon"), Chain::new(42161, "Arbitrum")];
        assert_eq!(DedupChains.normalize(&chains), DedupChains.normalize(&chains));
        assert!(DedupChains.normalize(&[]).is_empty());
    }
}
