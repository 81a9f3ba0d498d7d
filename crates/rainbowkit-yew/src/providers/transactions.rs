use std::rc::Rc;

use rainbowkit::transactions::{Transaction, TransactionStatus, TransactionStore};
use yew::prelude::*;

pub enum TransactionAction {
    Add(Transaction),
    SetStatus {
        hash: String,
        status: TransactionStatus,
    },
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStoreState(TransactionStore);

impl TransactionStoreState {
    pub fn store(&self) -> &TransactionStore {
        &self.0
    }
}

impl Reducible for TransactionStoreState {
    type Action = TransactionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.0.clone();
        let changed = match action {
            TransactionAction::Add(transaction) => store.add(transaction),
            TransactionAction::SetStatus { hash, status } => store.set_status(&hash, status),
            TransactionAction::Clear => {
                let had_any = !store.is_empty();
                store.clear();
                had_any
            }
        };

        if changed { Rc::new(Self(store)) } else { self }
    }
}

pub type TransactionStoreContext = UseReducerHandle<TransactionStoreState>;

#[derive(Properties, PartialEq)]
pub struct TransactionStoreProviderProps {
    pub children: Children,
}

#[function_component(TransactionStoreProvider)]
pub fn transaction_store_provider(props: &TransactionStoreProviderProps) -> Html {
    let store = use_reducer(TransactionStoreState::default);

    html! {
        <ContextProvider<TransactionStoreContext> context={store}>
            {props.children.clone()}
        </ContextProvider<TransactionStoreContext>>
    }
}

#[hook]
pub fn use_transaction_store() -> TransactionStoreContext {
    use_context::<TransactionStoreContext>()
        .expect("use_transaction_store must be used within a TransactionStoreProvider")
}

/// Up to `limit` transactions, newest first.
#[hook]
pub fn use_recent_transactions(limit: usize) -> Vec<Transaction> {
    let store = use_transaction_store();
    store.store().recent(limit).into_iter().cloned().collect()
}
