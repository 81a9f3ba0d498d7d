//! Context providers exposing provider configuration to descendant widgets.
//!
//! Each value travels on its own context channel so a widget only re-renders
//! when the value it reads changes.

pub mod app;
pub mod flags;
pub mod provider;
pub mod theme;
pub mod transactions;

pub use app::{use_app_info, use_chains};
pub use flags::{
    CoolModeContext, ShowRecentTransactionsContext, use_cool_mode, use_show_recent_transactions,
};
pub use provider::{RainbowKitProvider, RainbowKitProviderProps};
pub use theme::{ThemeIdContext, ThemeRoot, ThemeRootProps, use_theme_id, use_theme_root_props};
pub use transactions::{
    TransactionAction, TransactionStoreContext, TransactionStoreProvider, TransactionStoreState,
    use_recent_transactions, use_transaction_store,
};
