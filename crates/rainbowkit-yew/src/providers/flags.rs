use yew::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoolModeContext(pub bool);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShowRecentTransactionsContext(pub bool);

#[hook]
pub fn use_cool_mode() -> bool {
    use_context::<CoolModeContext>().unwrap_or_default().0
}

#[hook]
pub fn use_show_recent_transactions() -> bool {
    use_context::<ShowRecentTransactionsContext>()
        .unwrap_or_default()
        .0
}
