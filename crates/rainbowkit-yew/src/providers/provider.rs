use rainbowkit::app_info::{AppInfo, AppInfoOverrides};
use rainbowkit::chains::{Chain, ChainNormalizer, DedupChains, NormalizedChains};
use rainbowkit::theme::ThemeInput;
use rainbowkit::tracing;
use yew::prelude::*;

use super::flags::{CoolModeContext, ShowRecentTransactionsContext};
use super::theme::{ThemeIdContext, ThemeRoot};
use super::transactions::TransactionStoreProvider;

#[derive(Properties, PartialEq)]
pub struct RainbowKitProviderProps {
    pub chains: Vec<Chain>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Defaults to the built-in light theme. Pass [`ThemeInput::Disabled`] to
    /// render children without theming.
    #[prop_or_default]
    pub theme: ThemeInput,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub app_info: Option<AppInfoOverrides>,
    #[prop_or_default]
    pub show_recent_transactions: bool,
    #[prop_or_default]
    pub cool_mode: bool,
}

/// Provides chains, app info, flags, the transaction store and the scoped
/// theme to everything below it.
#[function_component(RainbowKitProvider)]
pub fn rainbowkit_provider(props: &RainbowKitProviderProps) -> Html {
    let chains = use_memo(props.chains.clone(), |chains| DedupChains.normalize(chains));

    let theme = match props.theme.resolve() {
        Ok(theme) => theme.cloned(),
        Err(err) => {
            tracing::error!(error = %err, "invalid theme configuration");
            panic!("{err}");
        }
    };

    let app_info = AppInfo::from(props.app_info.as_ref());
    let chains: NormalizedChains = (*chains).clone();

    html! {
        <ContextProvider<NormalizedChains> context={chains}>
            <ContextProvider<CoolModeContext> context={CoolModeContext(props.cool_mode)}>
                <ContextProvider<ShowRecentTransactionsContext> context={ShowRecentTransactionsContext(props.show_recent_transactions)}>
                    <TransactionStoreProvider>
                        <ContextProvider<AppInfo> context={app_info}>
                            <ContextProvider<ThemeIdContext> context={ThemeIdContext(props.id.clone())}>
                                <ThemeRoot theme={theme} id={props.id.clone()}>
                                    {props.children.clone()}
                                </ThemeRoot>
                            </ContextProvider<ThemeIdContext>>
                        </ContextProvider<AppInfo>>
                    </TransactionStoreProvider>
                </ContextProvider<ShowRecentTransactionsContext>>
            </ContextProvider<CoolModeContext>>
        </ContextProvider<NormalizedChains>>
    }
}
