use rainbowkit::app_info::AppInfo;
use rainbowkit::chains::NormalizedChains;
use yew::prelude::*;

/// App info of the closest provider, or the defaults outside one.
#[hook]
pub fn use_app_info() -> AppInfo {
    use_context::<AppInfo>().unwrap_or_default()
}

/// Normalized chains of the closest provider, empty outside one.
#[hook]
pub fn use_chains() -> NormalizedChains {
    use_context::<NormalizedChains>().unwrap_or_default()
}
