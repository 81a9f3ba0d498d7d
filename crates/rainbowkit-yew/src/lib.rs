//! Yew components for the wallet widget set: the provider that scopes a theme
//! to its subtree and the hooks descendants use to read its values.

pub mod hooks;
pub mod providers;

pub use rainbowkit;

pub mod prelude {
    pub use crate::hooks::*;
    pub use crate::providers::*;
    pub use rainbowkit::app_info::{AppInfo, AppInfoOverrides};
    pub use rainbowkit::chains::Chain;
    pub use rainbowkit::theme::{Theme, ThemeInput, ThemeOptions, dark_theme, light_theme};
}
