//! Theming and provider plumbing for a wallet-connection widget set.
//!
//! This crate is framework independent: it owns the theme variable schema, the
//! scoped theme-to-CSS compiler, app info defaults, the chain list handed to
//! descendants and the in-memory transaction store. The Yew component layer
//! lives in `rainbowkit-yew`.

pub mod app_info;
pub mod chains;
pub mod config;
pub mod errors;
pub mod log;
pub mod macros;
pub mod theme;
pub mod transactions;

pub use serde;
pub use serde_json;
pub use tracing;

pub use errors::{ConfigError, ThemeError};
pub use theme::{
    CompileOptions, ScopeAttribute, ScopeSelector, Theme, ThemeFactory, ThemeInput, ThemeOptions,
    ThemeRoot, ThemeVar, ThemeVars, compile, dark_theme, default_theme, light_theme,
};
