//! Shared error types for the rainbowkit crates.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Raised while turning a caller-supplied theme into CSS.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error(
        "A theme factory ({factory}) was provided to the \"theme\" prop instead of a theme value. \
         You must call this factory to get the resulting theme."
    )]
    InvalidThemeConfiguration { factory: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse provider config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Theme(#[from] ThemeError),
}
