//! Hooks that are not tied to a provider context.

pub mod use_color_scheme;

pub use use_color_scheme::{ColorScheme, use_color_scheme};
