//! Theme schema, presets and the scoped theme-to-CSS compiler.

pub mod css;
pub mod presets;
pub mod root;
pub mod selector;
pub mod vars;

pub use css::{CompileOptions, compile};
pub use presets::{
    BorderRadius, FontStack, OverlayBlur, ThemeFactory, ThemeOptions, dark_theme, default_theme,
    light_theme,
};
pub use root::{Theme, ThemeInput, ThemeRoot, render_theme_root};
pub use selector::{ScopeAttribute, ScopeSelector};
pub use vars::{ThemeGroup, ThemeVar, ThemeVars};
