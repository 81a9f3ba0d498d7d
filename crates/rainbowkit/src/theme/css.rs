//! Compiles [`ThemeVars`] into CSS custom-property declarations.

use std::fmt::Write;

use super::vars::ThemeVars;

const DARK_MODE_MEDIA_QUERY: &str = "@media(prefers-color-scheme:dark)";

#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions<'a> {
    /// Base theme the compiled vars override. Declarations whose value equals
    /// the base value are skipped; keys only present in the base are never
    /// emitted.
    pub extends: Option<&'a ThemeVars>,
}

impl<'a> CompileOptions<'a> {
    pub fn extending(base: &'a ThemeVars) -> Self {
        Self {
            extends: Some(base),
        }
    }
}

/// Render `vars` as `--name:value;` declarations in canonical key order.
///
/// Values are passed through untouched.
pub fn compile(vars: &ThemeVars, options: CompileOptions<'_>) -> String {
    let mut css = String::new();
    for (var, value) in vars.iter() {
        if let Some(base) = options.extends {
            if base.get(var) == Some(value) {
                continue;
            }
        }
        // Writing into a String cannot fail.
        let _ = write!(css, "{}:{};", var.css_name(), value);
    }
    css
}

/// `selector{body}`
pub fn rule(selector: &str, body: &str) -> String {
    format!("{selector}{{{body}}}")
}

/// Wrap a rule so it only applies when the OS prefers a dark color scheme.
pub fn dark_mode_rule(rule: &str) -> String {
    format!("{DARK_MODE_MEDIA_QUERY}{{{rule}}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::vars::ThemeVar;

    fn light() -> ThemeVars {
        ThemeVars::new()
            .with(ThemeVar::AccentColor, "#fff")
            .with(ThemeVar::ModalText, "#000")
            .with(ThemeVar::ModalRadius, "24px")
    }

    #[test]
    fn compiles_declarations_in_canonical_order() {
        let vars = ThemeVars::new()
            .with(ThemeVar::ModalRadius, "24px")
            .with(ThemeVar::AccentColor, "#fff");

        assert_eq!(
            compile(&vars, CompileOptions::default()),
            "--rk-colors-accentColor:#fff;--rk-radii-modal:24px;"
        );
    }

    #[test]
    fn compile_is_deterministic() {
        let first = compile(&light(), CompileOptions::default());
        let second = compile(&light().clone(), CompileOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_vars_compile_to_nothing() {
        assert_eq!(compile(&ThemeVars::new(), CompileOptions::default()), "");
        assert_eq!(rule("[data-rk]", ""), "[data-rk]{}");
    }

    #[test]
    fn values_pass_through_unchanged() {
        let vars = ThemeVars::new()
            .with(ThemeVar::ModalRadius, "12")
            .with(ThemeVar::Body, "\"SF Pro\", sans-serif");

        assert_eq!(
            compile(&vars, CompileOptions::default()),
            "--rk-fonts-body:\"SF Pro\", sans-serif;--rk-radii-modal:12;"
        );
    }

    #[test]
    fn extends_skips_unchanged_values_only() {
        let dark = ThemeVars::new()
            .with(ThemeVar::AccentColor, "#000")
            .with(ThemeVar::ModalText, "#000");

        assert_eq!(
            compile(&dark, CompileOptions::extending(&light())),
            "--rk-colors-accentColor:#000;"
        );
    }

    #[test]
    fn extends_emits_every_changed_key() {
        let dark = ThemeVars::new()
            .with(ThemeVar::AccentColor, "#111")
            .with(ThemeVar::ModalText, "#eee")
            .with(ThemeVar::ModalRadius, "0px");

        let css = compile(&dark, CompileOptions::extending(&light()));
        for (var, value) in dark.iter() {
            assert!(css.contains(&format!("{}:{};", var.css_name(), value)));
        }
    }

    #[test]
    fn extends_never_emits_base_only_keys() {
        let dark = ThemeVars::new().with(ThemeVar::AccentColor, "#000");
        let css = compile(&dark, CompileOptions::extending(&light()));
        assert!(!css.contains("--rk-radii-modal"));
        assert!(!css.contains("--rk-colors-modalText"));
    }

    #[test]
    fn dark_mode_rule_wraps_in_media_query() {
        assert_eq!(
            dark_mode_rule("[data-rk]{--rk-colors-accentColor:#000;}"),
            "@media(prefers-color-scheme:dark){[data-rk]{--rk-colors-accentColor:#000;}}"
        );
    }
}
