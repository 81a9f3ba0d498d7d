//! Turns a theme plus an optional provider id into a scoped stylesheet.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::css::{self, CompileOptions, compile};
use super::presets::{ThemeFactory, default_theme};
use super::selector::{ScopeAttribute, ScopeSelector};
use super::vars::ThemeVars;
use crate::errors::ThemeError;

/// A flat theme, or a light theme with a dark-mode override delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Theme {
    Modes {
        #[serde(rename = "lightMode")]
        light_mode: ThemeVars,
        /// Only the keys that differ from `light_mode` need to be present.
        #[serde(rename = "darkMode")]
        dark_mode: ThemeVars,
    },
    Vars(ThemeVars),
}

impl Theme {
    pub fn modes(light_mode: ThemeVars, dark_mode: ThemeVars) -> Self {
        Theme::Modes {
            light_mode,
            dark_mode,
        }
    }

    /// The vars applied regardless of color scheme.
    pub fn light(&self) -> &ThemeVars {
        match self {
            Theme::Modes { light_mode, .. } => light_mode,
            Theme::Vars(vars) => vars,
        }
    }

    pub fn dark(&self) -> Option<&ThemeVars> {
        match self {
            Theme::Modes { dark_mode, .. } => Some(dark_mode),
            Theme::Vars(_) => None,
        }
    }
}

impl From<ThemeVars> for Theme {
    fn from(vars: ThemeVars) -> Self {
        Theme::Vars(vars)
    }
}

/// What a caller hands the provider as its `theme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeInput {
    Theme(Theme),
    /// Opt out of theming: children render without a wrapper or stylesheet.
    Disabled,
    /// A theme constructor passed without being called. Always rejected.
    Factory(ThemeFactory),
}

impl ThemeInput {
    /// Validate the input at the API boundary.
    pub fn resolve(&self) -> Result<Option<&Theme>, ThemeError> {
        match self {
            ThemeInput::Theme(theme) => Ok(Some(theme)),
            ThemeInput::Disabled => Ok(None),
            ThemeInput::Factory(factory) => Err(ThemeError::InvalidThemeConfiguration {
                factory: factory.name().to_string(),
            }),
        }
    }
}

impl Default for ThemeInput {
    fn default() -> Self {
        ThemeInput::Theme(Theme::Vars(default_theme()))
    }
}

impl From<Theme> for ThemeInput {
    fn from(theme: Theme) -> Self {
        ThemeInput::Theme(theme)
    }
}

impl From<ThemeVars> for ThemeInput {
    fn from(vars: ThemeVars) -> Self {
        ThemeInput::Theme(Theme::Vars(vars))
    }
}

impl From<Option<Theme>> for ThemeInput {
    fn from(theme: Option<Theme>) -> Self {
        theme.map_or(ThemeInput::Disabled, ThemeInput::Theme)
    }
}

impl From<ThemeFactory> for ThemeInput {
    fn from(factory: ThemeFactory) -> Self {
        ThemeInput::Factory(factory)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawThemeInput {
    Factory(String),
    Theme(Theme),
}

impl Serialize for ThemeInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ThemeInput::Theme(theme) => theme.serialize(serializer),
            ThemeInput::Disabled => serializer.serialize_none(),
            ThemeInput::Factory(factory) => serializer.serialize_str(factory.name()),
        }
    }
}

impl<'de> Deserialize<'de> for ThemeInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawThemeInput>::deserialize(deserializer)? {
            None => Ok(ThemeInput::Disabled),
            Some(RawThemeInput::Theme(theme)) => Ok(ThemeInput::Theme(theme)),
            Some(RawThemeInput::Factory(name)) => ThemeFactory::named(&name)
                .map(ThemeInput::Factory)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown theme factory `{name}`"))),
        }
    }
}

/// The scope attribute and stylesheet of one provider instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRoot {
    selector: ScopeSelector,
    stylesheet: String,
}

impl ThemeRoot {
    pub fn build(theme: &Theme, id: Option<&str>) -> Self {
        let selector = ScopeSelector::derive(id);

        let mut stylesheet = css::rule(
            selector.css(),
            &compile(theme.light(), CompileOptions::default()),
        );
        if let Some(dark) = theme.dark() {
            let overrides = compile(dark, CompileOptions::extending(theme.light()));
            stylesheet.push_str(&css::dark_mode_rule(&css::rule(selector.css(), &overrides)));
        }

        tracing::debug!(selector = %selector, bytes = stylesheet.len(), "built theme stylesheet");
        Self {
            selector,
            stylesheet,
        }
    }

    pub fn selector(&self) -> &ScopeSelector {
        &self.selector
    }

    pub fn attribute(&self) -> &ScopeAttribute {
        self.selector.attribute()
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Static HTML for the wrapper element around already rendered children.
    pub fn wrap_html(&self, children_html: &str) -> String {
        let attribute = self.attribute();
        format!(
            "<div {}=\"{}\"><style>{}</style>{}</div>",
            attribute.name(),
            escape_attribute(attribute.value()),
            escape_style_text(&self.stylesheet),
            children_html
        )
    }
}

/// Static rendering path: validate `input`, then wrap `children_html` in a
/// theme root, or return it untouched when theming is disabled.
pub fn render_theme_root(
    input: &ThemeInput,
    id: Option<&str>,
    children_html: &str,
) -> Result<String, ThemeError> {
    match input.resolve()? {
        Some(theme) => Ok(ThemeRoot::build(theme, id).wrap_html(children_html)),
        None => Ok(children_html.to_string()),
    }
}

/// Keep raw stylesheet text from closing its `<style>` element. `\/` is a
/// CSS escape for `/`, so the rules read the same.
fn escape_style_text(css: &str) -> String {
    css.replace("</", "<\\/")
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}
