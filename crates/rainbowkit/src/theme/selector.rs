//! Scope selectors keep the CSS of independent provider instances apart.

use std::fmt;

const ANONYMOUS_ATTRIBUTE: &str = "data-rk";
const ID_ATTRIBUTE: &str = "data-rk-id";

/// The attribute a theme root element carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeAttribute {
    /// `data-rk-id="<id>"`
    Named(String),
    /// `data-rk=""`
    Anonymous,
}

impl ScopeAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            ScopeAttribute::Named(_) => ID_ATTRIBUTE,
            ScopeAttribute::Anonymous => ANONYMOUS_ATTRIBUTE,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ScopeAttribute::Named(id) => id,
            ScopeAttribute::Anonymous => "",
        }
    }
}

/// Attribute assignment plus the CSS selector that matches it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeSelector {
    attribute: ScopeAttribute,
    css: String,
}

impl ScopeSelector {
    /// Derive the selector for an optional provider id. An empty id counts as
    /// no id.
    pub fn derive(id: Option<&str>) -> Self {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => Self {
                css: format!("[{ID_ATTRIBUTE}=\"{}\"]", escape_css_string(id)),
                attribute: ScopeAttribute::Named(id.to_string()),
            },
            None => Self {
                css: format!("[{ANONYMOUS_ATTRIBUTE}]"),
                attribute: ScopeAttribute::Anonymous,
            },
        }
    }

    pub fn attribute(&self) -> &ScopeAttribute {
        &self.attribute
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

impl fmt::Display for ScopeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

/// Escape a value for a double-quoted CSS string. `<` is hex-escaped so the
/// selector can never close an enclosing `<style>` element.
fn escape_css_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\a "),
            '\r' => escaped.push_str("\\d "),
            '\x0c' => escaped.push_str("\\c "),
            '<' => escaped.push_str("\\3c "),
            c => escaped.push(c),
        }
    }
    escaped
}
