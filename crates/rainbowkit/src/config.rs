//! Provider configuration as plain data, usable without a UI framework.

use serde::{Deserialize, Serialize};

use crate::app_info::{AppInfo, AppInfoOverrides};
use crate::chains::{Chain, ChainNormalizer, NormalizedChains};
use crate::errors::{ConfigError, ThemeError};
use crate::theme::{ThemeInput, ThemeRoot};

/// Everything a provider instance is configured with.
///
/// In JSON, an absent `theme` means the default theme and `null` disables
/// theming.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub chains: Vec<Chain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub theme: ThemeInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_info: Option<AppInfoOverrides>,
    #[serde(default)]
    pub show_recent_transactions: bool,
    #[serde(default)]
    pub cool_mode: bool,
}

/// The values a provider exposes to its descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProvider {
    pub id: Option<String>,
    pub chains: NormalizedChains,
    pub app_info: AppInfo,
    pub show_recent_transactions: bool,
    pub cool_mode: bool,
    /// `None` when theming is disabled.
    pub theme_root: Option<ThemeRoot>,
}

impl ProviderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ProviderConfig = serde_json::from_str(json)?;
        config.theme.resolve()?;
        Ok(config)
    }

    /// Compose the provider's values. The theme is validated before anything
    /// else is derived.
    pub fn resolve(&self, normalizer: &impl ChainNormalizer) -> Result<ResolvedProvider, ThemeError> {
        let theme = self.theme.resolve().inspect_err(|err| {
            tracing::error!(error = %err, "invalid theme configuration");
        })?;

        Ok(ResolvedProvider {
            id: self.id.clone(),
            chains: normalizer.normalize(&self.chains),
            app_info: AppInfo::from(self.app_info.as_ref()),
            show_recent_transactions: self.show_recent_transactions,
            cool_mode: self.cool_mode,
            theme_root: theme.map(|theme| ThemeRoot::build(theme, self.id.as_deref())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_info::DEFAULT_LEARN_MORE_URL;
    use crate::chains::DedupChains;
    use crate::theme::{ScopeAttribute, ThemeFactory};

    #[test]
    fn minimal_config_uses_defaults() {
        let config = ProviderConfig::from_json(r#"{ "chains": [{ "id": 1, "name": "Ethereum" }] }"#)
            .unwrap();
        assert_eq!(config.theme, ThemeInput::default());
        assert!(!config.cool_mode);
        assert!(!config.show_recent_transactions);

        let resolved = config.resolve(&DedupChains).unwrap();
        assert_eq!(resolved.app_info, AppInfo::default());
        assert_eq!(resolved.chains.len(), 1);
        let root = resolved.theme_root.unwrap();
        assert_eq!(root.attribute(), &ScopeAttribute::Anonymous);
        assert_eq!(root.selector().css(), "[data-rk]");
    }

    #[test]
    fn full_config() {
        let config = ProviderConfig::from_json(
            r##"{
                "chains": [{ "id": 1, "name": "Ethereum" }, { "id": 1, "name": "Again" }],
                "id": "a",
                "theme": {
                    "lightMode": { "colors": { "accentColor": "#fff" } },
                    "darkMode": { "colors": { "accentColor": "#000" } }
                },
                "appInfo": { "appName": "Demo" },
                "showRecentTransactions": true,
                "coolMode": true
            }"##,
        )
        .unwrap();

        let resolved = config.resolve(&DedupChains).unwrap();
        assert_eq!(resolved.id.as_deref(), Some("a"));
        assert_eq!(resolved.chains.len(), 1);
        assert_eq!(resolved.app_info.app_name, "Demo");
        assert_eq!(resolved.app_info.learn_more_url, DEFAULT_LEARN_MORE_URL);
        assert!(resolved.cool_mode);
        assert!(resolved.show_recent_transactions);
        assert_eq!(
            resolved.theme_root.unwrap().stylesheet(),
            "[data-rk-id=\"a\"]{--rk-colors-accentColor:#fff;}\
             @media(prefers-color-scheme:dark){[data-rk-id=\"a\"]{--rk-colors-accentColor:#000;}}"
        );
    }

    #[test]
    fn null_theme_disables_theming() {
        let config = ProviderConfig::from_json(r#"{ "chains": [], "theme": null }"#).unwrap();
        assert_eq!(config.theme, ThemeInput::Disabled);
        assert!(config.resolve(&DedupChains).unwrap().theme_root.is_none());
    }

    #[test]
    fn factory_theme_is_a_config_error() {
        let err = ProviderConfig::from_json(r#"{ "chains": [], "theme": "darkTheme" }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Theme(ThemeError::InvalidThemeConfiguration { ref factory }) if factory == "darkTheme"
        ));

        let config = ProviderConfig {
            theme: ThemeFactory::LIGHT.into(),
            ..ProviderConfig::default()
        };
        assert!(config.resolve(&DedupChains).is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ProviderConfig::from_json("{ \"chains\": 3 }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
