//! App metadata shown by the wallet widgets.

use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_NAME: &str = "Your App";
pub const DEFAULT_LEARN_MORE_URL: &str = "https://learn.rainbow.me/what-is-a-wallet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub app_name: String,
    pub learn_more_url: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            learn_more_url: DEFAULT_LEARN_MORE_URL.to_string(),
        }
    }
}

/// Caller-supplied app info. Unset fields keep the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppInfoOverrides {
    pub app_name: Option<String>,
    pub learn_more_url: Option<String>,
}

impl AppInfoOverrides {
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn learn_more_url(mut self, url: impl Into<String>) -> Self {
        self.learn_more_url = Some(url.into());
        self
    }
}

impl AppInfo {
    pub fn with_overrides(&self, overrides: &AppInfoOverrides) -> AppInfo {
        AppInfo {
            app_name: overrides
                .app_name
                .clone()
                .unwrap_or_else(|| self.app_name.clone()),
            learn_more_url: overrides
                .learn_more_url
                .clone()
                .unwrap_or_else(|| self.learn_more_url.clone()),
        }
    }
}

impl From<Option<&AppInfoOverrides>> for AppInfo {
    fn from(overrides: Option<&AppInfoOverrides>) -> Self {
        match overrides {
            Some(overrides) => AppInfo::default().with_overrides(overrides),
            None => AppInfo::default(),
        }
    }
}
