//! The closed vocabulary of themeable variables.
//!
//! Every recognized key is a [`ThemeVar`]. The declaration order below is the
//! canonical order: [`ThemeVars`] iterates in it, so compiled CSS is
//! byte-identical for equal inputs.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeGroup {
    Colors,
    Fonts,
    Radii,
    Shadows,
    Blurs,
}

impl ThemeGroup {
    pub const ALL: [ThemeGroup; 5] = [
        ThemeGroup::Colors,
        ThemeGroup::Fonts,
        ThemeGroup::Radii,
        ThemeGroup::Shadows,
        ThemeGroup::Blurs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeGroup::Colors => "colors",
            ThemeGroup::Fonts => "fonts",
            ThemeGroup::Radii => "radii",
            ThemeGroup::Shadows => "shadows",
            ThemeGroup::Blurs => "blurs",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.as_str() == s)
    }
}

macro_rules! theme_schema {
    ($($variant:ident => ($group:ident, $name:literal)),+ $(,)?) => {
        /// A recognized theme key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ThemeVar {
            $($variant),+
        }

        impl ThemeVar {
            /// Every key, in canonical order.
            pub const ALL: &'static [ThemeVar] = &[$(ThemeVar::$variant),+];

            pub fn group(&self) -> ThemeGroup {
                match self {
                    $(ThemeVar::$variant => ThemeGroup::$group),+
                }
            }

            /// The camelCase name of the key inside its group.
            pub fn name(&self) -> &'static str {
                match self {
                    $(ThemeVar::$variant => $name),+
                }
            }

            /// The CSS custom property this key compiles to.
            pub fn css_name(&self) -> &'static str {
                match self {
                    $(ThemeVar::$variant => concat!("--rk-", theme_schema!(@group $group), "-", $name)),+
                }
            }
        }
    };
    (@group Colors) => { "colors" };
    (@group Fonts) => { "fonts" };
    (@group Radii) => { "radii" };
    (@group Shadows) => { "shadows" };
    (@group Blurs) => { "blurs" };
}

theme_schema! {
    AccentColor => (Colors, "accentColor"),
    AccentColorForeground => (Colors, "accentColorForeground"),
    ActionButtonBorder => (Colors, "actionButtonBorder"),
    ActionButtonBorderMobile => (Colors, "actionButtonBorderMobile"),
    ActionButtonSecondaryBackground => (Colors, "actionButtonSecondaryBackground"),
    CloseButton => (Colors, "closeButton"),
    CloseButtonBackground => (Colors, "closeButtonBackground"),
    ConnectButtonBackground => (Colors, "connectButtonBackground"),
    ConnectButtonBackgroundError => (Colors, "connectButtonBackgroundError"),
    ConnectButtonInnerBackground => (Colors, "connectButtonInnerBackground"),
    ConnectButtonText => (Colors, "connectButtonText"),
    ConnectButtonTextError => (Colors, "connectButtonTextError"),
    ConnectionIndicator => (Colors, "connectionIndicator"),
    Error => (Colors, "error"),
    GeneralBorder => (Colors, "generalBorder"),
    GeneralBorderDim => (Colors, "generalBorderDim"),
    MenuItemBackground => (Colors, "menuItemBackground"),
    ModalBackdrop => (Colors, "modalBackdrop"),
    ModalBackground => (Colors, "modalBackground"),
    ModalBorder => (Colors, "modalBorder"),
    ModalText => (Colors, "modalText"),
    ModalTextDim => (Colors, "modalTextDim"),
    ModalTextSecondary => (Colors, "modalTextSecondary"),
    ProfileAction => (Colors, "profileAction"),
    ProfileActionHover => (Colors, "profileActionHover"),
    ProfileForeground => (Colors, "profileForeground"),
    SelectedOptionBorder => (Colors, "selectedOptionBorder"),
    Standby => (Colors, "standby"),
    Body => (Fonts, "body"),
    ActionButtonRadius => (Radii, "actionButton"),
    ConnectButtonRadius => (Radii, "connectButton"),
    MenuButtonRadius => (Radii, "menuButton"),
    ModalRadius => (Radii, "modal"),
    ModalMobileRadius => (Radii, "modalMobile"),
    ConnectButtonShadow => (Shadows, "connectButton"),
    DialogShadow => (Shadows, "dialog"),
    ProfileDetailsActionShadow => (Shadows, "profileDetailsAction"),
    SelectedOptionShadow => (Shadows, "selectedOption"),
    SelectedWalletShadow => (Shadows, "selectedWallet"),
    WalletLogoShadow => (Shadows, "walletLogo"),
    ModalOverlayBlur => (Blurs, "modalOverlay"),
}

impl ThemeVar {
    /// Find a key by group and name, e.g. `("colors", "accentColor")`.
    pub fn lookup(group: &str, name: &str) -> Option<Self> {
        let group = ThemeGroup::from_str(group)?;
        Self::ALL
            .iter()
            .copied()
            .find(|var| var.group() == group && var.name() == name)
    }
}

impl fmt::Display for ThemeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group().as_str(), self.name())
    }
}

/// A set of theme values keyed by [`ThemeVar`].
///
/// Values are opaque CSS tokens: they are stored and emitted exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ThemeVars(BTreeMap<ThemeVar, String>);

impl ThemeVars {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, var: ThemeVar, value: impl Into<String>) -> Option<String> {
        self.0.insert(var, value.into())
    }

    /// Builder form of [`ThemeVars::set`].
    pub fn with(mut self, var: ThemeVar, value: impl Into<String>) -> Self {
        self.set(var, value);
        self
    }

    pub fn get(&self, var: ThemeVar) -> Option<&str> {
        self.0.get(&var).map(String::as_str)
    }

    pub fn remove(&mut self, var: ThemeVar) -> Option<String> {
        self.0.remove(&var)
    }

    /// Iterate present keys in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeVar, &str)> {
        self.0.iter().map(|(var, value)| (*var, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply `overrides` as a delta over `self`: keys present in `overrides`
    /// win, every other key keeps its value from `self`.
    pub fn merged_with(&self, overrides: &ThemeVars) -> ThemeVars {
        let mut merged = self.clone();
        for (var, value) in overrides.iter() {
            merged.set(var, value);
        }
        merged
    }
}

impl FromIterator<(ThemeVar, String)> for ThemeVars {
    fn from_iter<I: IntoIterator<Item = (ThemeVar, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ThemeVars {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut groups: BTreeMap<ThemeGroup, BTreeMap<&'static str, &str>> = BTreeMap::new();
        for (var, value) in self.iter() {
            groups.entry(var.group()).or_default().insert(var.name(), value);
        }

        let mut map = serializer.serialize_map(Some(groups.len()))?;
        for (group, entries) in &groups {
            map.serialize_entry(group.as_str(), entries)?;
        }
        map.end()
    }
}

/// A theme value as it may appear in JSON. Numbers keep their textual form.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Other(serde::de::IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGroup {
    Entries(BTreeMap<String, RawValue>),
    Other(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for ThemeVars {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ThemeVarsVisitor;

        impl<'de> Visitor<'de> for ThemeVarsVisitor {
            type Value = ThemeVars;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of theme groups to theme values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut vars = ThemeVars::new();
                while let Some(group) = access.next_key::<String>()? {
                    let RawGroup::Entries(entries) = access.next_value::<RawGroup>()? else {
                        tracing::debug!(group = %group, "ignoring non-map theme group");
                        continue;
                    };
                    for (name, value) in entries {
                        let Some(var) = ThemeVar::lookup(&group, &name) else {
                            tracing::debug!(group = %group, name = %name, "ignoring unknown theme key");
                            continue;
                        };
                        match value {
                            RawValue::Text(text) => {
                                vars.set(var, text);
                            }
                            RawValue::Number(number) => {
                                vars.set(var, number.to_string());
                            }
                            RawValue::Other(_) => {
                                tracing::debug!(key = %var, "ignoring non-scalar theme value");
                            }
                        }
                    }
                }
                Ok(vars)
            }
        }

        deserializer.deserialize_map(ThemeVarsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_follows_declaration() {
        let vars = ThemeVars::new()
            .with(ThemeVar::ModalOverlayBlur, "blur(0px)")
            .with(ThemeVar::Body, "sans-serif")
            .with(ThemeVar::AccentColor, "#fff");

        let keys: Vec<_> = vars.iter().map(|(var, _)| var).collect();
        assert_eq!(
            keys,
            vec![ThemeVar::AccentColor, ThemeVar::Body, ThemeVar::ModalOverlayBlur]
        );
    }

    #[test]
    fn css_names_are_unique() {
        let mut names: Vec<_> = ThemeVar::ALL.iter().map(|var| var.css_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ThemeVar::ALL.len());
        assert_eq!(ThemeVar::AccentColor.css_name(), "--rk-colors-accentColor");
        assert_eq!(ThemeVar::ModalRadius.css_name(), "--rk-radii-modal");
    }

    #[test]
    fn lookup_by_group_and_name() {
        assert_eq!(
            ThemeVar::lookup("shadows", "connectButton"),
            Some(ThemeVar::ConnectButtonShadow)
        );
        assert_eq!(
            ThemeVar::lookup("radii", "connectButton"),
            Some(ThemeVar::ConnectButtonRadius)
        );
        assert_eq!(ThemeVar::lookup("colors", "nope"), None);
        assert_eq!(ThemeVar::lookup("nope", "accentColor"), None);
    }

    #[test]
    fn merged_with_applies_delta() {
        let base = ThemeVars::new()
            .with(ThemeVar::AccentColor, "#fff")
            .with(ThemeVar::ModalText, "#000");
        let delta = ThemeVars::new().with(ThemeVar::AccentColor, "#111");

        let merged = base.merged_with(&delta);
        assert_eq!(merged.get(ThemeVar::AccentColor), Some("#111"));
        assert_eq!(merged.get(ThemeVar::ModalText), Some("#000"));
    }

    #[test]
    fn deserialize_ignores_unknown_keys() {
        let vars: ThemeVars = serde_json::from_str(
            r##"{
                "colors": { "accentColor": "#fff", "futureColor": "red" },
                "radii": { "modal": 12 },
                "sparkles": { "amount": "lots" }
            }"##,
        )
        .unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get(ThemeVar::AccentColor), Some("#fff"));
        assert_eq!(vars.get(ThemeVar::ModalRadius), Some("12"));
    }

    #[test]
    fn serializes_as_nested_groups() {
        let vars = ThemeVars::new()
            .with(ThemeVar::AccentColor, "#fff")
            .with(ThemeVar::ModalRadius, "24px");

        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "colors": { "accentColor": "#fff" },
                "radii": { "modal": "24px" }
            })
        );
    }
}
