//! Built-in light and dark themes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vars::{ThemeVar, ThemeVars};
use crate::theme_vars;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderRadius {
    None,
    Small,
    Medium,
    #[default]
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontStack {
    System,
    #[default]
    Rounded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayBlur {
    #[default]
    None,
    Small,
    Large,
}

/// Knobs shared by every preset. Unset colors fall back to the preset's own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOptions {
    pub accent_color: Option<String>,
    pub accent_color_foreground: Option<String>,
    pub border_radius: BorderRadius,
    pub font_stack: FontStack,
    pub overlay_blur: OverlayBlur,
}

impl ThemeOptions {
    pub fn accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = Some(color.into());
        self
    }

    pub fn accent_color_foreground(mut self, color: impl Into<String>) -> Self {
        self.accent_color_foreground = Some(color.into());
        self
    }

    pub fn border_radius(mut self, radius: BorderRadius) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn font_stack(mut self, stack: FontStack) -> Self {
        self.font_stack = stack;
        self
    }

    pub fn overlay_blur(mut self, blur: OverlayBlur) -> Self {
        self.overlay_blur = blur;
        self
    }
}

const SYSTEM_FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\"";
const ROUNDED_FONT_STACK: &str = "SFRounded, ui-rounded, \"SF Pro Rounded\", -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\"";

fn base_theme(options: &ThemeOptions) -> ThemeVars {
    let (action_button, connect_button, modal, modal_mobile) = match options.border_radius {
        BorderRadius::None => ("0px", "0px", "0px", "0px"),
        BorderRadius::Small => ("4px", "4px", "8px", "8px"),
        BorderRadius::Medium => ("10px", "8px", "16px", "18px"),
        BorderRadius::Large => ("9999px", "12px", "24px", "28px"),
    };
    let font = match options.font_stack {
        FontStack::System => SYSTEM_FONT_STACK,
        FontStack::Rounded => ROUNDED_FONT_STACK,
    };
    let blur = match options.overlay_blur {
        OverlayBlur::None => "blur(0px)",
        OverlayBlur::Small => "blur(4px)",
        OverlayBlur::Large => "blur(20px)",
    };

    theme_vars! {
        Body => font,
        ActionButtonRadius => action_button,
        ConnectButtonRadius => connect_button,
        MenuButtonRadius => connect_button,
        ModalRadius => modal,
        ModalMobileRadius => modal_mobile,
        ModalOverlayBlur => blur,
    }
}

fn apply_accent(vars: &mut ThemeVars, options: &ThemeOptions, accent: &str, foreground: &str) {
    vars.set(
        ThemeVar::AccentColor,
        options.accent_color.as_deref().unwrap_or(accent),
    );
    vars.set(
        ThemeVar::AccentColorForeground,
        options.accent_color_foreground.as_deref().unwrap_or(foreground),
    );
}

pub fn light_theme(options: ThemeOptions) -> ThemeVars {
    let mut vars = base_theme(&options).merged_with(&theme_vars! {
        ActionButtonBorder => "rgba(0, 0, 0, 0.04)",
        ActionButtonBorderMobile => "rgba(0, 0, 0, 0.06)",
        ActionButtonSecondaryBackground => "rgba(0, 0, 0, 0.06)",
        CloseButton => "rgba(60, 66, 66, 0.8)",
        CloseButtonBackground => "rgba(0, 0, 0, 0.06)",
        ConnectButtonBackground => "#FFF",
        ConnectButtonBackgroundError => "#FF494A",
        ConnectButtonInnerBackground => "linear-gradient(0deg, rgba(0, 0, 0, 0.03), rgba(0, 0, 0, 0.06))",
        ConnectButtonText => "#25292E",
        ConnectButtonTextError => "#FFF",
        ConnectionIndicator => "#30E000",
        Error => "#FF494A",
        GeneralBorder => "rgba(0, 0, 0, 0.06)",
        GeneralBorderDim => "rgba(0, 0, 0, 0.03)",
        MenuItemBackground => "rgba(60, 66, 66, 0.1)",
        ModalBackdrop => "rgba(0, 0, 0, 0.3)",
        ModalBackground => "#FFF",
        ModalBorder => "transparent",
        ModalText => "#25292E",
        ModalTextDim => "rgba(60, 66, 66, 0.3)",
        ModalTextSecondary => "rgba(60, 66, 66, 0.6)",
        ProfileAction => "#FFF",
        ProfileActionHover => "rgba(255, 255, 255, 0.5)",
        ProfileForeground => "rgba(60, 66, 66, 0.06)",
        SelectedOptionBorder => "rgba(60, 66, 66, 0.1)",
        Standby => "#FFD641",
        ConnectButtonShadow => "0px 4px 12px rgba(0, 0, 0, 0.1)",
        DialogShadow => "0px 8px 32px rgba(0, 0, 0, 0.32)",
        ProfileDetailsActionShadow => "0px 2px 6px rgba(37, 41, 46, 0.04)",
        SelectedOptionShadow => "0px 2px 6px rgba(0, 0, 0, 0.24)",
        SelectedWalletShadow => "0px 2px 6px rgba(0, 0, 0, 0.12)",
        WalletLogoShadow => "0px 2px 16px rgba(0, 0, 0, 0.16)",
    });
    apply_accent(&mut vars, &options, "#0E76FD", "#FFF");
    vars
}

pub fn dark_theme(options: ThemeOptions) -> ThemeVars {
    let mut vars = base_theme(&options).merged_with(&theme_vars! {
        ActionButtonBorder => "rgba(255, 255, 255, 0.04)",
        ActionButtonBorderMobile => "rgba(255, 255, 255, 0.08)",
        ActionButtonSecondaryBackground => "rgba(255, 255, 255, 0.08)",
        CloseButton => "rgba(224, 232, 255, 0.6)",
        CloseButtonBackground => "rgba(255, 255, 255, 0.08)",
        ConnectButtonBackground => "#1A1B1F",
        ConnectButtonBackgroundError => "#FF494A",
        ConnectButtonInnerBackground => "linear-gradient(0deg, rgba(255, 255, 255, 0.075), rgba(255, 255, 255, 0.15))",
        ConnectButtonText => "#FFF",
        ConnectButtonTextError => "#FFF",
        ConnectionIndicator => "#30E000",
        Error => "#FF494A",
        GeneralBorder => "rgba(255, 255, 255, 0.08)",
        GeneralBorderDim => "rgba(255, 255, 255, 0.04)",
        MenuItemBackground => "rgba(224, 232, 255, 0.1)",
        ModalBackdrop => "rgba(0, 0, 0, 0.5)",
        ModalBackground => "#1A1B1F",
        ModalBorder => "rgba(255, 255, 255, 0.08)",
        ModalText => "#FFF",
        ModalTextDim => "rgba(224, 232, 255, 0.3)",
        ModalTextSecondary => "rgba(255, 255, 255, 0.6)",
        ProfileAction => "rgba(224, 232, 255, 0.1)",
        ProfileActionHover => "rgba(224, 232, 255, 0.2)",
        ProfileForeground => "rgba(224, 232, 255, 0.05)",
        SelectedOptionBorder => "rgba(224, 232, 255, 0.1)",
        Standby => "#FFD641",
        ConnectButtonShadow => "0px 4px 12px rgba(0, 0, 0, 0.1)",
        DialogShadow => "0px 8px 32px rgba(0, 0, 0, 0.32)",
        ProfileDetailsActionShadow => "0px 2px 6px rgba(37, 41, 46, 0.04)",
        SelectedOptionShadow => "0px 2px 6px rgba(0, 0, 0, 0.24)",
        SelectedWalletShadow => "0px 2px 6px rgba(0, 0, 0, 0.24)",
        WalletLogoShadow => "0px 2px 16px rgba(0, 0, 0, 0.16)",
    });
    apply_accent(&mut vars, &options, "#3898FF", "#FFF");
    vars
}

/// The theme a provider uses when the caller does not pass one.
pub fn default_theme() -> ThemeVars {
    light_theme(ThemeOptions::default())
}

/// A named theme constructor that has not been called yet.
#[derive(Clone, Copy)]
pub struct ThemeFactory {
    name: &'static str,
    build: fn(ThemeOptions) -> ThemeVars,
}

impl ThemeFactory {
    pub const LIGHT: ThemeFactory = ThemeFactory {
        name: "lightTheme",
        build: light_theme,
    };
    pub const DARK: ThemeFactory = ThemeFactory {
        name: "darkTheme",
        build: dark_theme,
    };

    pub fn named(name: &str) -> Option<Self> {
        [Self::LIGHT, Self::DARK]
            .into_iter()
            .find(|factory| factory.name == name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn invoke(&self, options: ThemeOptions) -> ThemeVars {
        (self.build)(options)
    }
}

impl PartialEq for ThemeFactory {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ThemeFactory {}

impl fmt::Debug for ThemeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThemeFactory({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_cover_every_key() {
        for vars in [light_theme(ThemeOptions::default()), dark_theme(ThemeOptions::default())] {
            assert_eq!(vars.len(), ThemeVar::ALL.len());
        }
    }

    #[test]
    fn accent_options_override_preset_colors() {
        let vars = dark_theme(
            ThemeOptions::default()
                .accent_color("#7b3fe4")
                .accent_color_foreground("white"),
        );
        assert_eq!(vars.get(ThemeVar::AccentColor), Some("#7b3fe4"));
        assert_eq!(vars.get(ThemeVar::AccentColorForeground), Some("white"));
    }

    #[test]
    fn shape_options() {
        let vars = light_theme(
            ThemeOptions::default()
                .border_radius(BorderRadius::None)
                .font_stack(FontStack::System)
                .overlay_blur(OverlayBlur::Small),
        );
        assert_eq!(vars.get(ThemeVar::ModalRadius), Some("0px"));
        assert_eq!(vars.get(ThemeVar::Body), Some(SYSTEM_FONT_STACK));
        assert_eq!(vars.get(ThemeVar::ModalOverlayBlur), Some("blur(4px)"));
    }

    #[test]
    fn factories_by_name() {
        assert_eq!(ThemeFactory::named("lightTheme"), Some(ThemeFactory::LIGHT));
        assert_eq!(ThemeFactory::named("darkTheme"), Some(ThemeFactory::DARK));
        assert_eq!(ThemeFactory::named("midnightTheme"), None);
        assert_eq!(
            ThemeFactory::LIGHT.invoke(ThemeOptions::default()),
            default_theme()
        );
    }
}
