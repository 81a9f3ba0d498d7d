use gloo_events::EventListener;
use rainbowkit::tracing;
use web_sys::window;
use yew::prelude::*;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// The OS color-scheme preference, i.e. whether the dark-mode rule of a
/// light/dark theme is currently active. Starts as `Light` until the first
/// effect runs, so server rendering never touches `window`.
#[hook]
pub fn use_color_scheme() -> ColorScheme {
    let scheme = use_state(|| ColorScheme::Light);

    {
        let scheme = scheme.clone();
        use_effect_with((), move |_| {
            let query = window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());

            let listener = query.map(|query| {
                scheme.set(ColorScheme::from_prefers_dark(query.matches()));

                let target = query.clone();
                EventListener::new(&query, "change", move |_| {
                    let next = ColorScheme::from_prefers_dark(target.matches());
                    tracing::debug!(scheme = next.as_str(), "color scheme changed");
                    scheme.set(next);
                })
            });

            move || drop(listener)
        });
    }

    *scheme
}
