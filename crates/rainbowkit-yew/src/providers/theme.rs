use rainbowkit::theme::{ScopeAttribute, ScopeSelector, Theme, ThemeRoot as ThemeRootStyles};
use yew::prelude::*;

/// The `id` of the closest provider. Descendants rendered outside the theme
/// root (portals, modals) use it to carry the same scope attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeIdContext(pub Option<AttrValue>);

#[derive(Properties, PartialEq)]
pub struct ThemeRootProps {
    /// `None` renders the children without a wrapper or stylesheet.
    #[prop_or_default]
    pub theme: Option<Theme>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeRoot)]
pub fn theme_root(props: &ThemeRootProps) -> Html {
    let styles = use_memo((props.theme.clone(), props.id.clone()), |(theme, id)| {
        theme
            .as_ref()
            .map(|theme| ThemeRootStyles::build(theme, id.as_deref()))
    });

    let Some(styles) = &*styles else {
        return html! { <>{props.children.clone()}</> };
    };

    let stylesheet = styles.stylesheet().to_string();
    match styles.attribute() {
        ScopeAttribute::Named(id) => html! {
            <div data-rk-id={id.clone()}>
                <style>{stylesheet}</style>
                {props.children.clone()}
            </div>
        },
        ScopeAttribute::Anonymous => html! {
            <div data-rk="">
                <style>{stylesheet}</style>
                {props.children.clone()}
            </div>
        },
    }
}

#[hook]
pub fn use_theme_id() -> Option<AttrValue> {
    use_context::<ThemeIdContext>().unwrap_or_default().0
}

/// The scope attribute of the closest provider, for elements that must match
/// its stylesheet without being rendered inside its wrapper.
#[hook]
pub fn use_theme_root_props() -> ScopeAttribute {
    let id = use_theme_id();
    ScopeSelector::derive(id.as_deref()).attribute().clone()
}
