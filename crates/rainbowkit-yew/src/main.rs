use rainbowkit_yew::prelude::*;
use yew::prelude::*;

#[function_component(Status)]
fn status() -> Html {
    let app_info = use_app_info();
    let chains = use_chains();
    let scheme = use_color_scheme();
    let scope = use_theme_root_props();

    html! {
        <section>
            <h1>{ &app_info.app_name }</h1>
            <p>{ format!("{} chains, {} scheme", chains.len(), scheme.as_str()) }</p>
            <p>{ format!("scoped by {}=\"{}\"", scope.name(), scope.value()) }</p>
            <a href={app_info.learn_more_url.clone()}>{ "Learn more" }</a>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let chains = vec![Chain::new(1, "Ethereum"), Chain::new(10, "Optimism")];
    let theme = Theme::modes(
        light_theme(ThemeOptions::default().accent_color("#7b3fe4")),
        dark_theme(ThemeOptions::default().accent_color("#7b3fe4")),
    );

    html! {
        <RainbowKitProvider
            chains={chains}
            id="demo"
            theme={ThemeInput::from(theme)}
            app_info={AppInfoOverrides::default().app_name("RainbowKit Demo")}
            show_recent_transactions=true
        >
            <Status />
        </RainbowKitProvider>
    }
}

fn main() {
    rainbowkit::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
