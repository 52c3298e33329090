//! Root application component and the browser entry point.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::page::PageContext;
use crate::util::theme_persistence;

/// Root application component.
///
/// Restores the stored theme and provides the page context before rendering
/// the home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = theme_persistence::read_preference();
    theme_persistence::apply(theme);
    provide_context(PageContext::new(SiteConfig::from_env(), theme));

    view! {
        <Title text="Royal Photowaala"/>
        <Meta name="description" content="Wedding, pre-wedding, portrait and event photography."/>
        <HomePage/>
    }
}

/// WASM entry point: install the panic hook and logger, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting site, api at {}", SiteConfig::from_env().api_base_url);
    leptos::mount::mount_to_body(App);
}
