// Phinidy George portfolio, Leptos 0.8 CSR front end

mod app;
mod components;
mod dom;
mod logging;
mod navigation;
mod pages;
mod sections;

use app::App;
use leptos::prelude::*;
use portfolio::SiteConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::embedded();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&config.logging.level);
    if let Err(e) = &loaded {
        tracing::warn!("Failed to parse embedded site.toml, using defaults: {}", e);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting portfolio site");
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
