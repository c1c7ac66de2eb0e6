//! Pokédex Frontend Entry Point

mod app;
mod catalogue;
mod colors;
mod components;
mod config;
mod context;
mod error;
mod models;
mod services;
mod store;
mod title;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::from_window();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    if console_logger::init(config.log_level()).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    if let Err(e) = loaded {
        log::warn!("Falling back to default configuration: {}", e);
    }

    let repository = services::repository_from_config(&config);
    mount_to_body(move || view! { <App config=config repository=repository /> });
}
