//! Recipe Book Frontend Entry Point

mod api;
mod app;
mod browser;
mod cache;
mod clients;
mod components;
mod config;
mod context;
mod error;
mod models;
mod session;
mod store;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = rolling_logger::init(config.logger()) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    log::info!("[APP] Backend at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
