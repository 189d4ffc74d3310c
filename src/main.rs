//! Survey Review Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod reconcile;
mod store;
mod task;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::log_level());

    let config = AppConfig::load();
    tracing::info!(api = %config.api_base_url, "starting survey review ui");
    mount_to_body(move || view! { <App config=config /> });
}
