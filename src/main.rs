//! Graffiti Wall Frontend Entry Point

mod models;
mod config;
mod error;
mod style;
mod wall;
mod typewriter;
mod context;
mod components;
mod app;

use app::App;
use config::WallConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = WallConfig::load();
    let level = config.level_filter().unwrap_or(LevelFilter::Info);
    if console_logger::init(level).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    if let Some(e) = config_error {
        log::warn!("Falling back to default wall config: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
