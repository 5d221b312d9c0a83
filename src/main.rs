//! Kanban Board Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod storage;
mod store;

use app::App;
use kanban_core::{BoardConfig, CONFIG_KEY};
use leptos::prelude::*;

use crate::storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match BoardConfig::read(&BrowserStorage, CONFIG_KEY) {
        Ok(config) => (config, None),
        Err(err) => (BoardConfig::default(), Some(err)),
    };
    logging::init(&config.log_level);
    if let Some(err) = config_error {
        tracing::warn!(%err, key = CONFIG_KEY, "using default configuration");
    }

    mount_to_body(move || view! { <App config=config /> });
}
