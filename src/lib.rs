mod api;
mod app;
mod components;
mod config;
mod demo;
mod list;
mod models;
mod pages;
mod state;
mod storage;
mod telemetry;
mod util;

use crate::app::App;
use crate::config::EnvConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = EnvConfig::new();
    telemetry::init(&config.log_level);
    tracing::info!(
        api_url = %config.api_url,
        page_size = config.page_size,
        demo_mode = config.demo_mode,
        "starting admin dashboard"
    );

    mount_to_body(move || view! { <App config=config /> });
}
