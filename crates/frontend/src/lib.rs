//! Admin console: URL-driven list pages for orders and users.

pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Browser entry point, run by the wasm module on load.
#[wasm_bindgen(start)]
pub fn start() {
    // `log` facade → browser console
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
