//! Tumbuh Ide Web Frontend
//!
//! Leptos-based WASM single-page app: the application shell, the public
//! marketing pages and the account forms.

mod api;
mod app;
mod components;
mod content;
mod context;
mod pages;
mod submit;
mod theme;
mod timer;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    tracing::info!("mounting Tumbuh Ide front end");
    leptos::mount::mount_to_body(App);
}
