//! # garage-webapp
//!
//! Leptos + WASM frontend for the garage car-tuning mini-game, embedded in
//! the host messaging app's webview. The client is pure presentation glue:
//! it fetches user/car snapshots from the backend REST API, renders them
//! into reactive widgets, and forwards tuning/upgrade/race actions before
//! resyncing state from the server.
//!
//! This crate contains the single garage page, its components, application
//! state, network helpers, and the host-environment bindings.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the browser build.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
