//! # nanocut-client
//!
//! Leptos + WASM frontend for the NanoCut URL shortener.
//!
//! This crate contains pages, components, application state and the REST
//! client. The `ssr` feature builds it into the host binary for server-side
//! rendering; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already initialised: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
