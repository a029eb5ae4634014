//! # client
//!
//! Leptos + WASM frontend for FloatChat: a map of ocean floats with a chat
//! panel that asks the chat service about the selected float.
//!
//! This crate contains the page, components, reactive state wrappers, the
//! chat-service call and a thin Leaflet binding. Session logic lives in the
//! `session` crate; decorative effects live in `effects`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
