//! # client
//!
//! Leptos + WASM frontend for the CardioCheck risk-assessment application.
//!
//! This crate contains pages, components, application state, network DTOs,
//! and the browser utility layer. It is compiled twice: to WASM with the
//! `hydrate` feature for the browser, and natively with the `ssr` feature
//! for server-side rendering inside the `server` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
