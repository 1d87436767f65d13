//! # mesto-host-ui
//!
//! Leptos + WASM host shell for the Mesto micro-frontend application.
//!
//! The host owns routing, session state, the card feed and popup
//! orchestration. Login, registration and the profile/card editors are
//! independently deployed remote modules resolved at runtime by name; when a
//! remote cannot be resolved the host renders a fixed fallback in its place.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod remote;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
