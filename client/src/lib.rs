//! # client
//!
//! Leptos frontend for the ReaVSuite "coming soon" site, server-rendered by
//! the `server` crate and hydrated from WASM.
//!
//! This crate contains the landing and app-placeholder pages, the theme
//! store and resolver, the floating theme switcher, toast notifications, and
//! the shared query cache.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating app");
    leptos::mount::hydrate_body(app::App);
}
