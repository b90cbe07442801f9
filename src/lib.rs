//! # cinema-admin
//!
//! Leptos + WASM admin console for the cinema booking platform.
//!
//! This crate contains the session guard (persisted session store, token
//! inspector, remote verifier, route guards), the login/dashboard/users pages,
//! and the REST helpers they depend on. Movie, genre, and booking screens are
//! served by other crates and only need a route to sit behind `ProtectedRoute`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let config = config::AdminConfig::from_env();
    let _ = console_log::init_with_level(config.log_level);
    leptos::mount::hydrate_body(app::App);
}
