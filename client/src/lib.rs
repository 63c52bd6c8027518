//! # lyceum-client
//!
//! Leptos + WASM frontend for Lyceum: login, registration, OAuth callback
//! handling, and a protected profile page against the remote Lyceum API.
//!
//! This crate contains pages, the session store, the route guard, the auth
//! operations that tie them together, and the HTTP transport used to reach
//! the API. Browser builds enable `hydrate`; the Axum host enables `ssr`.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod route;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
