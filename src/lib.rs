//! # foodcourt-client
//!
//! Leptos + WASM frontend for the Foodcourt ordering platform: login with a
//! remembered or session-scoped token, a business listing, per-business
//! menus feeding a shared cart, and order history.
//!
//! The contractual core is deliberately small and UI-free: the session-token
//! lifecycle ([`session`], [`storage`]), the pre-navigation authorization
//! guard ([`guard`], [`routes`]), the cart aggregation store
//! ([`state::cart`]), and the HTTP envelope handling ([`net`]). Pages and
//! components are thin consumers of those modules.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
