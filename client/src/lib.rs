//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! The server renders the page with the `ssr` feature; the browser bundle is
//! built with `hydrate` and takes over scroll tracking, theme persistence,
//! the loading screen and the contact form. Form rules come from the shared
//! `contact` crate so the browser and server agree on what is valid.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
