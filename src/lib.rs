//! # agent-console
//!
//! Leptos + WASM client for a multi-channel agent console (live chat,
//! email, social, web forms).
//!
//! The crate authenticates the agent, initializes channel state, binds each
//! channel's input to its send action, opens the realtime socket, and shows
//! transient notifications. Startup and actions live in `console` behind
//! small port traits; `browser` supplies the web-backed implementations and
//! is compiled only with the `csr` feature.

pub mod app;
#[cfg(feature = "csr")]
pub mod browser;
pub mod components;
pub mod config;
pub mod console;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and mount the console.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
