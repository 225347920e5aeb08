//! # kitchen-client
//!
//! Leptos + WASM front-end for the Giraffe Kitchen management product.
//!
//! The crate holds the login screen, the restaurant dashboard, the session
//! gate that decides between them, and the HTTP client used to talk to the
//! kitchen API. Pure logic (routing decisions, form state, facades over a
//! pluggable transport) builds natively so it can be unit-tested; the
//! browser glue lives behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("kitchen client starting");
    leptos::mount::mount_to_body(app::App);
}
