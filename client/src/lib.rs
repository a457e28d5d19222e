//! # bluenexus-client
//!
//! Leptos + WASM frontend for the Blue Nexus marine analytics dashboard.
//!
//! This crate contains the application shell, the seven module pages,
//! presentation widgets, plain-Rust view-state models, and the static sample
//! data tables they render. No network or persistence layer exists: every
//! figure on screen comes from `data`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating blue nexus shell");
    leptos::mount::hydrate_body(app::App);
}
