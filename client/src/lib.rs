//! # client
//!
//! Leptos front-end for ClubHub BD: the club directory, event schedule,
//! membership applications, and the sign-in flow built on the `session`
//! crate.
//!
//! Rendered on the server by the root `clubhub` binary (`ssr`) and hydrated
//! in the browser from the WASM build (`hydrate`).

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only fails because a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
