//! # studentgrading-client
//!
//! Leptos + WASM frontend for the student-grading web application.
//! Replaces the per-page jQuery scripts (`base.js`, `student.js`,
//! `teacher.js`) with a single Rust-native UI layer.
//!
//! This crate contains pages, components, per-page view-model state,
//! and the typed REST client for the grading API. The server remains
//! the sole source of truth: every view re-fetches on each render.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// WASM entry point: set up panic/console logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
