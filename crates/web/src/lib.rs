//! `prodcat-web`
//!
//! **Responsibility:** browser front end for the product catalog.
//!
//! The Leptos component tree is only compiled for `wasm32`; the class
//! derivation it renders with and the action feedback it shows are plain
//! Rust and tested on the host.

pub mod classes;
pub mod feedback;

#[cfg(target_arch = "wasm32")]
pub mod app;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
