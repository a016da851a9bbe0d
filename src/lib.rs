// src/lib.rs

//! Share card - a social-share product card with responsive desktop and
//! mobile layouts, rendered with Dioxus.

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    // Emergency error handling
    console_error_panic_hook::set_once();

    // Set up tracing with error handling
    if let Err(e) = tracing_wasm::try_set_as_global_default() {
        web_sys::console::error_1(&format!("Failed to set up tracing: {:?}", e).into());
    }

    // Launch with the built-in sample payload; no launcher injects one
    // on the web path.
    dioxus::launch(ui::App);
}

// Core modules (always available)
pub mod error;
pub mod model;
pub mod ui;

// Native-only modules
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Author, ImageRef, Product, SocialIcon};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
