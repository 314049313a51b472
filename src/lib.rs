//! Selection Filter WASM Module
//!
//! Restricts which element categories (voices, dynamics, lyrics,
//! articulations, ...) take part in range selections of a music notation
//! editor, and keeps a tri-state checklist in sync with the filter mask.

pub mod models;
pub mod filter_panel;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use models::elements::*;
pub use models::filter::*;
pub use filter_panel::{CheckState, FilterPanel, FilterHost, Announcer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Selection filter WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("Logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
