//! Selection Filter WASM API
//!
//! This module provides the JavaScript-facing API for the selection filter.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization and error conversion
//! - `errors`: API error type
//! - `filter`: WASM-owned filter panel and its exported operations

pub mod helpers;
pub mod errors;
pub mod filter;

pub use errors::FilterApiError;
pub use filter::{
    clear_selection, click_filter_row, filter_mask, filter_rows, load_document, select_range,
    selected_elements, set_filter_row, unload_document,
};
