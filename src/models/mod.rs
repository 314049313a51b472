//! Models module for the selection filter
//!
//! This module contains the document, score element and filter mask
//! structures the filter panel works on.

pub mod core;
pub mod elements;
pub mod filter;

// Re-export commonly used types
pub use self::core::*;
pub use elements::*;
pub use filter::*;
