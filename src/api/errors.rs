//! Error types for the WASM API

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterApiError {
    /// No document has been loaded into the filter panel
    #[error("No document loaded")]
    NoDocument,

    #[error("Filter row {index} out of range (rows: {len})")]
    RowOutOfRange { index: usize, len: usize },

    /// Value could not cross the JS boundary
    #[error("Serialization error: {0}")]
    Serialization(String),
}
