//! Error types for the cleaning transformations.

use thiserror::Error;

/// Errors that can occur while cleaning the joined table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A date value does not match the expected `DD-MM-YYYY` pattern.
    #[error("invalid date '{value}' in column '{column}': expected DD-MM-YYYY")]
    DateFormat { column: String, value: String },

    /// A composite value does not split into the expected parts.
    #[error("invalid composite value '{value}' in column '{column}': {reason}")]
    CompositeFormat {
        column: String,
        value: String,
        reason: String,
    },

    /// Column not found in the frame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Selecting columns by name and by positional index disagreed.
    #[error("projection mismatch: by name {by_name:?}, by index {by_index:?}")]
    ProjectionMismatch {
        by_name: Vec<String>,
        by_index: Vec<String>,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
