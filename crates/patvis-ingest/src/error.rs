//! Error types for patient data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the source tables.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the delimited table with Polars.
    #[error("failed to parse table {path}: {message}")]
    TableParse { path: PathBuf, message: String },

    /// Table has no data rows.
    #[error("table is empty: {path}")]
    EmptyTable { path: PathBuf },

    /// Required column not present in the table.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_display_names_both_column_and_file() {
        let err = IngestError::MissingColumn {
            column: "PATNO".to_string(),
            path: PathBuf::from("PatientDATA1.txt"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'PATNO' not found in PatientDATA1.txt"
        );
    }

    #[test]
    fn polars_errors_convert_to_dataframe_variant() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("HR".into());
        let err: IngestError = polars_err.into();
        assert!(matches!(err, IngestError::DataFrame { .. }));
    }
}
