//! Patient visit data ingestion.
//!
//! This crate loads the two source tables of the cleaning pipeline into
//! Polars DataFrames:
//!
//! - `PatientDATA1.txt` — tab-delimited patient records (`PATNO`,
//!   `GENDER`, `HR`, plus passthrough columns)
//! - `PatientDATA2.txt` — comma-delimited visit records (`PATNO`,
//!   `VISIT`, `SBP_DBP`, `AE`)
//!
//! Loading fails fast: a missing file, a malformed table, or an absent
//! required column aborts the pipeline with a structured error.

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{
    PATIENT_REQUIRED_COLUMNS, VISIT_REQUIRED_COLUMNS, read_delimited_table, read_patient_records,
    read_visit_records, require_columns,
};
