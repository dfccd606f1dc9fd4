//! Patient visit data cleaning CLI.
//!
//! Library surface for the `patvis` binary: logging setup, the staged
//! cleaning pipeline, and the console summary.

pub mod logging;
pub mod pipeline;
pub mod summary;
