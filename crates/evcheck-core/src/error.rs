//! # Error Types
//!
//! Operational errors for the evcheck pipeline. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Almost everything that can go wrong during a run is isolated per item
//! and reported as data: a schema that fails to compile becomes an invalid
//! registry entry, a document that fails to parse becomes an error line in
//! the report. This enum covers only the conditions that abort the run:
//! missing input directories, an unreadable schema or event directory, and
//! failure to write the final report.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level operational error for evcheck.
#[derive(Error, Debug)]
pub enum EvcheckError {
    /// A required input directory is missing or is not a directory.
    #[error("required directory missing or not a directory: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// IO error enumerating a directory or writing the report.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
