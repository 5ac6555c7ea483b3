//! # evcheck-core — Foundational Types for evcheck
//!
//! This crate is the leaf of the evcheck workspace DAG. It defines the
//! pieces of the pipeline that are pure data manipulation:
//!
//! - [`error::EvcheckError`] — the operational error hierarchy. Per-item
//!   failures (a schema that does not compile, a document that is not
//!   JSON) are *data* in the report, never errors; this enum only covers
//!   failures with no recovery path.
//! - [`report::Report`] — the result structure assembled by the batch
//!   runner: schema-load errors plus per-document error lists, both keyed
//!   by sorted name so output is reproducible.
//! - [`prune`] — recursive removal of empty values from a JSON tree
//!   before rendering.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `evcheck-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`.

pub mod error;
pub mod prune;
pub mod report;

pub use error::EvcheckError;
pub use prune::prune;
pub use report::{write_report, Report};
