//! # evcheck-schema — Validation Engine
//!
//! Runtime validation of JSON event documents against JSON Schema
//! definitions (Draft 7).
//!
//! ## Failure Isolation
//!
//! Nothing a single schema file or event document can contain aborts a
//! run. A schema that fails to read, parse, or compile becomes an
//! [`registry::SchemaEntry::Invalid`] entry that documents can still
//! resolve (and be told about); a document that fails any pipeline stage
//! contributes error messages to the report and processing moves on.
//!
//! ## Modules
//!
//! - [`registry`] — loads and compiles the schema directory into a map
//!   keyed by filename stem.
//! - [`document`] — the per-document pipeline: parse → shape check →
//!   `event`/`data` structural checks → schema resolution → conformance.
//! - [`batch`] — enumerates the event directory and assembles the
//!   [`evcheck_core::Report`].

pub mod batch;
pub mod document;
pub mod registry;

pub use batch::run_batch;
pub use document::validate_document;
pub use registry::{SchemaEntry, SchemaRegistry};
