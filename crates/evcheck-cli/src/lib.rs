//! # evcheck-cli — Command-Line Interface
//!
//! Argument parsing, startup checks, and orchestration for the `evcheck`
//! binary. Business logic lives in `evcheck-schema` and `evcheck-core`;
//! this crate only wires the pipeline together.

pub mod paths;
