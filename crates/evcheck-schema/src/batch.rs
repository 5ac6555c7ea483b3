//! # Batch Runner
//!
//! Enumerates the event directory, validates every document against the
//! registry, and assembles the [`Report`]. Documents are processed one at
//! a time: each file is read fully and closed before the next is touched,
//! and the read-only registry is the only shared state.
//!
//! Every file gets a report entry, clean files included (as empty error
//! lists). Pruning removes the empty entries later, so the raw report is
//! a complete record of what was examined.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use evcheck_core::{EvcheckError, Report};

use crate::document::{validate_document, ERR_NOT_JSON};
use crate::registry::SchemaRegistry;

/// Validate every file in `event_dir` and assemble the report.
///
/// Files are processed in sorted filename order. A file that cannot be
/// read is reported the same way as one with unparseable content; only
/// enumerating the directory itself can fail this call.
pub fn run_batch(event_dir: &Path, registry: &SchemaRegistry) -> Result<Report, EvcheckError> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(event_dir)? {
        let entry = entry?;
        if entry.path().is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let mut json_errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for path in &paths {
        let Some(identity) = path.file_stem().map(|s| s.to_string_lossy().into_owned())
        else {
            continue;
        };
        let errors = match fs::read_to_string(path) {
            Ok(raw) => validate_document(&raw, registry),
            Err(_) => vec![ERR_NOT_JSON.to_string()],
        };
        if !errors.is_empty() {
            tracing::debug!(
                document = %identity,
                error_count = errors.len(),
                "document failed validation"
            );
        }
        json_errors.insert(identity, errors);
    }

    let schema_errors: BTreeMap<String, String> = registry
        .invalid_entries()
        .map(|(name, reason)| (name.to_string(), format!("Schema invalid: {reason}")))
        .collect();

    let report = Report {
        schema_errors,
        json_errors,
    };

    tracing::info!(
        document_count = paths.len(),
        schema_count = registry.len(),
        failing_documents = report
            .json_errors
            .values()
            .filter(|errors| !errors.is_empty())
            .count(),
        "batch validation complete"
    );

    Ok(report)
}
