//! # Validation Report
//!
//! The result structure assembled by the batch runner, plus rendering and
//! persistence. A report has two sections: `schema_errors` (schema name →
//! load/compile failure message) and `json_errors` (document identity →
//! ordered error messages). Both are `BTreeMap`s so iteration — and thus
//! the rendered report — is sorted and reproducible regardless of
//! directory enumeration order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EvcheckError;
use crate::prune::prune;

/// Aggregated result of one validation run.
///
/// Built once per run and never mutated after the batch runner finishes.
/// Serde-serializable so the generic pruner can operate on its JSON form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Schema name → stringified load failure, for invalid schemas only.
    #[serde(default)]
    pub schema_errors: BTreeMap<String, String>,

    /// Document identity → ordered error messages. Documents with no
    /// errors carry empty lists until pruning removes them.
    #[serde(default)]
    pub json_errors: BTreeMap<String, Vec<String>>,
}

impl Report {
    /// True when both sections are empty.
    pub fn is_empty(&self) -> bool {
        self.schema_errors.is_empty() && self.json_errors.is_empty()
    }

    /// Apply [`prune`] to the report's JSON form and rebuild the struct.
    ///
    /// Clean documents (empty error lists) and blank messages disappear;
    /// a section pruned away entirely falls back to an empty map.
    pub fn pruned(self) -> Report {
        let Ok(tree) = serde_json::to_value(&self) else {
            return self;
        };
        serde_json::from_value(prune(tree)).unwrap_or_default()
    }

    /// Render the report as ordered text lines.
    ///
    /// A header line with the run timestamp, then a schema-errors section
    /// and a document-errors section, each emitted only when non-empty. A
    /// fully clean report renders as the header line alone.
    pub fn render(&self, generated_at: DateTime<Utc>) -> Vec<String> {
        let mut lines = vec![format!(
            "Validation report generated at {}",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )];

        if !self.schema_errors.is_empty() {
            lines.push(String::new());
            lines.push("Schema errors:".to_string());
            for (name, message) in &self.schema_errors {
                lines.push(format!("  schema {name}:"));
                lines.push(format!("    {message}"));
            }
        }

        if !self.json_errors.is_empty() {
            lines.push(String::new());
            lines.push("JSON document errors:".to_string());
            for (identity, errors) in &self.json_errors {
                lines.push(format!("  file {identity}:"));
                for error in errors {
                    lines.push(format!("    {error}"));
                }
            }
        }

        lines
    }
}

/// Persist rendered report lines to `path` as UTF-8, overwriting any
/// previous report. This is the one failure surface that aborts the run:
/// once the report cannot be written there is no recovery path.
pub fn write_report(path: &Path, lines: &[String]) -> Result<(), EvcheckError> {
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}
