//! # Schema Registry
//!
//! Loads every file in the schema directory and compiles each into a
//! reusable Draft 7 validator, keyed by filename stem. A file that fails
//! at any step — read, JSON parse, validator build — produces an
//! [`SchemaEntry::Invalid`] entry carrying the reason; loading always
//! continues for the remaining files.
//!
//! Directory entries are sorted by name before processing. The file
//! system gives no enumeration-order guarantee, and with duplicate stems
//! (e.g. `user.json` and `user.schema`) the later file wins, so sorting
//! keeps that outcome stable across runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use jsonschema::Validator;
use serde_json::Value;

use evcheck_core::EvcheckError;

/// One schema directory entry: either a compiled validator or the reason
/// it could not be compiled. Consumers branch on the variant; there is no
/// probing a validator to discover it is broken.
pub enum SchemaEntry {
    /// A compiled, reusable Draft 7 validator.
    Compiled(Validator),
    /// The schema file could not be loaded or compiled.
    Invalid {
        /// Human-readable load/parse/compile failure.
        reason: String,
    },
}

/// Mapping from schema name (filename stem) to [`SchemaEntry`].
///
/// Built once at startup, read-only afterwards. Every file in the schema
/// directory produces exactly one entry; nothing is removed after the
/// load pass.
pub struct SchemaRegistry {
    entries: BTreeMap<String, SchemaEntry>,
}

impl SchemaRegistry {
    /// Load and compile every file in `schema_dir`.
    ///
    /// Per-file failures are isolated as [`SchemaEntry::Invalid`]; only
    /// enumerating the directory itself can fail this call.
    pub fn load(schema_dir: &Path) -> Result<Self, EvcheckError> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(schema_dir)? {
            let entry = entry?;
            if entry.path().is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();

        let mut entries = BTreeMap::new();
        for path in &paths {
            let Some(name) = path.file_stem().map(|s| s.to_string_lossy().into_owned())
            else {
                continue;
            };
            let entry = compile_schema(path);
            if let SchemaEntry::Invalid { reason } = &entry {
                tracing::warn!(schema = %name, reason = %reason, "schema failed to load");
            }
            entries.insert(name, entry);
        }

        tracing::info!(schema_count = entries.len(), "loaded schema registry");
        Ok(Self { entries })
    }

    /// Look up a schema entry by name.
    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.get(name)
    }

    /// Number of loaded entries, valid and invalid alike.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the schema directory contained no files.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All schema names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The invalid entries as `(name, reason)` pairs, in sorted order.
    pub fn invalid_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(name, entry)| match entry {
            SchemaEntry::Invalid { reason } => Some((name.as_str(), reason.as_str())),
            SchemaEntry::Compiled(_) => None,
        })
    }
}

/// Read, parse, and compile one schema file.
fn compile_schema(path: &Path) -> SchemaEntry {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            return SchemaEntry::Invalid {
                reason: format!("cannot read file: {e}"),
            }
        }
    };

    let schema: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            return SchemaEntry::Invalid {
                reason: format!("invalid JSON: {e}"),
            }
        }
    };

    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft7);

    match opts.build(&schema) {
        Ok(validator) => SchemaEntry::Compiled(validator),
        Err(e) => SchemaEntry::Invalid {
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_schema(dir: &Path, filename: &str, content: &str) {
        fs::write(dir.join(filename), content).unwrap();
    }

    #[test]
    fn loads_valid_schemas_keyed_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(
            dir.path(),
            "user.json",
            r#"{"type":"object","required":["name"]}"#,
        );
        write_schema(dir.path(), "order.json", r#"{"type":"array"}"#);

        let registry = SchemaRegistry::load(dir.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(matches!(registry.get("user"), Some(SchemaEntry::Compiled(_))));
        assert!(matches!(registry.get("order"), Some(SchemaEntry::Compiled(_))));
        assert!(registry.get("user.json").is_none(), "keys are stems, not filenames");
    }

    #[test]
    fn invalid_json_becomes_invalid_entry_without_aborting() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(dir.path(), "bad.json", "not json at all {");
        write_schema(dir.path(), "good.json", r#"{"type":"object"}"#);

        let registry = SchemaRegistry::load(dir.path()).unwrap();
        assert_eq!(registry.len(), 2);
        match registry.get("bad") {
            Some(SchemaEntry::Invalid { reason }) => {
                assert!(reason.contains("invalid JSON"), "unexpected reason: {reason}")
            }
            _ => panic!("expected invalid entry for bad.json"),
        }
        assert!(matches!(registry.get("good"), Some(SchemaEntry::Compiled(_))));
    }

    #[test]
    fn malformed_schema_document_becomes_invalid_entry() {
        let dir = tempfile::tempdir().unwrap();
        // Parses as JSON but is not a well-formed schema: "type" must be
        // a string or array of strings.
        write_schema(dir.path(), "weird.json", r#"{"type": 5}"#);

        let registry = SchemaRegistry::load(dir.path()).unwrap();
        match registry.get("weird") {
            Some(SchemaEntry::Invalid { reason }) => assert!(!reason.is_empty()),
            _ => panic!("expected invalid entry for weird.json"),
        }
    }

    #[test]
    fn compiled_validator_is_reusable() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(
            dir.path(),
            "user.json",
            r#"{"type":"object","required":["name"],"properties":{"name":{"type":"string"}}}"#,
        );

        let registry = SchemaRegistry::load(dir.path()).unwrap();
        let Some(SchemaEntry::Compiled(validator)) = registry.get("user") else {
            panic!("expected compiled schema");
        };
        assert!(validator.is_valid(&json!({"name": "Alice"})));
        assert!(!validator.is_valid(&json!({})));
        assert!(!validator.is_valid(&json!({"name": 7})));
    }

    #[test]
    fn empty_directory_loads_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SchemaRegistry::load(dir.path()).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        assert!(SchemaRegistry::load(&missing).is_err());
    }

    #[test]
    fn invalid_entries_lists_only_broken_schemas() {
        let dir = tempfile::tempdir().unwrap();
        write_schema(dir.path(), "bad.json", "{");
        write_schema(dir.path(), "good.json", r#"{"type":"object"}"#);

        let registry = SchemaRegistry::load(dir.path()).unwrap();
        let invalid: Vec<(&str, &str)> = registry.invalid_entries().collect();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].0, "bad");
    }
}
