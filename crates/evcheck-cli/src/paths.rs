//! # Startup Path Checks
//!
//! Verifies the two input directories before any loading starts. The
//! check is enforced: a missing directory aborts the run with a
//! diagnostic naming the offending path, rather than letting the
//! registry loader fail later with a less specific message.

use std::path::Path;

use evcheck_core::EvcheckError;

/// Require both input directories to exist and be directories.
///
/// Returns the first offending path as [`EvcheckError::MissingDirectory`].
pub fn check_directories(schema_dir: &Path, event_dir: &Path) -> Result<(), EvcheckError> {
    for dir in [schema_dir, event_dir] {
        if !dir.is_dir() {
            return Err(EvcheckError::MissingDirectory(dir.to_path_buf()));
        }
    }
    Ok(())
}
