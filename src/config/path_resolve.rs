// src/config/path_resolve.rs

use crate::errors::{ConfigError, Error, Result};
use std::path::PathBuf;

/// Resolves the scan root string to an absolute, canonicalized directory.
///
/// An empty string means no root was configured.
pub(super) fn resolve_scan_root(scan_root: &str) -> Result<PathBuf> {
    if scan_root.trim().is_empty() {
        return Err(Error::NoScanRoot);
    }
    let path = PathBuf::from(scan_root);
    let resolved = path.canonicalize().map_err(|e| ConfigError::ScanRoot {
        path: scan_root.to_string(),
        reason: e.to_string(),
    })?;
    if !resolved.is_dir() {
        return Err(ConfigError::ScanRoot {
            path: scan_root.to_string(),
            reason: "not a directory".to_string(),
        }
        .into());
    }
    Ok(resolved)
}
