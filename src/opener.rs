// src/opener.rs

//! Opens a file the user picked in the report.
//!
//! The report only knows relative paths; the opener resolves them against the
//! scan root. There is no line or column targeting.

use crate::errors::{open_file_error, Error, Result};
use std::io;
use std::path::{Component, Path, PathBuf};

/// The capability behind the report's file-open action.
pub trait FileOpener: Send + Sync {
    /// Opens the file at `relative_path` (relative to the scan root).
    fn open(&self, relative_path: &str) -> Result<()>;
}

/// Opens files with the system's default application for their type.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    scan_root: PathBuf,
}

impl SystemOpener {
    pub fn new(scan_root: impl Into<PathBuf>) -> Self {
        Self {
            scan_root: scan_root.into(),
        }
    }
}

impl FileOpener for SystemOpener {
    fn open(&self, relative_path: &str) -> Result<()> {
        let path = resolve_report_path(&self.scan_root, relative_path)?;
        log::info!("Opening {}", path.display());
        open::that(&path).map_err(|e| open_file_error(e, &path))
    }
}

/// Resolves a relative path from the report against the scan root.
///
/// Only plain relative paths are accepted: absolute paths and `..` components
/// are rejected so a request cannot point outside the scanned tree.
///
/// # Examples
///
/// ```
/// use featlist::opener::resolve_report_path;
/// use std::path::Path;
///
/// let path = resolve_report_path(Path::new("/project"), "auth/login.feature").unwrap();
/// assert_eq!(path, Path::new("/project/auth/login.feature"));
/// assert!(resolve_report_path(Path::new("/project"), "../secret.feature").is_err());
/// ```
pub fn resolve_report_path(scan_root: &Path, relative_path: &str) -> Result<PathBuf> {
    let relative = Path::new(relative_path);
    let is_plain = !relative_path.is_empty()
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !is_plain {
        return Err(Error::OpenFile {
            path: relative_path.to_string(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "path must be relative to the scan root",
            ),
        });
    }
    Ok(scan_root.join(relative))
}
