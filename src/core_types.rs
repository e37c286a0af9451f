//! Defines core data structures used throughout the scan pipeline.
//!
//! `DiscoveredFile` is what the walker yields; `FileFeatureInfo` and
//! `FileIndentationInfo` are the per-file records the two analyzers produce
//! and the session aggregates.

use serde::Serialize;
use std::path::PathBuf;

/// A feature file found by the walker. Its content has not been read yet.
///
/// # Examples
///
/// ```
/// use featlist::core_types::DiscoveredFile;
/// use std::path::PathBuf;
///
/// let file = DiscoveredFile {
///     absolute_path: PathBuf::from("/project/features/login.feature"),
///     relative_path: "features/login.feature".to_string(),
///     file_name: "login.feature".to_string(),
/// };
///
/// assert_eq!(file.file_name, "login.feature");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Absolute path on the filesystem, used for reading.
    pub absolute_path: PathBuf,
    /// Path relative to the scan root, used for display and for the file-open action.
    pub relative_path: String,
    /// Base name of the file.
    pub file_name: String,
}

/// Metadata extracted from one feature file.
///
/// Every field is always present: a file without any recognised marker yields
/// empty strings, `export_scenarios == false` and an empty scenario list.
///
/// # Examples
///
/// ```
/// use featlist::core_types::FileFeatureInfo;
///
/// let info = FileFeatureInfo {
///     file_name: "a.feature".to_string(),
///     relative_path: "a.feature".to_string(),
///     functionality: "Login".to_string(),
///     scenarios: vec!["Valid login".to_string()],
///     ..Default::default()
/// };
///
/// assert!(!info.export_scenarios);
/// assert!(info.author.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileFeatureInfo {
    /// Base name of the file.
    pub file_name: String,
    /// Path relative to the scan root.
    pub relative_path: String,
    /// Text following the last `Feature:`/`Функционал:` marker.
    pub functionality: String,
    /// Whether any line carries an `@exportScenarios` tag.
    pub export_scenarios: bool,
    /// Text following the last `@author=` tag.
    pub author: String,
    /// Text following the last `@tasks=` tag.
    pub tasks: String,
    /// One entry per `Scenario:`/`Сценарий:` line, in file order.
    pub scenarios: Vec<String>,
}

/// Indentation diagnostics for one file.
///
/// A clean file still produces a record, with an empty `inconsistent_lines`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileIndentationInfo {
    /// Base name of the file.
    pub file_name: String,
    /// Path relative to the scan root.
    pub relative_path: String,
    /// Diagnostic messages in detection order.
    pub inconsistent_lines: Vec<String>,
}
