//! Defines the core `Config` struct and related types for application configuration.
//!
//! Configuration is read once per trigger: the CLI (or the web server) builds a
//! `Config` through `ConfigBuilder`, and the pipeline only ever sees the
//! validated result.

use crate::analysis::ParseOptions;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod builder_logic;
mod parsing;
mod path_resolve;

/// The indentation a project expects its feature files to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// No expectation; only mixed runs and the tag-tree check are reported.
    #[default]
    Unspecified,
    /// Tabs expected; any space indentation is reported.
    Tab,
    /// Spaces expected; any tab indentation is reported.
    Space,
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndentStyle::Unspecified => "unspecified",
            IndentStyle::Tab => "tab",
            IndentStyle::Space => "space",
        };
        f.write_str(name)
    }
}

/// The format the report is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// A standalone HTML page with a search box.
    #[default]
    Html,
    /// A Markdown table.
    Markdown,
    /// The raw records as pretty-printed JSON.
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Html => "html",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Configuration options related to walking the scan root.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Compiled glob patterns (relative to the scan root) whose matches are pruned from the walk.
    pub ignore_patterns: Option<Vec<Pattern>>,
}

/// Configuration options for the analyzers and the optional report columns.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisConfig {
    /// Indentation the checker compares files against.
    pub default_indentation: IndentStyle,
    /// Whether `@tasks=` values are collected and shown.
    pub show_tasks: bool,
    /// Whether `@author=` values are collected and shown.
    pub show_author: bool,
}

impl AnalysisConfig {
    /// The parser options matching the visible columns.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            collect_author: self.show_author,
            collect_tasks: self.show_tasks,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_indentation: IndentStyle::Unspecified,
            show_tasks: true,
            show_author: true,
        }
    }
}

/// Configuration options related to the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Report format.
    pub format: ReportFormat,
    /// Where the final report is written.
    pub destination: OutputDestination,
}

/// Represents the destination for the rendered report.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
    #[cfg(feature = "clipboard")]
    /// Copy the report to the system clipboard (requires the `clipboard` feature).
    Clipboard,
}

/// The validated configuration of one scan.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute, canonicalized directory to scan. Relative paths in the report are relative to it.
    pub scan_root: PathBuf,
    /// Configuration for the walker.
    pub discovery: DiscoveryConfig,
    /// Configuration for the analyzers.
    pub analysis: AnalysisConfig,
    /// Configuration for the report.
    pub output: OutputConfig,
}

impl Config {
    /// Creates a default `Config` rooted at `scan_root`, for tests and doc tests.
    ///
    /// The path is used as-is (no canonicalization or existence check).
    #[doc(hidden)]
    pub fn new_for_test(scan_root: impl Into<PathBuf>) -> Self {
        Self {
            scan_root: scan_root.into(),
            discovery: DiscoveryConfig::default(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Html,
                destination: OutputDestination::Stdout,
            },
        }
    }
}
