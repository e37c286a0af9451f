//! `featlist` is a library and command-line tool that scans a directory of
//! Gherkin `.feature` files and renders a searchable report.
//!
//! Two pipelines share the same walk:
//! 1.  **Feature list**: every file is parsed for its functionality name,
//!     the `@exportScenarios` flag, `@author=` and `@tasks=` tags, and its
//!     scenario titles. English and Russian keywords are recognized.
//! 2.  **Indentation check**: every file is checked for lines mixing spaces
//!     and tabs, for `@tree` files that mix both, and for deviations from a
//!     configured indentation style.
//!
//! Each analyzed file appends one record to a [`session::ScanSession`], which
//! hands the full aggregate to a [`session::ReportSink`] after every append.
//! The CLI writes the final aggregate once; the `serve` command pushes every
//! intermediate render to a live page.
//!
//! # Example: Library Usage
//!
//! ```
//! use featlist::pipeline::{run_pipeline, Pipeline, ScanReport};
//! use featlist::session::NoOpSink;
//! use featlist::{CancellationToken, ConfigBuilder};
//! use std::fs;
//! use std::sync::Arc;
//!
//! # fn main() -> featlist::errors::Result<()> {
//! let temp = tempfile::tempdir()?;
//! fs::create_dir(temp.path().join("auth"))?;
//! fs::write(
//!     temp.path().join("auth/login.feature"),
//!     "@author=Ivan\nFeature: Login\n\n  Scenario: Valid login\n",
//! )?;
//!
//! let config = ConfigBuilder::new()
//!     .scan_root(temp.path().to_str().unwrap())
//!     .build()?;
//! let token = CancellationToken::new();
//!
//! let report = run_pipeline(Pipeline::FeatureList, &config, &token, Arc::new(NoOpSink), None)?;
//! let ScanReport::Features(records) = report else { unreachable!() };
//! assert_eq!(records[0].relative_path, "auth/login.feature");
//! assert_eq!(records[0].author, "Ivan");
//! assert_eq!(records[0].scenarios, vec!["Valid login"]);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod opener;
pub mod output;
pub mod pipeline;
pub mod prelude;
pub mod progress;
pub mod session;
pub mod signal;

#[cfg(feature = "web")]
pub mod web;

pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, OutputDestination};
pub use core_types::{DiscoveredFile, FileFeatureInfo, FileIndentationInfo};
pub use pipeline::{run_pipeline, scan_features, scan_indentation, Pipeline, ScanReport};

use crate::errors::{Error, Result};
use crate::progress::ProgressReporter;
use crate::session::NoOpSink;
use std::sync::Arc;

/// Runs one pipeline to completion and writes the final report.
///
/// This mirrors a CLI invocation: intermediate renders are discarded and the
/// sorted aggregate is formatted and delivered once, as the `Config` says.
///
/// # Returns
/// The final aggregate. Returns `Err(Error::NoFilesFound)` if the scan root
/// contains no feature files; nothing is written in that case.
pub fn run(
    config: &Config,
    pipeline: Pipeline,
    token: &CancellationToken,
    progress: Option<&dyn ProgressReporter>,
) -> Result<ScanReport> {
    let report = run_pipeline(pipeline, config, token, Arc::new(NoOpSink), progress)?;
    if report.is_empty() {
        return Err(Error::NoFilesFound);
    }
    output::write_report(&report, config)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportFormat;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_markdown_report() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let output_path = temp_dir.path().join("out").with_extension("md");
        fs::write(
            temp_dir.path().join("b.feature"),
            "Feature: B\nScenario: Second",
        )?;
        fs::write(
            temp_dir.path().join("a.feature"),
            "Feature: A\n@exportScenarios\nScenario: First",
        )?;

        let config = ConfigBuilder::new()
            .scan_root(temp_dir.path().to_str().unwrap())
            .format(ReportFormat::Markdown)
            .show_tasks(false)
            .show_author(false)
            .output_file(output_path.to_str().unwrap())
            .build()?;

        let report = run(&config, Pipeline::FeatureList, &CancellationToken::new(), None)?;
        assert_eq!(report.file_count(), 2);

        let content = fs::read_to_string(&output_path)?;
        let rows: Vec<&str> = content.lines().skip(4).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("| [a.feature]"));
        assert!(rows[0].ends_with("| a.feature | A | V | First |"));
        assert!(rows[1].ends_with("| b.feature | B |  | Second |"));
        Ok(())
    }

    #[test]
    fn test_run_without_feature_files() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("notes.txt"), "Feature: not a feature file")?;
        let output_path = temp_dir.path().join("report.html");

        let config = ConfigBuilder::new()
            .scan_root(temp_dir.path().to_str().unwrap())
            .output_file(output_path.to_str().unwrap())
            .build()?;

        let result = run(&config, Pipeline::IndentationCheck, &CancellationToken::new(), None);
        assert!(matches!(result, Err(Error::NoFilesFound)));
        assert!(!output_path.exists());
        Ok(())
    }

    #[test]
    fn test_run_respects_cancellation() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("a.feature"), "Feature: A")?;
        let config = ConfigBuilder::new()
            .scan_root(temp_dir.path().to_str().unwrap())
            .build()?;

        let token = CancellationToken::new();
        token.cancel();

        let result = run(&config, Pipeline::FeatureList, &token, None);
        assert!(matches!(result, Err(Error::Interrupted)));
        Ok(())
    }
}
