// src/config/builder.rs

use super::builder_logic::{determine_output_destination, validate_builder_options};
use super::parsing::compile_ignore_patterns;
use super::path_resolve::resolve_scan_root;
use super::{
    AnalysisConfig, Config, DiscoveryConfig, IndentStyle, OutputConfig, ReportFormat,
};
use crate::cli::{OutputArgs, ScanArgs};
use crate::errors::Result;

/// A builder for creating a `Config` programmatically.
///
/// # Examples
///
/// ```
/// use featlist::config::{ConfigBuilder, IndentStyle};
/// # fn main() -> featlist::errors::Result<()> {
/// let temp = tempfile::tempdir()?;
/// let config = ConfigBuilder::new()
///     .scan_root(temp.path().to_str().unwrap())
///     .default_indentation(IndentStyle::Space)
///     .show_tasks(false)
///     .build()?;
///
/// assert_eq!(config.analysis.default_indentation, IndentStyle::Space);
/// assert!(!config.analysis.show_tasks);
/// assert!(config.analysis.show_author);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) scan_root: Option<String>,
    pub(super) default_indentation: Option<IndentStyle>,
    pub(super) show_tasks: Option<bool>,
    pub(super) show_author: Option<bool>,
    pub(super) ignore_patterns: Option<Vec<String>>,
    pub(super) format: Option<ReportFormat>,
    pub(super) output_file: Option<String>,
    #[cfg(feature = "clipboard")]
    pub(super) paste: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from the parsed command-line arguments.
    ///
    /// `output` is `None` for the `serve` subcommand, which has no report destination.
    pub fn from_cli(scan: ScanArgs, output: Option<OutputArgs>) -> Self {
        let mut builder = Self {
            scan_root: scan.root,
            default_indentation: Some(scan.indentation),
            show_tasks: Some(!scan.no_tasks),
            show_author: Some(!scan.no_author),
            ignore_patterns: scan.ignore_patterns,
            ..Default::default()
        };
        if let Some(output) = output {
            builder.format = Some(output.format);
            builder.output_file = output.output_file;
            #[cfg(feature = "clipboard")]
            {
                builder.paste = Some(output.paste);
            }
        }
        builder
    }

    /// Sets the directory to scan.
    pub fn scan_root(mut self, path: impl Into<String>) -> Self {
        self.scan_root = Some(path.into());
        self
    }

    /// Sets the indentation files are expected to use.
    pub fn default_indentation(mut self, style: IndentStyle) -> Self {
        self.default_indentation = Some(style);
        self
    }

    /// Collects and shows `@tasks=` values.
    pub fn show_tasks(mut self, show: bool) -> Self {
        self.show_tasks = Some(show);
        self
    }

    /// Collects and shows `@author=` values.
    pub fn show_author(mut self, show: bool) -> Self {
        self.show_author = Some(show);
        self
    }

    /// Prunes entries matching these globs (relative to the scan root) from the walk.
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = Some(patterns);
        self
    }

    /// Sets the report format.
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Writes the report to a file instead of stdout.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Copies the report to the clipboard instead of writing it to stdout.
    #[cfg(feature = "clipboard")]
    pub fn paste(mut self, paste: bool) -> Self {
        self.paste = Some(paste);
        self
    }

    /// Validates the settings and builds the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::NoScanRoot` if no root was set, and `Error::Config` if the
    /// root does not resolve to a directory, an ignore glob is invalid, or
    /// options conflict.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let scan_root = resolve_scan_root(self.scan_root.as_deref().unwrap_or(""))?;
        log::debug!("Resolved scan root: {}", scan_root.display());

        let ignore_patterns = compile_ignore_patterns(self.ignore_patterns)?;

        let destination = determine_output_destination(
            self.output_file,
            #[cfg(feature = "clipboard")]
            self.paste,
        );

        Ok(Config {
            scan_root,
            discovery: DiscoveryConfig { ignore_patterns },
            analysis: AnalysisConfig {
                default_indentation: self.default_indentation.unwrap_or_default(),
                show_tasks: self.show_tasks.unwrap_or(true),
                show_author: self.show_author.unwrap_or(true),
            },
            output: OutputConfig {
                format: self.format.unwrap_or_default(),
                destination,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputDestination;
    use crate::errors::{ConfigError, Error};
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_build_defaults() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let config = ConfigBuilder::new()
            .scan_root(temp.path().to_str().unwrap())
            .build()?;

        assert_eq!(config.scan_root, temp.path().canonicalize()?);
        assert_eq!(config.analysis.default_indentation, IndentStyle::Unspecified);
        assert!(config.analysis.show_tasks);
        assert!(config.analysis.show_author);
        assert!(config.discovery.ignore_patterns.is_none());
        assert_eq!(config.output.format, ReportFormat::Html);
        assert_eq!(config.output.destination, OutputDestination::Stdout);
        Ok(())
    }

    #[test]
    fn test_build_without_root_is_no_scan_root() {
        let result = ConfigBuilder::new().build();
        assert!(matches!(result, Err(Error::NoScanRoot)));
    }

    #[test]
    fn test_build_output_file_destination() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let config = ConfigBuilder::new()
            .scan_root(temp.path().to_str().unwrap())
            .format(ReportFormat::Markdown)
            .output_file("report.md")
            .build()?;
        assert_eq!(
            config.output.destination,
            OutputDestination::File(PathBuf::from("report.md"))
        );
        assert_eq!(config.output.format, ReportFormat::Markdown);
        Ok(())
    }

    #[test]
    fn test_columns_map_to_parse_options() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let config = ConfigBuilder::new()
            .scan_root(temp.path().to_str().unwrap())
            .show_author(false)
            .build()?;
        let options = config.analysis.parse_options();
        assert!(!options.collect_author);
        assert!(options.collect_tasks);
        Ok(())
    }

    #[test]
    #[cfg(feature = "clipboard")]
    fn test_output_and_paste_conflict() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = ConfigBuilder::new()
            .scan_root(temp.path().to_str().unwrap())
            .output_file("report.html")
            .paste(true)
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::Conflict { option1, option2 }))
                if option1 == "--output" && option2 == "--paste"
        ));
        Ok(())
    }
}
