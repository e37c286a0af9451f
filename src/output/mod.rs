// src/output/mod.rs

//! Renders the final aggregate of a scan and delivers it to its destination.

use crate::config::{Config, ReportFormat};
use crate::errors::Result;
use crate::pipeline::ScanReport;
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

pub mod html;
pub mod json;
pub mod markdown;
pub mod table;
pub mod writer;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use table::{feature_table, indentation_table, report_table, ReportRow, ReportTable};

/// What a formatter needs besides the records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Scan root, used to build links back to the source files.
    pub scan_root: PathBuf,
    /// Whether the Tasks column is shown.
    pub show_tasks: bool,
    /// Whether the Author column is shown.
    pub show_author: bool,
}

impl From<&Config> for ReportContext {
    fn from(config: &Config) -> Self {
        Self {
            scan_root: config.scan_root.clone(),
            show_tasks: config.analysis.show_tasks,
            show_author: config.analysis.show_author,
        }
    }
}

/// Renders a `ScanReport` into a writer.
pub trait ReportFormatter {
    fn format_report(
        &self,
        report: &ScanReport,
        ctx: &ReportContext,
        writer: &mut dyn Write,
    ) -> Result<()>;
}

/// Returns the formatter for a report format.
pub fn formatter_for(format: ReportFormat) -> Box<dyn ReportFormatter> {
    match format {
        ReportFormat::Html => Box::new(HtmlFormatter),
        ReportFormat::Markdown => Box::new(MarkdownFormatter),
        ReportFormat::Json => Box::new(JsonFormatter),
    }
}

/// Renders the report in the configured format and writes it to the configured destination.
pub fn write_report(report: &ScanReport, config: &Config) -> Result<()> {
    let mut buffer = Vec::new();
    formatter_for(config.output.format).format_report(
        report,
        &ReportContext::from(config),
        &mut buffer,
    )?;
    writer::deliver(&buffer, &config.output.destination)
}

/// Builds a `file://` URL for a path under the scan root.
///
/// Falls back to the plain path when the joined path cannot be expressed as a
/// file URL.
pub fn file_url(scan_root: &Path, relative_path: &str) -> String {
    let mut absolute = scan_root.to_path_buf();
    // Report paths use forward slashes; verbatim Windows roots only split on `\`.
    absolute.extend(relative_path.split('/').filter(|part| !part.is_empty()));
    Url::from_file_path(&absolute)
        .map(String::from)
        .unwrap_or_else(|()| absolute.display().to_string())
}
