// src/output/table.rs

//! Flattens the aggregate into report rows.
//!
//! The feature list has one row per (file, scenario) pair, so a file without
//! scenarios contributes no row. The indentation report has one row per
//! (file, diagnostic) pair, so a clean file contributes no row either.

use super::ReportContext;
use crate::constants::{EXPORT_MARKER, FEATURE_REPORT_TITLE, INDENTATION_REPORT_TITLE};
use crate::core_types::{FileFeatureInfo, FileIndentationInfo};
use crate::pipeline::ScanReport;

/// A rendered-agnostic report table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub title: &'static str,
    /// Column headers, starting with the "File Name" link column.
    pub headers: Vec<&'static str>,
    pub rows: Vec<ReportRow>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Text of the first (hyperlink) column.
    pub file_name: String,
    /// Target of the hyperlink, relative to the scan root.
    pub relative_path: String,
    /// The remaining columns, matching `headers[1..]`.
    pub cells: Vec<String>,
}

/// Builds the feature-list table. Optional columns follow the context.
pub fn feature_table(records: &[FileFeatureInfo], ctx: &ReportContext) -> ReportTable {
    let mut headers = vec!["File Name", "Path", "Functionality", "Export", "Scenario"];
    if ctx.show_tasks {
        headers.push("Tasks");
    }
    if ctx.show_author {
        headers.push("Author");
    }

    let rows = records
        .iter()
        .flat_map(|info| {
            info.scenarios.iter().map(move |scenario| {
                let mut cells = vec![
                    info.relative_path.clone(),
                    info.functionality.clone(),
                    export_marker(info.export_scenarios).to_string(),
                    scenario.clone(),
                ];
                if ctx.show_tasks {
                    cells.push(info.tasks.clone());
                }
                if ctx.show_author {
                    cells.push(info.author.clone());
                }
                ReportRow {
                    file_name: info.file_name.clone(),
                    relative_path: info.relative_path.clone(),
                    cells,
                }
            })
        })
        .collect();

    ReportTable {
        title: FEATURE_REPORT_TITLE,
        headers,
        rows,
    }
}

/// Builds the indentation table.
pub fn indentation_table(records: &[FileIndentationInfo]) -> ReportTable {
    let rows = records
        .iter()
        .flat_map(|info| {
            info.inconsistent_lines.iter().map(move |message| ReportRow {
                file_name: info.file_name.clone(),
                relative_path: info.relative_path.clone(),
                cells: vec![info.relative_path.clone(), message.clone()],
            })
        })
        .collect();

    ReportTable {
        title: INDENTATION_REPORT_TITLE,
        headers: vec!["File Name", "Path", "Line"],
        rows,
    }
}

/// Builds the table for whichever pipeline produced the report.
pub fn report_table(report: &ScanReport, ctx: &ReportContext) -> ReportTable {
    match report {
        ScanReport::Features(records) => feature_table(records, ctx),
        ScanReport::Indentation(records) => indentation_table(records),
    }
}

fn export_marker(set: bool) -> &'static str {
    if set {
        EXPORT_MARKER
    } else {
        ""
    }
}
