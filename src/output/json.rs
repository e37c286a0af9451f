// src/output/json.rs

use super::{ReportContext, ReportFormatter};
use crate::errors::{Error, Result};
use crate::pipeline::ScanReport;
use std::io::Write;

/// Writes the raw records as pretty-printed JSON.
///
/// Column visibility does not apply: disabled columns are simply empty strings.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_report(
        &self,
        report: &ScanReport,
        _ctx: &ReportContext,
        writer: &mut dyn Write,
    ) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)
            .map_err(|e| Error::Io(std::io::Error::other(e)))?;
        writeln!(writer)?;
        Ok(())
    }
}
