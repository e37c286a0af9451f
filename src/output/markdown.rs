// src/output/markdown.rs

use super::{file_url, report_table, ReportContext, ReportFormatter};
use crate::errors::Result;
use crate::pipeline::ScanReport;
use std::io::Write;

/// Renders the report as a Markdown table under a level-two heading.
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format_report(
        &self,
        report: &ScanReport,
        ctx: &ReportContext,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let table = report_table(report, ctx);
        writeln!(writer, "## {}", table.title)?;
        writeln!(writer)?;
        writeln!(writer, "| {} |", table.headers.join(" | "))?;
        writeln!(
            writer,
            "|{}",
            table.headers.iter().map(|_| "---|").collect::<String>()
        )?;
        for row in &table.rows {
            write!(
                writer,
                "| [{}](<{}>) |",
                escape_cell(&row.file_name),
                file_url(&ctx.scan_root, &row.relative_path)
            )?;
            for cell in &row.cells {
                write!(writer, " {} |", escape_cell(cell))?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Keeps a value inside its table cell.
fn escape_cell(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::FileFeatureInfo;

    #[test]
    fn test_markdown_table() {
        let report = ScanReport::Features(vec![FileFeatureInfo {
            file_name: "a.feature".to_string(),
            relative_path: "a.feature".to_string(),
            functionality: "Login | Logout".to_string(),
            export_scenarios: false,
            scenarios: vec!["Valid login".to_string()],
            ..Default::default()
        }]);
        let ctx = ReportContext {
            scan_root: "/project".into(),
            show_tasks: false,
            show_author: false,
        };
        let mut out = Vec::new();
        MarkdownFormatter.format_report(&report, &ctx, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "## Features List");
        assert_eq!(
            lines[2],
            "| File Name | Path | Functionality | Export | Scenario |"
        );
        assert_eq!(lines[3], "|---|---|---|---|---|");
        assert!(lines[4].contains("Login \\| Logout"));
        assert!(lines[4].ends_with("|  | Valid login |"));
        assert_eq!(lines.len(), 5);
    }
}
