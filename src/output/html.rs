// src/output/html.rs

//! HTML rendering: a standalone page, or just the table for the live view.
//!
//! Every cell is escaped. The first column links to the source file; the
//! filter script matches the search text case-insensitively against every
//! cell of a row and never hides the header row.

use super::{file_url, report_table, ReportContext, ReportFormatter, ReportTable};
use crate::constants::SEARCH_PLACEHOLDER;
use crate::errors::Result;
use crate::pipeline::ScanReport;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;
use std::io::Write;

/// Id of the search box.
pub const SEARCH_INPUT_ID: &str = "searchInput";
/// Id of the report table.
pub const TABLE_ID: &str = "reportTable";

/// Client-side row filter. Listens on the document so it keeps working when
/// the table is replaced.
pub const FILTER_SCRIPT: &str = r#"function applyFilter() {
  var input = document.getElementById('searchInput');
  var table = document.getElementById('reportTable');
  if (!input || !table) { return; }
  var filter = input.value.toLowerCase();
  var rows = table.getElementsByTagName('tr');
  for (var i = 1; i < rows.length; i++) {
    var cells = rows[i].getElementsByTagName('td');
    var match = false;
    for (var j = 0; j < cells.length; j++) {
      var text = cells[j].textContent || cells[j].innerText || '';
      if (text.toLowerCase().indexOf(filter) > -1) { match = true; break; }
    }
    rows[i].style.display = match ? '' : 'none';
  }
}
document.addEventListener('keyup', function (event) {
  if (event.target && event.target.id === 'searchInput') { applyFilter(); }
});
"#;

const PAGE_STYLE: &str = "body { font-family: sans-serif; margin: 1em; }
#searchInput { width: 100%; padding: 6px; margin-bottom: 12px; box-sizing: border-box; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 4px 8px; text-align: left; }
th { background-color: #f2f2f2; }
";

/// Renders a standalone HTML page.
pub struct HtmlFormatter;

impl ReportFormatter for HtmlFormatter {
    fn format_report(
        &self,
        report: &ScanReport,
        ctx: &ReportContext,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let table = report_table(report, ctx);
        writer.write_all(render_page(&table, ctx).as_bytes())?;
        Ok(())
    }
}

/// Renders just the `<table>` element.
pub fn render_table(table: &ReportTable, ctx: &ReportContext) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<table id=\"{}\">", TABLE_ID);
    html.push_str("<tr>");
    for header in &table.headers {
        let _ = write!(html, "<th>{}</th>", encode_text(header));
    }
    html.push_str("</tr>\n");

    for row in &table.rows {
        html.push_str("<tr>");
        let _ = write!(
            html,
            "<td><a class=\"open-file\" href=\"{}\" data-path=\"{}\">{}</a></td>",
            encode_double_quoted_attribute(&file_url(&ctx.scan_root, &row.relative_path)),
            encode_double_quoted_attribute(&row.relative_path),
            encode_text(&row.file_name)
        );
        for cell in &row.cells {
            let _ = write!(html, "<td>{}</td>", encode_text(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

/// Renders a complete page: title, search box, table and the filter script.
pub fn render_page(table: &ReportTable, ctx: &ReportContext) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", encode_text(table.title));
    let _ = writeln!(html, "<style>\n{}</style>", PAGE_STYLE);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h2>{}</h2>", encode_text(table.title));
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"{}\" placeholder=\"{}\">",
        SEARCH_INPUT_ID,
        encode_double_quoted_attribute(SEARCH_PLACEHOLDER)
    );
    html.push_str(&render_table(table, ctx));
    let _ = writeln!(html, "<script>\n{}</script>", FILTER_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}
