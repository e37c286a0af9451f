// src/analysis/indentation.rs

//! Detects inconsistent indentation in a feature file.
//!
//! Per-line diagnostics are emitted while scanning, in line order. The three
//! file-level diagnostics are appended afterwards in a fixed order, and all
//! of them are additive.

use super::lines::split_lf;
use crate::config::IndentStyle;
use crate::constants::{
    SPACES_WITH_TAB_DEFAULT_MESSAGE, TABS_WITH_SPACE_DEFAULT_MESSAGE, TAG_TREE_MIXED_MESSAGE,
};
use crate::core_types::{DiscoveredFile, FileIndentationInfo};

/// Returns the run of leading whitespace of a line.
///
/// Any Unicode whitespace counts, including a `\r` left over from a CRLF
/// ending (a blank Windows line is entirely "leading whitespace").
///
/// # Examples
///
/// ```
/// use featlist::analysis::leading_whitespace;
///
/// assert_eq!(leading_whitespace("\t  Given"), "\t  ");
/// assert_eq!(leading_whitespace("Given"), "");
/// assert_eq!(leading_whitespace("  \r"), "  \r");
/// ```
pub fn leading_whitespace(line: &str) -> &str {
    let content_start = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    &line[..content_start]
}

/// Checks the indentation of a feature file against the configured default.
///
/// # Examples
///
/// ```
/// use featlist::analysis::check_indentation;
/// use featlist::config::IndentStyle;
/// use featlist::core_types::DiscoveredFile;
///
/// let file = DiscoveredFile::default();
/// let info = check_indentation("Feature: A\n\t  Given x", &file, IndentStyle::Unspecified);
///
/// assert_eq!(info.inconsistent_lines, vec!["in line 2 detected spaces and tabs"]);
/// ```
pub fn check_indentation(
    content: &str,
    file: &DiscoveredFile,
    default_indentation: IndentStyle,
) -> FileIndentationInfo {
    let mut inconsistent_lines = Vec::new();
    let mut has_spaces = false;
    let mut has_tabs = false;
    let mut has_tag_tree = false;

    for (index, line) in split_lf(content).enumerate() {
        let indent = leading_whitespace(line);
        let line_has_spaces = indent.contains(' ');
        let line_has_tabs = indent.contains('\t');

        has_spaces |= line_has_spaces;
        has_tabs |= line_has_tabs;
        if !has_tag_tree && line.to_lowercase().contains("@tree") {
            has_tag_tree = true;
        }

        if line_has_spaces && line_has_tabs {
            inconsistent_lines.push(format!("in line {} detected spaces and tabs", index + 1));
        }
    }

    if has_tag_tree && has_spaces && has_tabs {
        inconsistent_lines.push(TAG_TREE_MIXED_MESSAGE.to_string());
    }
    match default_indentation {
        IndentStyle::Tab if has_spaces => {
            inconsistent_lines.push(SPACES_WITH_TAB_DEFAULT_MESSAGE.to_string())
        }
        IndentStyle::Space if has_tabs => {
            inconsistent_lines.push(TABS_WITH_SPACE_DEFAULT_MESSAGE.to_string())
        }
        _ => {}
    }

    FileIndentationInfo {
        file_name: file.file_name.clone(),
        relative_path: file.relative_path.clone(),
        inconsistent_lines,
    }
}
