// src/analysis/lines.rs

//! The two line-splitting conventions used by the analyzers.
//!
//! The feature parser accepts both `\n` and `\r\n` endings. The indentation
//! checker splits on `\n` only and keeps any `\r` in the line content, so a
//! Windows-style file carries a trailing `\r` on every line but the last.

/// Splits on `\n`, dropping a `\r` that immediately precedes it.
///
/// A trailing newline produces a final empty line, as does splitting on
/// `\r?\n` with a regex.
pub fn split_normalized(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Splits strictly on `\n`; carriage returns stay in the line content.
pub fn split_lf(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_normalized_handles_both_endings() {
        let lines: Vec<&str> = split_normalized("a\r\nb\nc").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_normalized_keeps_lone_carriage_return() {
        // Only "\r\n" is a line ending; a bare "\r" is content.
        let lines: Vec<&str> = split_normalized("a\rb\n").collect();
        assert_eq!(lines, vec!["a\rb", ""]);
    }

    #[test]
    fn test_split_lf_keeps_carriage_returns() {
        let lines: Vec<&str> = split_lf("a\r\n\tb\r\nc").collect();
        assert_eq!(lines, vec!["a\r", "\tb\r", "c"]);
    }

    #[test]
    fn test_empty_content_yields_single_empty_line() {
        assert_eq!(split_normalized("").collect::<Vec<_>>(), vec![""]);
        assert_eq!(split_lf("").collect::<Vec<_>>(), vec![""]);
    }
}
