// src/analysis/features.rs

//! Extracts feature metadata from the text of a feature file.
//!
//! Every trimmed line is run through an ordered table of marker rules. The
//! first rule that recognises the line decides what it updates, so a line is
//! never counted twice: `Scenario: @author=X` is an author line, because the
//! author rule comes before the scenario rule.

use super::lines::split_normalized;
use crate::core_types::{DiscoveredFile, FileFeatureInfo};
use once_cell::sync::Lazy;
use regex::Regex;

static FEATURE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:функционал:|feature:)").expect("valid feature regex"));
static SCENARIO_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:сценарий:|scenario:)").expect("valid scenario regex"));
static AUTHOR_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^@author=").expect("valid author regex"));
static TASKS_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^@tasks=").expect("valid tasks regex"));

/// The effect a single recognised line has on a `FileFeatureInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate<'a> {
    /// Replace the functionality text.
    Functionality(&'a str),
    /// Set the export flag.
    ExportScenarios,
    /// Replace the author.
    Author(&'a str),
    /// Replace the task references.
    Tasks(&'a str),
    /// Append a scenario.
    Scenario(&'a str),
}

/// Which optional values the parser stores.
///
/// A disabled value still claims its lines (so precedence does not change),
/// it is just never written to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub collect_author: bool,
    pub collect_tasks: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            collect_author: true,
            collect_tasks: true,
        }
    }
}

/// A marker rule: receives the trimmed line and its lowercase form.
type MarkerRule = for<'a> fn(&'a str, &str) -> Option<FieldUpdate<'a>>;

/// Marker rules in precedence order.
const RULES: [MarkerRule; 5] = [
    feature_rule,
    export_rule,
    author_rule,
    tasks_rule,
    scenario_rule,
];

fn feature_rule<'a>(line: &'a str, _lower: &str) -> Option<FieldUpdate<'a>> {
    strip_marker(&FEATURE_PREFIX, line).map(FieldUpdate::Functionality)
}

fn export_rule<'a>(_line: &'a str, lower: &str) -> Option<FieldUpdate<'a>> {
    lower
        .contains("@exportscenarios")
        .then_some(FieldUpdate::ExportScenarios)
}

fn author_rule<'a>(line: &'a str, lower: &str) -> Option<FieldUpdate<'a>> {
    lower
        .contains("@author")
        .then(|| FieldUpdate::Author(strip_tag(&AUTHOR_PREFIX, line)))
}

fn tasks_rule<'a>(line: &'a str, lower: &str) -> Option<FieldUpdate<'a>> {
    lower
        .contains("@tasks")
        .then(|| FieldUpdate::Tasks(strip_tag(&TASKS_PREFIX, line)))
}

fn scenario_rule<'a>(line: &'a str, _lower: &str) -> Option<FieldUpdate<'a>> {
    strip_marker(&SCENARIO_PREFIX, line).map(FieldUpdate::Scenario)
}

/// Returns the text after a leading marker, or `None` if the line does not start with it.
fn strip_marker<'a>(prefix: &Regex, line: &'a str) -> Option<&'a str> {
    prefix.find(line).map(|m| trim_line(&line[m.end()..]))
}

/// Strips a leading `@tag=` if present. A tag without `=` (or not at the
/// start of the line) leaves the whole line as the value.
fn strip_tag<'a>(prefix: &Regex, line: &'a str) -> &'a str {
    match prefix.find(line) {
        Some(m) => trim_line(&line[m.end()..]),
        None => line,
    }
}

/// Trims surrounding whitespace and a byte-order mark, which editors
/// sometimes leave at the start of the first line.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Classifies a single line against the marker table.
///
/// The line is trimmed first; matching is case-insensitive and accepts both
/// the English and the Russian keywords.
///
/// # Examples
///
/// ```
/// use featlist::analysis::{classify_line, FieldUpdate};
///
/// assert_eq!(classify_line("  FEATURE: Login "), Some(FieldUpdate::Functionality("Login")));
/// assert_eq!(classify_line("Сценарий: Б"), Some(FieldUpdate::Scenario("Б")));
/// assert_eq!(classify_line("@author=Ivan"), Some(FieldUpdate::Author("Ivan")));
/// assert_eq!(classify_line("Given a user"), None);
/// ```
pub fn classify_line(line: &str) -> Option<FieldUpdate<'_>> {
    let line = trim_line(line);
    let lower = line.to_lowercase();
    RULES.iter().find_map(|rule| rule(line, &lower))
}

/// Parses the full text of a feature file into a `FileFeatureInfo`.
///
/// # Examples
///
/// ```
/// use featlist::analysis::{parse_features, ParseOptions};
/// use featlist::core_types::DiscoveredFile;
///
/// let file = DiscoveredFile {
///     file_name: "a.feature".into(),
///     relative_path: "a.feature".into(),
///     ..Default::default()
/// };
/// let text = "Feature: Login\n@exportScenarios\nScenario: Valid login\nScenario: Invalid login";
/// let info = parse_features(text, &file, &ParseOptions::default());
///
/// assert_eq!(info.functionality, "Login");
/// assert!(info.export_scenarios);
/// assert_eq!(info.scenarios, vec!["Valid login", "Invalid login"]);
/// ```
pub fn parse_features(
    content: &str,
    file: &DiscoveredFile,
    options: &ParseOptions,
) -> FileFeatureInfo {
    let mut info = FileFeatureInfo {
        file_name: file.file_name.clone(),
        relative_path: file.relative_path.clone(),
        ..Default::default()
    };

    for line in split_normalized(content) {
        match classify_line(line) {
            Some(FieldUpdate::Functionality(text)) => info.functionality = text.to_string(),
            Some(FieldUpdate::ExportScenarios) => info.export_scenarios = true,
            Some(FieldUpdate::Author(text)) => {
                if options.collect_author {
                    info.author = text.to_string();
                }
            }
            Some(FieldUpdate::Tasks(text)) => {
                if options.collect_tasks {
                    info.tasks = text.to_string();
                }
            }
            Some(FieldUpdate::Scenario(text)) => info.scenarios.push(text.to_string()),
            None => {}
        }
    }

    info
}
