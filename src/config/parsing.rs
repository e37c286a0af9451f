// src/config/parsing.rs

use super::{IndentStyle, ReportFormat};
use crate::errors::{ConfigError, Error, Result};
use glob::Pattern;
use std::str::FromStr;

impl FromStr for IndentStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "unspecified" | "none" => Ok(IndentStyle::Unspecified),
            "tab" | "tabs" => Ok(IndentStyle::Tab),
            "space" | "spaces" => Ok(IndentStyle::Space),
            other => Err(ConfigError::InvalidValue {
                option: "indentation".to_string(),
                value: other.to_string(),
                reason: "expected one of unspecified, tab, space".to_string(),
            }
            .into()),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(ConfigError::InvalidValue {
                option: "report format".to_string(),
                value: other.to_string(),
                reason: "expected one of html, markdown, json".to_string(),
            }
            .into()),
        }
    }
}

/// Compiles the `--ignore` glob patterns. An invalid pattern is a configuration error.
pub(super) fn compile_ignore_patterns(patterns: Option<Vec<String>>) -> Result<Option<Vec<Pattern>>> {
    patterns
        .map(|vec| {
            vec.into_iter()
                .filter(|p| !p.trim().is_empty())
                .map(|p| {
                    Pattern::new(p.trim()).map_err(|e| {
                        Error::from(ConfigError::InvalidValue {
                            option: "ignore glob".to_string(),
                            value: p.clone(),
                            reason: e.to_string(),
                        })
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .transpose()
        .map(|compiled| compiled.filter(|v| !v.is_empty()))
}
