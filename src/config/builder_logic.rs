// src/config/builder_logic.rs

use super::{ConfigBuilder, OutputDestination};
use crate::errors::{ConfigError, Result};
use std::path::PathBuf;

/// Validates combinations of options on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    #[cfg(feature = "clipboard")]
    {
        if builder.output_file.is_some() && builder.paste.unwrap_or(false) {
            return Err(ConfigError::Conflict {
                option1: "--output".to_string(),
                option2: "--paste".to_string(),
            }
            .into());
        }
    }
    if builder
        .output_file
        .as_deref()
        .is_some_and(|path| path.trim().is_empty())
    {
        return Err(ConfigError::InvalidValue {
            option: "--output".to_string(),
            value: String::new(),
            reason: "requires a file path".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Determines the final output destination.
pub(super) fn determine_output_destination(
    output_file: Option<String>,
    #[cfg(feature = "clipboard")] paste: Option<bool>,
) -> OutputDestination {
    if let Some(file_path_str) = output_file {
        OutputDestination::File(PathBuf::from(file_path_str))
    } else {
        #[cfg(feature = "clipboard")]
        if paste.unwrap_or(false) {
            OutputDestination::Clipboard
        } else {
            OutputDestination::Stdout
        }
        #[cfg(not(feature = "clipboard"))]
        {
            OutputDestination::Stdout
        }
    }
}
