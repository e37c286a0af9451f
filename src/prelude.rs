//! The `featlist` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use featlist::prelude::*;
//! # fn main() -> Result<()> {
//! let temp = tempfile::tempdir()?;
//! std::fs::write(temp.path().join("a.feature"), "Feature: A\n\tScenario: One\n")?;
//!
//! let config = ConfigBuilder::new()
//!     .scan_root(temp.path().to_str().unwrap())
//!     .default_indentation(IndentStyle::Space)
//!     .build()?;
//! let records = scan_indentation(&config, &CancellationToken::new(), Arc::new(NoOpSink), None)?;
//! assert_eq!(records[0].inconsistent_lines.len(), 1);
//! # Ok(())
//! # }
//! ```

pub use crate::analysis::{check_indentation, parse_features, ParseOptions};
pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder, IndentStyle, OutputDestination, ReportFormat};
pub use crate::core_types::{DiscoveredFile, FileFeatureInfo, FileIndentationInfo};
pub use crate::discovery::discover_feature_files;
pub use crate::errors::{Error, Result};
pub use crate::opener::{FileOpener, SystemOpener};
pub use crate::output::{formatter_for, ReportContext, ReportFormatter};
pub use crate::pipeline::{run_pipeline, scan_features, scan_indentation, Pipeline, ScanReport};
pub use crate::session::{NoOpSink, ReportSink, ScanSession};
pub use crate::run;
pub use std::sync::Arc;
