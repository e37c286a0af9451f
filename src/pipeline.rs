// src/pipeline.rs

//! Runs one triggered scan: reset the session, walk the root, analyze every
//! feature file and append one record per file.
//!
//! The walker runs on its own threads and streams files through a channel;
//! the rayon pool reads and analyzes them as they arrive, so many reads are in
//! flight while the walk is still going. A file that cannot be read is logged
//! and contributes no record.

use crate::analysis::{check_indentation, parse_features};
use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::core_types::{DiscoveredFile, FileFeatureInfo, FileIndentationInfo};
use crate::discovery::send_feature_files;
use crate::errors::{file_read_error, Error, Result};
use crate::progress::ProgressReporter;
use crate::session::{ReportSink, ScanRecord, ScanSession};
use crossbeam_channel::unbounded;
use log::{debug, info, warn};
use rayon::iter::{ParallelBridge, ParallelIterator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::instrument;

/// The two triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pipeline {
    /// Build the feature list.
    FeatureList,
    /// Check indentation.
    IndentationCheck,
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pipeline::FeatureList => f.write_str("feature list"),
            Pipeline::IndentationCheck => f.write_str("indentation check"),
        }
    }
}

/// The final aggregate of a scan, tagged by pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum ScanReport {
    Features(Vec<FileFeatureInfo>),
    Indentation(Vec<FileIndentationInfo>),
}

impl ScanReport {
    /// Number of file records.
    pub fn file_count(&self) -> usize {
        match self {
            ScanReport::Features(records) => records.len(),
            ScanReport::Indentation(records) => records.len(),
        }
    }

    /// Whether no file was analyzed.
    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }
}

/// Reads a feature file. Invalid UTF-8 sequences are replaced, not rejected.
pub fn read_feature_file(file: &DiscoveredFile) -> Result<String> {
    let bytes = fs::read(&file.absolute_path).map_err(|e| file_read_error(e, &file.absolute_path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[instrument(level = "debug", skip_all, fields(path = %file.relative_path))]
fn analyze_file<R, A>(file: &DiscoveredFile, session: &ScanSession<R>, analyze: &A) -> bool
where
    R: ScanRecord,
    A: Fn(&str, &DiscoveredFile) -> R + Sync,
{
    match read_feature_file(file) {
        Ok(content) => {
            session.append(analyze(&content, file));
            true
        }
        Err(e) => {
            warn!("{}", e);
            false
        }
    }
}

/// Scans the root with a given analyzer, appending to `session`.
///
/// The session is reset first and finished (sorted and rendered once more)
/// after the walk and every read have completed.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled. Per-file failures
/// are logged and skipped.
pub fn scan_with<R, A>(
    config: &Config,
    session: &ScanSession<R>,
    token: &CancellationToken,
    progress: Option<&dyn ProgressReporter>,
    analyze: A,
) -> Result<()>
where
    R: ScanRecord,
    A: Fn(&str, &DiscoveredFile) -> R + Sync,
{
    session.reset();
    info!("Scanning {}", config.scan_root.display());

    let (tx, rx) = unbounded::<DiscoveredFile>();
    let discovered = AtomicU64::new(0);
    let analyzed = AtomicU64::new(0);

    let walk_result = thread::scope(|scope| {
        let walker = scope.spawn(move || send_feature_files(config, token, tx));

        rx.into_iter()
            .inspect(|_| {
                let total = discovered.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(progress) = progress {
                    progress.discovered(total);
                }
            })
            .par_bridge()
            .for_each(|file| {
                if token.is_cancelled() {
                    return;
                }
                analyze_file(&file, session, &analyze);
                let done = analyzed.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(progress) = progress {
                    progress.analyzed(done, &file.relative_path);
                }
            });

        match walker.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    });
    walk_result?;

    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    session.finish();
    debug!(
        "Scan complete. Discovered: {}, records: {}",
        discovered.load(Ordering::Relaxed),
        session.len()
    );
    if let Some(progress) = progress {
        progress.finish(format!("{} files analyzed", session.len()));
    }
    Ok(())
}

/// Runs the feature-list pipeline.
///
/// # Examples
///
/// ```
/// use featlist::config::ConfigBuilder;
/// use featlist::pipeline::scan_features;
/// use featlist::session::NoOpSink;
/// use featlist::CancellationToken;
/// use std::sync::Arc;
///
/// # fn main() -> featlist::errors::Result<()> {
/// let temp = tempfile::tempdir()?;
/// std::fs::write(
///     temp.path().join("a.feature"),
///     "Feature: Login\n@exportScenarios\nScenario: Valid login\nScenario: Invalid login",
/// )?;
///
/// let config = ConfigBuilder::new().scan_root(temp.path().to_str().unwrap()).build()?;
/// let records = scan_features(&config, &CancellationToken::new(), Arc::new(NoOpSink), None)?;
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].functionality, "Login");
/// assert!(records[0].export_scenarios);
/// assert_eq!(records[0].scenarios, vec!["Valid login", "Invalid login"]);
/// # Ok(())
/// # }
/// ```
pub fn scan_features(
    config: &Config,
    token: &CancellationToken,
    sink: Arc<dyn ReportSink>,
    progress: Option<&dyn ProgressReporter>,
) -> Result<Vec<FileFeatureInfo>> {
    let session = ScanSession::new(sink);
    let options = config.analysis.parse_options();
    scan_with(config, &session, token, progress, |content, file| {
        parse_features(content, file, &options)
    })?;
    Ok(session.into_records())
}

/// Runs the indentation-check pipeline.
pub fn scan_indentation(
    config: &Config,
    token: &CancellationToken,
    sink: Arc<dyn ReportSink>,
    progress: Option<&dyn ProgressReporter>,
) -> Result<Vec<FileIndentationInfo>> {
    let session = ScanSession::new(sink);
    let default_indentation = config.analysis.default_indentation;
    scan_with(config, &session, token, progress, |content, file| {
        check_indentation(content, file, default_indentation)
    })?;
    Ok(session.into_records())
}

/// Runs the pipeline selected by a trigger.
pub fn run_pipeline(
    pipeline: Pipeline,
    config: &Config,
    token: &CancellationToken,
    sink: Arc<dyn ReportSink>,
    progress: Option<&dyn ProgressReporter>,
) -> Result<ScanReport> {
    debug!("Running {} pipeline", pipeline);
    Ok(match pipeline {
        Pipeline::FeatureList => {
            ScanReport::Features(scan_features(config, token, sink, progress)?)
        }
        Pipeline::IndentationCheck => {
            ScanReport::Indentation(scan_indentation(config, token, sink, progress)?)
        }
    })
}
