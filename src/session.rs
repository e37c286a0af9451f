// src/session.rs

//! The aggregate of one scan and the sink that renders it.
//!
//! A `ScanSession` owns the ordered list of per-file records. Analysis workers
//! append to it as files complete; every append hands the full aggregate to
//! the session's `ReportSink` while the aggregate lock is held, so an append
//! and its render are never interleaved with another append.

use crate::core_types::{FileFeatureInfo, FileIndentationInfo};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Receives the full aggregate after every change.
///
/// Implementations re-render from scratch each time; there is no diffing.
pub trait ReportSink: Send + Sync {
    /// Renders the feature-list aggregate.
    fn render_feature_report(&self, records: &[FileFeatureInfo]);
    /// Renders the indentation aggregate.
    fn render_indentation_report(&self, records: &[FileIndentationInfo]);
}

/// A `ReportSink` that discards every update.
///
/// Used when only the final result matters (CLI runs, library calls).
pub struct NoOpSink;

impl ReportSink for NoOpSink {
    fn render_feature_report(&self, _records: &[FileFeatureInfo]) {}
    fn render_indentation_report(&self, _records: &[FileIndentationInfo]) {}
}

/// A per-file record a session can aggregate.
pub trait ScanRecord: Clone + Send + Sync + 'static {
    /// Path relative to the scan root, used to order the final aggregate.
    fn relative_path(&self) -> &str;
    /// Hands a full aggregate of this record type to the matching sink method.
    fn publish(records: &[Self], sink: &dyn ReportSink);
}

impl ScanRecord for FileFeatureInfo {
    fn relative_path(&self) -> &str {
        &self.relative_path
    }

    fn publish(records: &[Self], sink: &dyn ReportSink) {
        sink.render_feature_report(records);
    }
}

impl ScanRecord for FileIndentationInfo {
    fn relative_path(&self) -> &str {
        &self.relative_path
    }

    fn publish(records: &[Self], sink: &dyn ReportSink) {
        sink.render_indentation_report(records);
    }
}

/// The ordered aggregate of one scan, plus the sink it renders to.
///
/// # Examples
///
/// ```
/// use featlist::core_types::FileFeatureInfo;
/// use featlist::session::{NoOpSink, ScanSession};
/// use std::sync::Arc;
///
/// let session = ScanSession::new(Arc::new(NoOpSink));
/// session.append(FileFeatureInfo { relative_path: "b.feature".into(), ..Default::default() });
/// session.append(FileFeatureInfo { relative_path: "a.feature".into(), ..Default::default() });
/// session.finish();
///
/// let paths: Vec<String> = session.snapshot().into_iter().map(|r| r.relative_path).collect();
/// assert_eq!(paths, vec!["a.feature", "b.feature"]);
/// ```
pub struct ScanSession<R: ScanRecord> {
    records: Mutex<Vec<R>>,
    sink: Arc<dyn ReportSink>,
}

impl<R: ScanRecord> ScanSession<R> {
    /// Creates an empty session that renders to `sink`.
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            sink,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<R>> {
        // A panic in a sink must not lose the records gathered so far.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clears the aggregate. Called once at the start of every scan.
    pub fn reset(&self) {
        self.lock().clear();
    }

    /// Appends one record and re-renders the full aggregate.
    ///
    /// Records are kept in append order; nothing is deduplicated.
    pub fn append(&self, record: R) {
        let mut records = self.lock();
        records.push(record);
        R::publish(&records, self.sink.as_ref());
    }

    /// Sorts the aggregate by relative path and renders it one last time.
    ///
    /// Appends arrive in completion order, which varies between runs; after
    /// `finish` the aggregate is the same for the same directory contents.
    pub fn finish(&self) {
        let mut records = self.lock();
        records.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        R::publish(&records, self.sink.as_ref());
    }

    /// Returns a copy of the current aggregate.
    pub fn snapshot(&self) -> Vec<R> {
        self.lock().clone()
    }

    /// Number of records in the aggregate.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the aggregate is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Consumes the session, returning the aggregate.
    pub fn into_records(self) -> Vec<R> {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
