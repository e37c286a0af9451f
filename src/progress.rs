// src/progress.rs

//! Defines a trait for reporting scan progress.
//!
//! The total is not known up front: files are analyzed while the walk is still
//! running, so the length grows as files are discovered.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// A trait for reporting progress, abstracting over specific implementations like `indicatif`.
///
/// # Examples
///
/// ```
/// use featlist::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// struct LastFile(Mutex<String>);
///
/// impl ProgressReporter for LastFile {
///     fn discovered(&self, _total: u64) {}
///     fn analyzed(&self, _done: u64, relative_path: &str) {
///         *self.0.lock().unwrap() = relative_path.to_string();
///     }
///     fn finish(&self, _message: String) {}
/// }
///
/// let reporter = LastFile(Mutex::new(String::new()));
/// reporter.analyzed(1, "features/login.feature");
/// assert_eq!(*reporter.0.lock().unwrap(), "features/login.feature");
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Called each time the walker finds a file; `total` is the running count.
    fn discovered(&self, total: u64);
    /// Called each time a file has been analyzed; `done` is the running count.
    fn analyzed(&self, done: u64, relative_path: &str);
    /// Called once when the scan is over.
    fn finish(&self, message: String);
}

/// A `ProgressReporter` that does nothing.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn discovered(&self, _total: u64) {}
    fn analyzed(&self, _done: u64, _relative_path: &str) {}
    fn finish(&self, _message: String) {}
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar with a default style.
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}",
        ) {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn discovered(&self, total: u64) {
        self.bar.set_length(total);
    }

    fn analyzed(&self, done: u64, relative_path: &str) {
        self.bar.set_position(done);
        self.bar.set_message(relative_path.to_string());
    }

    fn finish(&self, message: String) {
        self.bar.finish_with_message(message);
    }
}
