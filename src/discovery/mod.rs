//! Walks the scan root for feature files.
//!
//! The walk is partial-failure tolerant: a directory that cannot be listed or
//! an entry that cannot be stat'ed is logged and skipped, and its siblings are
//! still visited.
use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::core_types::DiscoveredFile;
use crate::errors::{Error, Result};
use crossbeam_channel::{unbounded, Sender};
use ignore::WalkState;
use log::{debug, warn};

mod entry_processor;
mod walker;

pub use entry_processor::is_feature_file;
use entry_processor::process_direntry;
use walker::build_walker;

/// Walks the scan root and sends every feature file found to `tx`.
///
/// Blocks until the walk is complete. Files are sent as soon as they are found,
/// so a consumer on another thread can start analyzing them while the walk is
/// still running. Sibling order is not defined.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled before or during the
/// walk. Failures on individual entries are logged, never returned.
pub fn send_feature_files(
    config: &Config,
    token: &CancellationToken,
    tx: Sender<DiscoveredFile>,
) -> Result<()> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    let walker = build_walker(config);
    let scan_root = config.scan_root.clone();
    let token_clone = token.clone();

    walker.run(move || {
        let tx = tx.clone();
        let token = token_clone.clone();
        let scan_root = scan_root.clone();

        Box::new(move |entry_result| {
            if token.is_cancelled() {
                return WalkState::Quit;
            }
            match process_direntry(entry_result, &scan_root) {
                Ok(Some(file)) => {
                    debug!("Discovered feature file: {}", file.relative_path);
                    if tx.send(file).is_err() {
                        log::error!("Receiver dropped, quitting discovery walk.");
                        return WalkState::Quit;
                    }
                }
                Ok(None) => {}
                Err(e) => warn!("{}", e),
            }
            WalkState::Continue
        })
    });

    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }
    Ok(())
}

/// Collects every feature file under the scan root, sorted by relative path.
///
/// # Examples
///
/// ```
/// use featlist::config::ConfigBuilder;
/// use featlist::discovery::discover_feature_files;
/// use featlist::CancellationToken;
/// use std::fs;
///
/// # fn main() -> featlist::errors::Result<()> {
/// let temp = tempfile::tempdir()?;
/// fs::create_dir(temp.path().join("auth"))?;
/// fs::write(temp.path().join("auth/login.feature"), "Feature: Login")?;
/// fs::write(temp.path().join("README.md"), "# Features")?;
///
/// let config = ConfigBuilder::new().scan_root(temp.path().to_str().unwrap()).build()?;
/// let files = discover_feature_files(&config, &CancellationToken::new())?;
///
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].file_name, "login.feature");
/// # Ok(())
/// # }
/// ```
pub fn discover_feature_files(
    config: &Config,
    token: &CancellationToken,
) -> Result<Vec<DiscoveredFile>> {
    let (tx, rx) = unbounded();
    send_feature_files(config, token, tx)?;

    let mut files: Vec<DiscoveredFile> = rx.into_iter().collect();
    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    debug!("Discovery complete. Feature files: {}", files.len());
    Ok(files)
}
