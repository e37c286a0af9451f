// src/discovery/entry_processor.rs

use crate::constants::FEATURE_EXTENSION;
use crate::core_types::DiscoveredFile;
use crate::errors::Error;
use ignore::DirEntry;
use log::trace;
use std::io;
use std::path::Path;

/// Processes a single entry yielded by the walker.
///
/// Returns `Ok(Some(_))` for a regular file with the `.feature` extension,
/// `Ok(None)` for directories (the walker recurses into them itself) and any
/// other file, and `Err(_)` when the entry could not be listed or stat'ed.
/// Errors are for logging only; the walk always continues.
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    scan_root: &Path,
) -> Result<Option<DiscoveredFile>, Error> {
    let entry = entry_result.map_err(walk_error)?;
    let absolute_path = entry.path();
    trace!("Processing entry: {}", absolute_path.display());

    let metadata = entry.metadata().map_err(|e| Error::Stat {
        path: absolute_path.display().to_string(),
        source: into_io_error(e),
    })?;

    if !metadata.is_file() {
        trace!("Skipping non-file entry: {}", absolute_path.display());
        return Ok(None);
    }
    if !is_feature_file(absolute_path) {
        return Ok(None);
    }

    let relative_path = absolute_path
        .strip_prefix(scan_root)
        .unwrap_or(absolute_path)
        .to_string_lossy()
        .into_owned();
    // Report paths always use forward slashes.
    #[cfg(windows)]
    let relative_path = relative_path.replace('\\', "/");
    let file_name = absolute_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| relative_path.clone());

    Ok(Some(DiscoveredFile {
        absolute_path: absolute_path.to_path_buf(),
        relative_path,
        file_name,
    }))
}

/// Checks whether a path has exactly the `.feature` extension.
///
/// The comparison is case-sensitive, and a dotfile named `.feature` has no
/// extension at all.
///
/// # Examples
///
/// ```
/// use featlist::discovery::is_feature_file;
/// use std::path::Path;
///
/// assert!(is_feature_file(Path::new("features/login.feature")));
/// assert!(!is_feature_file(Path::new("features/login.FEATURE")));
/// assert!(!is_feature_file(Path::new("features/.feature")));
/// assert!(!is_feature_file(Path::new("features/login.feature.bak")));
/// ```
pub fn is_feature_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == FEATURE_EXTENSION)
}

/// Maps a walker error to the scan-time error it stands for.
///
/// A failure on a directory (listing it, or a link loop back into an
/// ancestor) is `Error::DirectoryRead`. A failure on any other entry, such as
/// a dangling symlink, is `Error::Stat`.
fn walk_error(err: ignore::Error) -> Error {
    let path = error_path(&err).map(Path::to_path_buf);
    let is_directory = is_loop(&err) || path.as_deref().map_or(true, Path::is_dir);
    let path = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown>".to_string());
    let source = into_io_error(err);
    if is_directory {
        Error::DirectoryRead { path, source }
    } else {
        Error::Stat { path, source }
    }
}

fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
        _ => false,
    }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child),
        _ => None,
    }
}

fn into_io_error(err: ignore::Error) -> io::Error {
    let kind = err.io_error().map_or(io::ErrorKind::Other, |e| e.kind());
    io::Error::new(kind, err.to_string())
}
