// src/discovery/walker.rs

use crate::config::Config;
use glob::Pattern;
use ignore::{WalkBuilder, WalkParallel};
use log::debug;

/// Configures and builds the parallel walker for the scan root.
///
/// Every entry is visited: hidden files, `.gitignore`d paths and other VCS
/// ignore rules are not applied, because feature folders are often checked in
/// next to build output that a `.gitignore` would hide. Links are followed
/// (a link to a directory is recursed into); the walker reports loops as errors.
pub(super) fn build_walker(config: &Config) -> WalkParallel {
    let mut walker_builder = WalkBuilder::new(&config.scan_root);
    walker_builder
        .standard_filters(false)
        .require_git(false)
        .follow_links(true);
    debug!(
        "Configuring walker for '{}': standard filters disabled, following links.",
        config.scan_root.display()
    );

    if let Some(ignore_globs) = config.discovery.ignore_patterns.clone() {
        debug!("Adding filter_entry for {} ignore patterns.", ignore_globs.len());
        let root = config.scan_root.clone();

        walker_builder.filter_entry(move |entry| {
            let path = entry.path();
            let relative_path = path.strip_prefix(&root).unwrap_or(path);
            if matches_any(&ignore_globs, relative_path) {
                debug!("Pruning '{}' (matches an ignore pattern).", path.display());
                return false;
            }
            true
        });
    }

    walker_builder.build_parallel()
}

fn matches_any(globs: &[Pattern], relative_path: &std::path::Path) -> bool {
    // The root itself strips to an empty path and is never pruned.
    if relative_path.as_os_str().is_empty() {
        return false;
    }
    globs.iter().any(|glob| glob.matches_path(relative_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_matches_any() {
        let globs = vec![
            Pattern::new("drafts").unwrap(),
            Pattern::new("**/*.wip.feature").unwrap(),
        ];
        assert!(matches_any(&globs, Path::new("drafts")));
        assert!(matches_any(&globs, Path::new("a/b/login.wip.feature")));
        assert!(!matches_any(&globs, Path::new("a/login.feature")));
        assert!(!matches_any(&globs, Path::new("")));
    }
}
