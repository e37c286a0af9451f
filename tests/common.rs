// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by the CLI tests, but not all.
pub fn featlist_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("featlist"));
    // Settings from the developer's shell must not leak into the tests.
    cmd.env_remove("FEATLIST_ROOT")
        .env_remove("FEATLIST_INDENTATION")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a file under `dir`, creating parent directories as needed.
#[allow(dead_code)]
pub fn create_file(dir: &Path, relative_path: &str, content: &str) {
    let path = dir.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[allow(dead_code)]
pub const LOGIN_FEATURE: &str =
    "Feature: Login\n@exportScenarios\nScenario: Valid login\nScenario: Invalid login";
