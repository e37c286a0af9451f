mod common;

use assert_cmd::prelude::*;
use common::{create_file, featlist_cmd};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn diagnostics(stdout: &[u8]) -> Vec<(String, Vec<String>)> {
    let value: Value = serde_json::from_slice(stdout).unwrap();
    assert_eq!(value["kind"], "indentation");
    value["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            let lines = r["inconsistent_lines"]
                .as_array()
                .unwrap()
                .iter()
                .map(|l| l.as_str().unwrap().to_string())
                .collect();
            (r["relative_path"].as_str().unwrap().to_string(), lines)
        })
        .collect()
}

#[test]
fn test_mixed_line_and_space_policy() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "b.feature", "Feature: B\n  \tScenario: Mixed\n");

    let output = featlist_cmd()
        .args(["indent", "--indentation", "space", "-F", "json"])
        .arg(temp.path())
        .output()?;
    assert!(output.status.success());

    assert_eq!(
        diagnostics(&output.stdout),
        vec![(
            "b.feature".to_string(),
            vec![
                "in line 2 detected spaces and tabs".to_string(),
                "inconsistent tabs detected in file lines, spaces expected".to_string(),
            ]
        )]
    );
    Ok(())
}

#[test]
fn test_tabs_only_with_tab_policy_is_clean() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "t.feature", "Feature: T\n\tScenario: S\n\t\tGiven x\n");

    let output = featlist_cmd()
        .args(["indent", "--indentation", "tab", "-F", "json"])
        .arg(temp.path())
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        diagnostics(&output.stdout),
        vec![("t.feature".to_string(), vec![])]
    );
    Ok(())
}

#[test]
fn test_tag_tree_diagnostic_is_additive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(
        temp.path(),
        "tree.feature",
        "@Tree\nFeature: T\n\tScenario: S\n    Given x\n",
    );

    let output = featlist_cmd()
        .args(["indent", "-F", "json"])
        .env("FEATLIST_INDENTATION", "tab")
        .arg(temp.path())
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        diagnostics(&output.stdout)[0].1,
        vec![
            "tag tree detected, in file lines detected spaces and tabs",
            "inconsistent spaces detected in file lines, tabs expected",
        ]
    );
    Ok(())
}

#[test]
fn test_indent_html_rows_per_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "b.feature", "Feature: B\n\t x\n \ty\n");
    create_file(temp.path(), "clean.feature", "Feature: C\n");

    featlist_cmd()
        .arg("indent")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2>Indentation Check</h2>"))
        .stdout(predicate::str::contains("<th>File Name</th><th>Path</th><th>Line</th>"))
        .stdout(predicate::str::contains(
            "<td>b.feature</td><td>in line 2 detected spaces and tabs</td>",
        ))
        .stdout(predicate::str::contains(
            "<td>b.feature</td><td>in line 3 detected spaces and tabs</td>",
        ))
        .stdout(predicate::str::contains("clean.feature").not());
    Ok(())
}

#[test]
fn test_invalid_indentation_value_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    featlist_cmd()
        .args(["indent", "--indentation", "both"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--indentation"));
    Ok(())
}
