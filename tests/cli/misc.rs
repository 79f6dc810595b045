use crate::support::catalog;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();

    catalog(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("catalog "))
        .stdout(predicate::str::contains("catalog --help"));
}

#[test]
fn test_help() {
    let dir = tempdir().unwrap();

    catalog(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: catalog"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("weights"));
}

#[test]
fn test_version() {
    let dir = tempdir().unwrap();

    catalog(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let dir = tempdir().unwrap();

    catalog(dir.path()).arg("frobnicate").assert().code(2);
}

#[test]
fn test_unknown_subcommand_json_envelope() {
    let dir = tempdir().unwrap();

    let output = catalog(dir.path())
        .args(["--format", "json", "frobnicate"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 2);
}

#[test]
fn test_equals_form_json_envelope() {
    let dir = tempdir().unwrap();

    let output = catalog(dir.path())
        .args(["--format=json", "show"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
    let message = err["error"]["message"].as_str().unwrap();
    assert!(!message.starts_with("error:"));
    assert!(!message.contains('\n'));
}

#[test]
fn test_help_with_json_format_still_prints_help() {
    let dir = tempdir().unwrap();

    catalog(dir.path())
        .args(["--format", "json", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: catalog"));
}

#[test]
fn test_clap_error_is_plain_text_without_json() {
    let dir = tempdir().unwrap();

    catalog(dir.path())
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"error\"").not());
}
