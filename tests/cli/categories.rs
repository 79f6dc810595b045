use crate::support::{catalog_with_fixtures, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_categories_in_catalog_order() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::diff("TVs (2)\nHeadphones (3)\nCameras (0)\n"));
}

#[test]
fn test_categories_json() {
    let dir = tempdir().unwrap();

    let output = catalog_with_fixtures(dir.path())
        .args(["--format", "json", "categories"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json[1]["name"], "Headphones");
    assert_eq!(json[1]["count"], 3);
}

#[test]
fn test_weights_table() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .arg("weights")
        .assert()
        .success()
        .stdout(predicate::str::contains("CNET: 1.2"))
        .stdout(predicate::str::contains("default: 0.7"));
}
