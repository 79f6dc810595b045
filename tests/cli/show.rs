use crate::support::{catalog_with_fixtures, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Show command tests
// ============================================================================

#[test]
fn test_show_detail_view() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .args(["show", "c4 oled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C4 OLED\nBrand: LG\nCategory: TVs"))
        .stdout(predicate::str::contains("Image: images/c4-oled.png"))
        .stdout(predicate::str::contains("Critics Score: 89/100 (excellent)"))
        .stdout(predicate::str::contains("Audience Rating: 4.7/5"))
        .stdout(predicate::str::contains(
            "Key Specs:\n  Screen Size: 55 inches\n  Panel Type: OLED",
        ))
        .stdout(predicate::str::contains("Pros:\n  - Perfect blacks"))
        .stdout(predicate::str::contains("Cons:\n  - Glossy screen"))
        .stdout(predicate::str::contains("Reviews:").not());
}

#[test]
fn test_show_unscored_product() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .args(["show", "Prototype X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Critics Score: N/A"));
}

#[test]
fn test_show_breakdown_human() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .args(["show", "WH-1000XM5", "--breakdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reviews:"))
        .stdout(predicate::str::contains("CNET: 8 out of 10 -> 80.0 x 1.20"))
        .stdout(predicate::str::contains(
            "Unknown Blog: 80 percent -> 80.0 x 0.70 (default weight)",
        ));
}

#[test]
fn test_show_breakdown_json() {
    let dir = tempdir().unwrap();

    let output = catalog_with_fixtures(dir.path())
        .args(["--format", "json", "show", "C4 OLED", "--breakdown"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["productName"], "C4 OLED");
    assert_eq!(json["keySpecs"]["panelType"], "OLED");
    assert_eq!(json["aiProsCons"]["pros"][0], "Perfect blacks");

    let breakdown = json["breakdown"].as_array().unwrap();
    assert_eq!(breakdown.len(), 3);
    assert_eq!(breakdown[0]["publication"], "TechRadar");
    assert_eq!(breakdown[0]["counted"], true);
    assert_eq!(breakdown[0]["weight"], 1.1);
    assert_eq!(breakdown[2]["publication"], "Some Forum");
    assert_eq!(breakdown[2]["counted"], false);
    assert!(breakdown[2]["skipReason"]
        .as_str()
        .unwrap()
        .contains("out of 7"));
}

#[test]
fn test_show_key_specs_keep_source_order() {
    let dir = tempdir().unwrap();

    let output = catalog_with_fixtures(dir.path())
        .args(["--format", "json", "show", "Bravia 9"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let keys: Vec<&String> = json["keySpecs"].as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec!["screenSize", "resolution", "refreshRate", "hdrFormats"]
    );
}

#[test]
fn test_show_nonexistent() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .args(["show", "Nonexistent 3000"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("product not found: Nonexistent 3000"));
}

#[test]
fn test_show_nonexistent_json_error() {
    let dir = tempdir().unwrap();

    let output = catalog_with_fixtures(dir.path())
        .args(["--format", "json", "show", "Nonexistent 3000"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 3);
    assert_eq!(err["error"]["type"], "not_found");
}
