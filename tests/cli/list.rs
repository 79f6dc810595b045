use crate::support::{catalog_with_fixtures, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// List command tests
// ============================================================================

#[test]
fn test_list_all_products() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bravia 9 [Sony] (TVs) critics 93/100 excellent"))
        .stdout(predicate::str::contains("C4 OLED [LG] (TVs) critics 89/100 excellent"))
        .stdout(predicate::str::contains("WH-1000XM5 [Sony] (Headphones) critics 80/100 good"))
        .stdout(predicate::str::contains("Studio Buds [Beats] (Headphones) critics 60/100 average"))
        .stdout(predicate::str::contains("Prototype X [Acme] (Headphones) critics N/A"));
}

#[test]
fn test_list_preserves_catalog_order() {
    let dir = tempdir().unwrap();

    let output = catalog_with_fixtures(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["productName"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Bravia 9", "C4 OLED", "WH-1000XM5", "Studio Buds", "Prototype X"]
    );
}

#[test]
fn test_list_query_matches_name_or_brand() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .args(["list", "sony"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bravia 9"))
        .stdout(predicate::str::contains("WH-1000XM5"))
        .stdout(predicate::str::contains("C4 OLED").not());

    catalog_with_fixtures(dir.path())
        .args(["list", "oled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C4 OLED"))
        .stdout(predicate::str::contains("Bravia 9").not());
}

#[test]
fn test_list_query_case_insensitive() {
    let dir = tempdir().unwrap();

    let upper = catalog_with_fixtures(dir.path())
        .args(["list", "SONY", "--category", "Headphones"])
        .output()
        .unwrap();
    let lower = catalog_with_fixtures(dir.path())
        .args(["list", "sony", "--category", "Headphones"])
        .output()
        .unwrap();

    assert!(upper.status.success());
    assert_eq!(upper.stdout, lower.stdout);
    assert!(String::from_utf8_lossy(&upper.stdout).contains("WH-1000XM5"));
}

#[test]
fn test_list_by_category() {
    let dir = tempdir().unwrap();

    let output = catalog_with_fixtures(dir.path())
        .args(["--format", "json", "list", "--category", "Headphones"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let products = json.as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p["category"] == "Headphones"));
}

#[test]
fn test_list_unknown_category_is_empty() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .args(["list", "--category", "Drones"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"))
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn test_list_category_all_is_exact() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .args(["list", "--category", "ALL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"))
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn test_list_no_match() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .args(["list", "zz-no-match"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"));

    catalog_with_fixtures(dir.path())
        .args(["--format", "json", "list", "zz-no-match"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_list_quiet_suppresses_empty_message() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .args(["--quiet", "list", "zz-no-match"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_json_scores() {
    let dir = tempdir().unwrap();

    let output = catalog_with_fixtures(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let products = json.as_array().unwrap();

    let bravia = &products[0];
    assert_eq!(bravia["criticsScoreRounded"], 93);
    assert_eq!(bravia["criticsScoreDisplay"], "93/100");
    assert_eq!(bravia["badge"], "excellent");
    assert_eq!(bravia["imageURL"], "images/bravia-9.png");

    let headphones = &products[2];
    let score = headphones["criticsScore"].as_f64().unwrap();
    assert!((score - 80.0).abs() < 1e-9);

    let prototype = &products[4];
    assert!(prototype["criticsScore"].is_null());
    assert_eq!(prototype["criticsScoreDisplay"], "N/A");
    assert_eq!(prototype["badge"], "unscored");
}

#[test]
fn test_list_records_format() {
    let dir = tempdir().unwrap();

    catalog_with_fixtures(dir.path())
        .args(["--format", "records", "list", "studio"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "P name=\"Studio Buds\" brand=Beats category=Headphones score=60 badge=average audience=3.9/5\n",
        ));
}
