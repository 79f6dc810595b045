use crate::support::{catalog, fixture};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn write_config(dir: &std::path::Path, extra: &str) {
    let content = format!(
        "catalog_path = {:?}\nweights_path = {:?}\n{}",
        fixture("products.json").display().to_string(),
        fixture("weights.json").display().to_string(),
        extra
    );
    fs::write(dir.join("catalog.toml"), content).unwrap();
}

#[test]
fn test_config_in_working_directory() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "");

    catalog(dir.path())
        .args(["list", "bravia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("critics 93/100 excellent"));
}

#[test]
fn test_config_badge_thresholds() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "\n[badge]\nexcellent = 95\n");

    catalog(dir.path())
        .args(["list", "bravia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("critics 93/100 good"));
}

#[test]
fn test_config_relative_paths_resolve_against_config_dir() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::copy(fixture("products.json"), data.join("products.json")).unwrap();
    fs::copy(fixture("weights.json"), data.join("weights.json")).unwrap();

    let conf_dir = dir.path().join("conf");
    fs::create_dir(&conf_dir).unwrap();
    let config = conf_dir.join("custom.toml");
    fs::write(
        &config,
        "catalog_path = \"../data/products.json\"\nweights_path = \"../data/weights.json\"\n",
    )
    .unwrap();

    catalog(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["list", "--category", "TVs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C4 OLED [LG] (TVs) critics 89/100"));
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("catalog.toml"),
        "catalog_path = \"missing.json\"\n",
    )
    .unwrap();

    catalog(dir.path())
        .arg("--catalog")
        .arg(fixture("products.json"))
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("TVs (2)"));
}

#[test]
fn test_root_flag_locates_default_files() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("shop");
    fs::create_dir(&root).unwrap();
    fs::copy(fixture("products.json"), root.join("products.json")).unwrap();
    fs::copy(fixture("weights.json"), root.join("weights.json")).unwrap();

    catalog(dir.path())
        .arg("--root")
        .arg(&root)
        .args(["list", "studio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("critics 60/100 average"));
}

#[test]
fn test_inverted_thresholds_is_usage_error() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "\n[badge]\nexcellent = 60\ngood = 80\n");

    catalog(dir.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid badge thresholds"));
}

#[test]
fn test_malformed_config_is_failure() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("catalog.toml"), "catalog_path = [").unwrap();

    catalog(dir.path()).arg("list").assert().code(1);
}
