use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};

/// Directory holding the JSON fixtures
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Get a Command for catalog, isolated from the caller's environment
pub fn catalog(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("catalog");
    cmd.current_dir(dir)
        .env("CATALOG_CONFIG_DIR", dir)
        .env_remove("CATALOG_FILE")
        .env_remove("CATALOG_WEIGHTS")
        .env_remove("CATALOG_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// A catalog Command pointed at the fixture catalog and weights
pub fn catalog_with_fixtures(dir: &Path) -> Command {
    let mut cmd = catalog(dir);
    cmd.arg("--catalog")
        .arg(fixture("products.json"))
        .arg("--weights")
        .arg(fixture("weights.json"));
    cmd
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}
