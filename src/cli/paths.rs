//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Resolve the root directory.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Pick a data file: explicit flag, then config, then `default_name` in `root`.
///
/// Relative flag values resolve against `root`; config values are already
/// resolved against the config file's directory.
pub fn resolve_data_path(
    flag: Option<&Path>,
    configured: Option<&Path>,
    root: &Path,
    default_name: &str,
) -> PathBuf {
    match (flag, configured) {
        (Some(path), _) if path.is_absolute() => path.to_path_buf(),
        (Some(path), _) => root.join(path),
        (None, Some(path)) => path.to_path_buf(),
        (None, None) => root.join(default_name),
    }
}
