//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_data_path;
use crate::cli::Cli;
use catalog_core::config::CatalogConfig;
use catalog_core::error::Result;
use catalog_core::loader::{self, DEFAULT_CATALOG_FILE, DEFAULT_WEIGHTS_FILE};
use catalog_core::store::CatalogHandle;
use catalog_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a Path,
    pub config: CatalogConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a Path, config: CatalogConfig, start: Instant) -> Self {
        Self {
            cli,
            root,
            config,
            start,
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        resolve_data_path(
            self.cli.catalog.as_deref(),
            self.config.catalog_path.as_deref(),
            self.root,
            DEFAULT_CATALOG_FILE,
        )
    }

    pub fn weights_path(&self) -> PathBuf {
        resolve_data_path(
            self.cli.weights.as_deref(),
            self.config.weights_path.as_deref(),
            self.root,
            DEFAULT_WEIGHTS_FILE,
        )
    }

    /// Load both data sources into a catalog handle
    pub fn open_catalog(&self) -> Result<CatalogHandle> {
        let catalog = loader::load(&self.catalog_path(), &self.weights_path())?;
        trace_time!(self.start, "load_catalog");
        Ok(CatalogHandle::new(catalog))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("catalog {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Browse a product catalog and its aggregate critic scores.");
        println!();
        println!("Run `catalog --help` for usage information.");
        Ok(())
    }
}
