//! Command dispatch logic for catalog

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use catalog_core::config::CatalogConfig;
use catalog_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());
    let config = CatalogConfig::discover(cli.config.as_deref(), &root)?;

    debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_config");

    let ctx = CommandContext::new(cli, &root, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
