//! Command implementations for all catalog commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{categories, list, show, weights};
use catalog_core::error::Result;
use tracing::debug;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let handle = ctx.open_catalog()?;
        let catalog = handle.snapshot();
        debug!(elapsed = ?ctx.start.elapsed(), "open_catalog");

        match self {
            Commands::List { query, category } => list::execute(
                ctx.cli,
                &catalog,
                &ctx.config,
                query.as_deref().unwrap_or(""),
                category,
            ),
            Commands::Show { name, breakdown } => {
                show::execute(ctx.cli, &catalog, &ctx.config, name, *breakdown)
            }
            Commands::Categories => categories::execute(ctx.cli, &catalog),
            Commands::Weights => weights::execute(ctx.cli, &catalog),
        }
    }
}
