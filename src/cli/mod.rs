//! CLI argument parsing for catalog
//!
//! Global flags: --root, --catalog, --weights, --config, --format, --quiet,
//! --verbose, --log-level, --log-json

pub mod format;
pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use catalog_core::query::CategorySelection;
pub use output::{requested_format, OutputFormat};
use parse::parse_category;

/// Catalog - browse products and their aggregate critic scores
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the config and default data files
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Product catalog JSON file
    #[arg(long, global = true, env = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,

    /// Publication weight JSON file
    #[arg(long, global = true, env = "CATALOG_WEIGHTS")]
    pub weights: Option<PathBuf>,

    /// Config file (default: catalog.toml in the root, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, catalog_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products matching a query, with their critic scores
    List {
        /// Case-insensitive text matched against product name and brand
        query: Option<String>,

        /// Category to list, or "all"
        #[arg(long, short, default_value = "all", value_parser = parse_category)]
        category: CategorySelection,
    },

    /// Show a product's details
    Show {
        /// Product name (case-insensitive)
        name: String,

        /// Include each review's normalized score and weight
        #[arg(long)]
        breakdown: bool,
    },

    /// List categories with product counts
    Categories,

    /// Show the publication weight table
    Weights,
}
