//! `catalog categories` command - category names with product counts

use catalog_core::error::Result;
use catalog_core::format::records_value;
use catalog_core::store::Catalog;

use crate::cli::Cli;

/// Execute the categories command
pub fn execute(cli: &Cli, catalog: &Catalog) -> Result<()> {
    let counts: Vec<(&str, usize)> = catalog
        .store
        .categories()
        .map(|name| (name, catalog.store.products_in(name).len()))
        .collect();

    crate::output_by_format_result!(cli.format,
        json => {
            let output: Vec<_> = counts
                .iter()
                .map(|(name, count)| serde_json::json!({ "name": name, "count": count }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if counts.is_empty() && !cli.quiet {
                println!("No categories found");
            }
            for (name, count) in &counts {
                println!("{} ({})", name, count);
            }
        },
        records => {
            for (name, count) in &counts {
                println!("C name={} count={}", records_value(name), count);
            }
        }
    )
}
