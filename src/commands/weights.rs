//! `catalog weights` command - the publication weight table

use catalog_core::error::Result;
use catalog_core::format::records_value;
use catalog_core::store::Catalog;

use crate::cli::Cli;

/// Execute the weights command
pub fn execute(cli: &Cli, catalog: &Catalog) -> Result<()> {
    let entries: Vec<(&str, Option<f64>)> = catalog
        .weights
        .as_ref()
        .map(|table| table.iter().collect())
        .unwrap_or_default();

    crate::output_by_format_result!(cli.format,
        json => {
            let map: serde_json::Map<String, serde_json::Value> = entries
                .iter()
                .map(|(name, weight)| (name.to_string(), serde_json::json!(weight)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
            Ok(())
        },
        human => {
            if entries.is_empty() && !cli.quiet {
                println!("No weights loaded");
            }
            for (name, weight) in &entries {
                match weight {
                    Some(w) => println!("{}: {}", name, w),
                    None => println!("{}: (invalid)", name),
                }
            }
        },
        records => {
            for (name, weight) in &entries {
                let value = weight.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string());
                println!("W publication={} weight={}", records_value(name), value);
            }
        }
    )
}
