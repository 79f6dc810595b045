//! `catalog list` command - filtered product grid
//!
//! - free-text query over product name and brand (case-insensitive)
//! - `--category` selects one category or `all`
//! - order follows the catalog: category order, then listing order

pub mod format;

use catalog_core::config::CatalogConfig;
use catalog_core::error::Result;
use catalog_core::product::Product;
use catalog_core::query::{CategorySelection, ProductFilter};
use catalog_core::score::{display_score, rounded, BadgeThresholds, ScoreBadge};
use catalog_core::store::Catalog;

use crate::cli::Cli;

use self::format::{output_human, output_json, output_records};

/// A product with its computed critic score, ready for display
#[derive(Debug, Clone)]
pub struct ProductRow<'a> {
    pub product: &'a Product,
    pub score: Option<f64>,
    pub badge: ScoreBadge,
}

impl<'a> ProductRow<'a> {
    pub fn new(catalog: &Catalog, product: &'a Product, thresholds: &BadgeThresholds) -> Self {
        let score = catalog.critic_score(product);
        Self {
            product,
            score,
            badge: ScoreBadge::classify(score, thresholds),
        }
    }

    pub fn rounded_score(&self) -> Option<i64> {
        rounded(self.score)
    }

    /// `"87/100"` or `"N/A"`
    pub fn score_display(&self) -> String {
        display_score(self.score)
    }
}

/// Execute the list command
pub fn execute(
    cli: &Cli,
    catalog: &Catalog,
    config: &CatalogConfig,
    query: &str,
    category: &CategorySelection,
) -> Result<()> {
    let filter = ProductFilter::new()
        .with_query(query)
        .with_category(category.clone());

    let rows: Vec<ProductRow> = filter
        .select(&catalog.store)
        .into_iter()
        .map(|product| ProductRow::new(catalog, product, &config.badge))
        .collect();

    crate::output_by_format_result!(cli.format,
        json => output_json(&rows),
        human => { output_human(cli, &rows) },
        records => { output_records(&rows) }
    )
}
