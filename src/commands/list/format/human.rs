//! Human-readable output formatting for list command

use super::super::ProductRow;
use crate::cli::Cli;

/// Output in human-readable format
pub fn output_human(cli: &Cli, rows: &[ProductRow]) {
    if rows.is_empty() {
        if !cli.quiet {
            println!("No products found");
        }
        return;
    }

    for row in rows {
        println!("{}", human_line(row));
    }
}

pub(crate) fn human_line(row: &ProductRow) -> String {
    let product = row.product;
    let mut line = format!(
        "{} [{}] ({}) critics {}",
        product.product_name,
        product.brand,
        product.category,
        row.score_display()
    );
    if row.score.is_some() {
        line.push_str(&format!(" {}", row.badge));
    }
    if !product.audience_rating.is_empty() {
        line.push_str(&format!(", audience {}", product.audience_rating));
    }
    line
}
