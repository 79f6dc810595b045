//! Records output formatting for list command

use super::super::ProductRow;
use catalog_core::format::records_value;

/// Output in records format, one `P` line per product
pub fn output_records(rows: &[ProductRow]) {
    for row in rows {
        println!("{}", record_line(row));
    }
}

fn record_line(row: &ProductRow) -> String {
    let product = row.product;
    let score = row
        .rounded_score()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "P name={} brand={} category={} score={} badge={} audience={}",
        records_value(&product.product_name),
        records_value(&product.brand),
        records_value(&product.category),
        score,
        row.badge,
        records_value(&product.audience_rating),
    )
}
