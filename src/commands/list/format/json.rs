//! JSON output formatting for list command

use super::super::ProductRow;
use catalog_core::error::Result;

/// JSON object for one listed product
pub fn row_json(row: &ProductRow) -> serde_json::Value {
    let product = row.product;
    serde_json::json!({
        "productName": product.product_name,
        "brand": product.brand,
        "category": product.category,
        "imageURL": product.image_url,
        "audienceRating": product.audience_rating,
        "criticsScore": row.score.filter(|s| s.is_finite()),
        "criticsScoreRounded": row.rounded_score(),
        "criticsScoreDisplay": row.score_display(),
        "badge": row.badge,
    })
}

/// Output in JSON format
pub fn output_json(rows: &[ProductRow]) -> Result<()> {
    let output: Vec<_> = rows.iter().map(row_json).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
