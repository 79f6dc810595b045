//! `catalog show` command - product detail view

use catalog_core::bail_usage;
use catalog_core::config::CatalogConfig;
use catalog_core::error::{CatalogError, Result};
use catalog_core::format::records_value;
use catalog_core::product::{KeySpecs, Product};
use catalog_core::review::Review;
use catalog_core::score::{self, ReviewOutcome, ScoreBreakdown};
use catalog_core::store::Catalog;

use crate::cli::Cli;
use crate::commands::list::{format::row_json, ProductRow};

/// Execute the show command
pub fn execute(
    cli: &Cli,
    catalog: &Catalog,
    config: &CatalogConfig,
    name: &str,
    breakdown: bool,
) -> Result<()> {
    if name.trim().is_empty() {
        bail_usage!("product name must not be empty");
    }

    let product = catalog
        .store
        .find_product(name)
        .ok_or_else(|| CatalogError::not_found("product", name))?;

    let row = ProductRow::new(catalog, product, &config.badge);
    let explained = if breakdown {
        Some(score::explain(&product.critic_reviews, catalog.weights.as_ref()))
    } else {
        None
    };

    crate::output_by_format_result!(cli.format,
        json => output_json(&row, explained.as_ref()),
        human => { output_human(&row, explained.as_ref()) },
        records => { output_records(&row, explained.as_ref()) }
    )
}

type Explained<'a> = std::result::Result<ScoreBreakdown<'a>, score::AggregateError>;

fn output_human(row: &ProductRow, explained: Option<&Explained>) {
    let product = row.product;
    println!("{}", product.product_name);
    println!("Brand: {}", product.brand);
    println!("Category: {}", product.category);
    if !product.image_url.is_empty() {
        println!("Image: {}", product.image_url);
    }
    match row.score {
        Some(_) => println!("Critics Score: {} ({})", row.score_display(), row.badge),
        None => println!("Critics Score: {}", row.score_display()),
    }
    if !product.audience_rating.is_empty() {
        println!("Audience Rating: {}", product.audience_rating);
    }

    if !product.key_specs.is_empty() {
        println!();
        println!("Key Specs:");
        for (key, value) in product.key_specs.iter() {
            println!("  {}: {}", KeySpecs::display_label(key), value);
        }
    }

    print_list("Pros", &product.ai_pros_cons.pros);
    print_list("Cons", &product.ai_pros_cons.cons);

    if let Some(explained) = explained {
        println!();
        println!("Reviews:");
        match explained {
            Ok(breakdown) => {
                for contribution in &breakdown.contributions {
                    println!("  {}", human_review_line(contribution.review, &contribution.outcome));
                }
                if breakdown.contributions.is_empty() {
                    println!("  (no critic reviews)");
                }
            }
            Err(e) => println!("  unavailable: {}", e),
        }
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}:", title);
    for item in items {
        println!("  - {}", item);
    }
}

fn raw_score(review: &Review) -> String {
    match review.score {
        Some(s) => format!("{} {}", s, review.scale),
        None => format!("- {}", review.scale),
    }
}

fn human_review_line(review: &Review, outcome: &ReviewOutcome) -> String {
    match outcome {
        ReviewOutcome::Counted { normalized, weight } => format!(
            "{}: {} -> {:.1} x {:.2}{}",
            review.publication,
            raw_score(review),
            normalized,
            weight.value,
            if weight.from_default { " (default weight)" } else { "" }
        ),
        ReviewOutcome::Unnormalized(e) => {
            format!("{}: {} skipped: {}", review.publication, raw_score(review), e)
        }
        ReviewOutcome::Unweighted(e) => {
            format!("{}: {} skipped: {}", review.publication, raw_score(review), e)
        }
    }
}

fn output_json(row: &ProductRow, explained: Option<&Explained>) -> Result<()> {
    let product: &Product = row.product;
    let mut json = row_json(row);
    if let Some(obj) = json.as_object_mut() {
        obj.insert("keySpecs".to_string(), serde_json::to_value(&product.key_specs)?);
        obj.insert(
            "aiProsCons".to_string(),
            serde_json::to_value(&product.ai_pros_cons)?,
        );
        obj.insert(
            "criticReviews".to_string(),
            serde_json::to_value(&product.critic_reviews)?,
        );

        match explained {
            Some(Ok(breakdown)) => {
                let entries: Vec<_> = breakdown
                    .contributions
                    .iter()
                    .map(|c| review_json(c.review, &c.outcome))
                    .collect();
                obj.insert("breakdown".to_string(), serde_json::json!(entries));
            }
            Some(Err(e)) => {
                obj.insert("breakdown".to_string(), serde_json::Value::Null);
                obj.insert(
                    "breakdownError".to_string(),
                    serde_json::json!(e.to_string()),
                );
            }
            None => {}
        }
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn review_json(review: &Review, outcome: &ReviewOutcome) -> serde_json::Value {
    let mut json = serde_json::json!({
        "publication": review.publication,
        "score": review.score,
        "scale": review.scale,
        "counted": outcome.is_counted(),
    });
    match outcome {
        ReviewOutcome::Counted { normalized, weight } => {
            json["normalized"] = serde_json::json!(normalized);
            json["weight"] = serde_json::json!(weight.value);
            json["defaultWeight"] = serde_json::json!(weight.from_default);
        }
        ReviewOutcome::Unnormalized(e) => json["skipReason"] = serde_json::json!(e.to_string()),
        ReviewOutcome::Unweighted(e) => json["skipReason"] = serde_json::json!(e.to_string()),
    }
    json
}

fn output_records(row: &ProductRow, explained: Option<&Explained>) {
    let product = row.product;
    let score = row
        .rounded_score()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "P name={} brand={} category={} score={} badge={} audience={}",
        records_value(&product.product_name),
        records_value(&product.brand),
        records_value(&product.category),
        score,
        row.badge,
        records_value(&product.audience_rating),
    );
    for (key, value) in product.key_specs.iter() {
        println!("S {}={}", key, records_value(value));
    }
    for pro in &product.ai_pros_cons.pros {
        println!("+ {}", pro);
    }
    for con in &product.ai_pros_cons.cons {
        println!("- {}", con);
    }
    if let Some(Ok(breakdown)) = explained {
        for c in &breakdown.contributions {
            match &c.outcome {
                ReviewOutcome::Counted { normalized, weight } => println!(
                    "R publication={} normalized={:.1} weight={} default={}",
                    records_value(&c.review.publication),
                    normalized,
                    weight.value,
                    weight.from_default
                ),
                _ => println!(
                    "R publication={} skipped=true",
                    records_value(&c.review.publication)
                ),
            }
        }
    }
}
