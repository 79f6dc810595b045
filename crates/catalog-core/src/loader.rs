//! Loading the catalog and weight data sources from JSON files
//!
//! The catalog file is either an object mapping category names to product
//! arrays, or a flat array of products that each name their category. Flat
//! arrays are grouped by category in order of first appearance.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::product::Product;
use crate::store::{Catalog, CatalogStore};
use crate::weights::WeightTable;

/// Catalog file used when none is configured
pub const DEFAULT_CATALOG_FILE: &str = "products.json";
/// Weight file used when none is configured
pub const DEFAULT_WEIGHTS_FILE: &str = "weights.json";

/// Parse catalog JSON text into a store
pub fn parse_catalog(json: &str) -> Result<CatalogStore> {
    let buckets = match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(category, products)| {
                let products: Vec<Product> = serde_json::from_value(products).map_err(|e| {
                    CatalogError::io_operation("parse", format!("category {category:?}"), e)
                })?;
                Ok((category, products))
            })
            .collect::<Result<Vec<_>>>()?,
        Value::Array(items) => {
            let products: Vec<Product> = serde_json::from_value(Value::Array(items))?;
            group_by_category(products)
        }
        other => {
            return Err(CatalogError::invalid_value(
                "catalog",
                format!("expected an object or array, found {}", json_kind(&other)),
            ))
        }
    };

    Ok(CatalogStore::from_categories(buckets))
}

fn group_by_category(products: Vec<Product>) -> Vec<(String, Vec<Product>)> {
    let mut buckets: Vec<(String, Vec<Product>)> = Vec::new();
    for product in products {
        match buckets.iter_mut().find(|(name, _)| *name == product.category) {
            Some((_, list)) => list.push(product),
            None => buckets.push((product.category.clone(), vec![product])),
        }
    }
    buckets
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse weight JSON text
pub fn parse_weights(json: &str) -> Result<WeightTable> {
    Ok(serde_json::from_str(json)?)
}

/// Load the catalog file; a missing file is a data error
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_catalog(path: &Path) -> Result<CatalogStore> {
    if !path.is_file() {
        return Err(CatalogError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CatalogError::io_operation("read", path.display(), e))?;
    let store = parse_catalog(&content).map_err(|e| match e {
        CatalogError::Json(err) => CatalogError::io_operation("parse", path.display(), err),
        other => other,
    })?;

    debug!(
        categories = store.category_count(),
        products = store.product_count(),
        "loaded catalog"
    );
    Ok(store)
}

/// Load the weight file; a missing file yields `None`
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_weights(path: &Path) -> Result<Option<WeightTable>> {
    if !path.is_file() {
        warn!("weight file not found, critic scores will be unavailable");
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CatalogError::io_operation("read", path.display(), e))?;
    let table = parse_weights(&content)
        .map_err(|e| CatalogError::io_operation("parse", path.display(), e))?;

    if table.default_weight().is_none() {
        warn!("weight table has no usable default, unlisted publications will be skipped");
    }
    debug!(entries = table.len(), "loaded weights");
    Ok(Some(table))
}

/// Load both data sources into one catalog snapshot
pub fn load(catalog_path: &Path, weights_path: &Path) -> Result<Catalog> {
    let store = load_catalog(catalog_path)?;
    let weights = load_weights(weights_path)?;
    Ok(Catalog::new(store, weights))
}
