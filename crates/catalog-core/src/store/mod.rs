//! In-memory catalog store
//!
//! Products grouped by category, in the order the data source delivered
//! them. The store is immutable once built; reloading replaces the whole
//! snapshot through [`CatalogHandle`].

mod snapshot;

pub use snapshot::{Catalog, CatalogHandle};

use tracing::debug;

use crate::product::Product;

/// Category name to ordered product list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    categories: Vec<(String, Vec<Product>)>,
}

impl CatalogStore {
    /// Build a store from category buckets.
    ///
    /// A product belongs to the bucket it was delivered in, so each product's
    /// `category` field is set to its bucket name. Buckets that repeat a
    /// category name are merged into the first occurrence.
    pub fn from_categories(buckets: Vec<(String, Vec<Product>)>) -> Self {
        let mut categories: Vec<(String, Vec<Product>)> = Vec::with_capacity(buckets.len());

        for (name, products) in buckets {
            let products = products.into_iter().map(|mut product| {
                if product.category != name {
                    if !product.category.is_empty() {
                        debug!(
                            product = %product.product_name,
                            declared = %product.category,
                            bucket = %name,
                            "product category differs from its bucket, using bucket"
                        );
                    }
                    product.category = name.clone();
                }
                product
            });

            match categories.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, list)) => list.extend(products),
                None => {
                    let list = products.collect();
                    categories.push((name, list));
                }
            }
        }

        Self { categories }
    }

    /// Category names, in source order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|(name, _)| name == category)
    }

    /// Products in a category; empty when the category is unknown
    pub fn products_in(&self, category: &str) -> &[Product] {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, products)| products.as_slice())
            .unwrap_or(&[])
    }

    /// Every product, category by category
    pub fn all_products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|(_, products)| products.iter())
    }

    /// First product whose name matches, ignoring case
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        let needle = name.to_lowercase();
        self.all_products()
            .find(|p| p.product_name.to_lowercase() == needle)
    }

    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|(_, products)| products.len()).sum()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
