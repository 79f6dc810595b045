//! Product filtering by free-text query and category

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::product::Product;
use crate::store::CatalogStore;

/// Category value that selects every category
pub const ALL_CATEGORIES: &str = "all";

/// Which categories to draw candidates from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    /// Every category, in store order
    #[default]
    All,
    /// Exactly one category
    Named(String),
}

impl From<&str> for CategorySelection {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Named(value.to_string())
        }
    }
}

impl FromStr for CategorySelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategorySelection::from(s))
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str(ALL_CATEGORIES),
            CategorySelection::Named(name) => f.write_str(name),
        }
    }
}

/// Filter configuration for products
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Lowercased query; empty matches everything
    query: String,
    category: CategorySelection,
}

impl ProductFilter {
    /// Create a new filter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query (case-insensitive substring of name or brand)
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_lowercase();
        self
    }

    /// Set the category selection
    pub fn with_category(mut self, category: CategorySelection) -> Self {
        self.category = category;
        self
    }

    pub fn category(&self) -> &CategorySelection {
        &self.category
    }

    /// Check the text predicate against a product.
    ///
    /// Category is not checked here; it is decided by candidate selection.
    pub fn matches(&self, product: &Product) -> bool {
        self.query.is_empty()
            || product.product_name.to_lowercase().contains(&self.query)
            || product.brand.to_lowercase().contains(&self.query)
    }

    /// Select matching products, preserving candidate order.
    pub fn select<'a>(&self, store: &'a CatalogStore) -> Vec<&'a Product> {
        let selected: Vec<&Product> = match &self.category {
            CategorySelection::All => store.all_products().filter(|p| self.matches(p)).collect(),
            CategorySelection::Named(name) => {
                if !store.has_category(name) {
                    warn!(category = %name, "unknown category, no products selected");
                }
                store
                    .products_in(name)
                    .iter()
                    .filter(|p| self.matches(p))
                    .collect()
            }
        };

        debug!(
            query = %self.query,
            category = %self.category,
            selected = selected.len(),
            "select_products"
        );
        selected
    }
}

/// Products matching `query` within `category` (`"all"` for every category).
pub fn select_products<'a>(
    store: &'a CatalogStore,
    query: &str,
    category: &str,
) -> Vec<&'a Product> {
    ProductFilter::new()
        .with_query(query)
        .with_category(CategorySelection::from(category))
        .select(store)
}
