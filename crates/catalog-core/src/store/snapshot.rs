use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::CatalogStore;
use crate::product::Product;
use crate::score;
use crate::weights::WeightTable;

/// One loaded catalog and the weight table used to score it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub store: CatalogStore,
    /// `None` when no weight data was available
    pub weights: Option<WeightTable>,
}

impl Catalog {
    pub fn new(store: CatalogStore, weights: Option<WeightTable>) -> Self {
        Self { store, weights }
    }

    /// Aggregate critic score for a product, on a 0-100 scale
    pub fn critic_score(&self, product: &Product) -> Option<f64> {
        score::aggregate(&product.critic_reviews, self.weights.as_ref())
    }
}

/// Shared, swappable reference to the current [`Catalog`].
///
/// Readers take an `Arc` snapshot and keep using it even if a reload
/// replaces the catalog meanwhile; the catalog itself is never mutated.
#[derive(Debug, Default)]
pub struct CatalogHandle {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The catalog as of now
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a new catalog, returning the previous one
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        debug!(
            products = catalog.store.product_count(),
            categories = catalog.store.category_count(),
            "replacing catalog snapshot"
        );
        std::mem::replace(&mut *self.current.write(), Arc::new(catalog))
    }
}
