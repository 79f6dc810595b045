//! Product selection

pub mod filter;

pub use filter::{select_products, CategorySelection, ProductFilter, ALL_CATEGORIES};
