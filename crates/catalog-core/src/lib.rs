//! Catalog Core Library
//!
//! Core domain logic for the catalog browser: critic score normalization and
//! weighted aggregation, product filtering, and the in-memory catalog store.

pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod logging;
pub mod product;
pub mod query;
pub mod review;
pub mod score;
pub mod store;
pub mod weights;
