//! CLI commands for catalog

pub mod categories;
pub mod dispatch;
pub mod list;
pub mod show;
pub mod weights;
