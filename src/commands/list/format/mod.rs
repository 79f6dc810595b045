//! Output formatting for list command

mod human;
mod json;
mod records;

pub use human::output_human;
pub use json::{output_json, row_json};
pub use records::output_records;
