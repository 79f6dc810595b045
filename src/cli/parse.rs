use catalog_core::query::CategorySelection;

/// Parse a category selection; `all` selects every category
pub fn parse_category(s: &str) -> std::result::Result<CategorySelection, String> {
    if s.trim().is_empty() {
        return Err("category must not be empty (use \"all\" for every category)".to_string());
    }
    Ok(CategorySelection::from(s))
}
