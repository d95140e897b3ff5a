//! Loading the category catalog from a JSON file.
//!
//! ```json
//! { "categories": [ { "name": "fruits", "items": ["/assets/fruits/1.jpg", "..."] } ] }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{CatalogError, Category, CategoryCatalog};

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    items: Vec<String>,
}

/// Parse and validate a catalog from its JSON text.
pub fn parse_catalog(json: &str, max_rounds: usize) -> Result<CategoryCatalog, CatalogLoadError> {
    let file: CatalogFile = serde_json::from_str(json)?;
    let categories = file
        .categories
        .into_iter()
        .map(|entry| Category::new(entry.name, entry.items))
        .collect();
    Ok(CategoryCatalog::new(categories, max_rounds)?)
}

pub async fn load_catalog(
    path: impl AsRef<Path>,
    max_rounds: usize,
) -> Result<CategoryCatalog, CatalogLoadError> {
    let json = tokio::fs::read_to_string(path).await?;
    parse_catalog(&json, max_rounds)
}
