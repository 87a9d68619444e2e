//! JSON catalog files.
//!
//! A catalog file is a JSON array of items:
//!
//! ```json
//! [
//!   { "id": "p1", "title": "Mountain", "tags": ["nature"],
//!     "attributes": { "category": "Nature", "price": 12 } }
//! ]
//! ```

use crate::model::{CatalogError, Item};
use crate::source::Catalog;
use std::path::Path;
use tracing::info;

/// Parse catalog JSON text. `origin` is only used in error messages.
pub fn parse_catalog(json: &str, origin: &Path) -> Result<Catalog, CatalogError> {
    let items: Vec<Item> = serde_json::from_str(json).map_err(|e| CatalogError::Json {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })?;
    Catalog::new(items)
}

/// Load a catalog from a JSON file.
///
/// # Errors
///
/// Returns `CatalogError::Read` if the file cannot be read,
/// `CatalogError::Json` if it is not an item array, and
/// `CatalogError::DuplicateId` if two items share an id.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&contents, path)?;
    info!(path = %path.display(), items = catalog.len(), "Loaded item catalog");
    Ok(catalog)
}
