//! Catalog factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::ArticCatalog;
use crate::traits::CatalogSource;
use crate::types::CatalogSettings;

/// Creates a [`CatalogSource`] from connection settings.
///
/// The returned source is wrapped in `Arc<dyn CatalogSource>` so it can be
/// shared with spawned fetch tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use artwork_grid_provider::{create_catalog, CatalogSettings};
///
/// let catalog = create_catalog(&CatalogSettings::default()).unwrap();
/// assert_eq!(catalog.page_size(), 12);
/// ```
pub fn create_catalog(settings: &CatalogSettings) -> Result<Arc<dyn CatalogSource>> {
    Ok(Arc::new(ArticCatalog::new(settings)?))
}
