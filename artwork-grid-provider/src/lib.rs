//! # artwork-grid-provider
//!
//! Catalog source abstraction for Artwork Grid, with a client for the
//! [Art Institute of Chicago public API](https://api.artic.edu/docs/).
//!
//! A catalog serves records one page at a time together with the total record
//! count. Nothing is cached and nothing is retried: every call is one HTTP
//! request.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls, no system OpenSSL needed.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use artwork_grid_provider::{create_catalog, CatalogSettings, CatalogSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = create_catalog(&CatalogSettings::default())?;
//!
//!     let page = catalog.fetch_page(1).await?;
//!     println!("{} artworks in total", page.total_count);
//!     for artwork in &page.items {
//!         println!("{:>8}  {}", artwork.id, artwork.display_title());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, CatalogError>`](CatalogError). Use
//! [`CatalogError::kind`] to tell transport failures (network, timeout,
//! non-2xx status) from data failures (malformed or unexpected JSON).

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{CatalogError, ErrorKind, Result};

// Re-export factory functions
pub use factory::create_catalog;

// Re-export public trait only (internal traits are not exported)
pub use traits::CatalogSource;

pub use providers::ArticCatalog;

// Re-export types
pub use types::{
    ARTIC_API_BASE, Artwork, CatalogSettings, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    PaginatedResponse, PaginationParams,
};
