//! Artwork Grid Core Library
//!
//! Platform-independent state for a paginated, multi-select catalog grid:
//! - Selection tracking across pages
//! - Pagination window math
//! - A page controller that guards fetches with request sequence numbers
//!
//! Catalog access goes through the [`CatalogSource`](artwork_grid_provider::CatalogSource)
//! trait, so any front end (terminal, web) can drive the same controller.

pub mod controller;
pub mod error;
pub mod pagination;
pub mod selection;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use controller::{
    fetch_ticket, BulkSelectPanel, FetchDisposition, FetchOutcome, FetchResult, FetchTicket,
    LoadState, PageController, PageState,
};
pub use error::{CoreError, CoreResult, InputError};
pub use pagination::ShowingRange;
pub use selection::SelectionSet;
