//! Catalog source implementations

/// Shared utilities used by catalog implementations.
pub mod common;

mod artic;

pub use artic::ArticCatalog;
