//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use artwork_grid_provider::{CatalogError, ErrorKind};

/// Rejected free-text input (page jump field, bulk-select count).
///
/// Input errors never reach the user: page input is clamped or ignored, bulk
/// selection silently aborts.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum InputError {
    /// Input is empty or not an integer
    #[error("Not a number: '{0}'")]
    NotNumeric(String),

    /// Input is an integer but not `>= 1`
    #[error("Not a positive number: {0}")]
    NotPositive(i64),
}

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Catalog error (transport or data), converted from the provider library
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
}

impl CoreError {
    /// Whether it is expected behavior (network hiccups, user input), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Catalog(e) => e.is_expected(),
            Self::Input(_) => true,
        }
    }

    /// Failure class for catalog errors, `None` for input errors.
    pub fn catalog_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Catalog(e) => Some(e.kind()),
            Self::Input(_) => None,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Parse a free-text integer the way a numeric input field does.
///
/// Surrounding whitespace is ignored. Integers too large for `i64` saturate
/// rather than fail, so `"99999999999999999999"` still clamps to the last page.
pub(crate) fn parse_integer(input: &str) -> Result<i64, InputError> {
    use std::num::IntErrorKind;

    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(InputError::NotNumeric(trimmed.to_string())),
        },
    }
}
