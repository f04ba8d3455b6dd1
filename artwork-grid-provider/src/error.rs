use serde::{Deserialize, Serialize};

/// Broad failure class of a [`CatalogError`].
///
/// Front ends only need to know whether the remote side was unreachable or
/// answered with something unusable; both leave the previously loaded page in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The request never produced a usable HTTP response (network, timeout, non-2xx).
    Transport,
    /// The response arrived but its body did not have the expected shape.
    Data,
    /// The source itself is misconfigured.
    Config,
}

/// Unified error type for all catalog source operations.
///
/// Each variant includes a `source_id` field identifying which catalog produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// No variant is retried automatically. A failed page fetch is retried only by
/// a later user-triggered navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum CatalogError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Catalog that produced the error.
        source_id: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Catalog that produced the error.
        source_id: String,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-2xx status code.
    HttpStatus {
        /// Catalog that produced the error.
        source_id: String,
        /// HTTP status code.
        status: u16,
        /// Response body (truncated), if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the catalog's response, or a required field was missing.
    ParseError {
        /// Catalog that produced the error.
        source_id: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The catalog client could not be constructed (bad base URL, TLS backend failure).
    InvalidConfig {
        /// Catalog that produced the error.
        source_id: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl CatalogError {
    /// Classifies the error as transport, data or configuration failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::HttpStatus { .. } => {
                ErrorKind::Transport
            }
            Self::ParseError { .. } => ErrorKind::Data,
            Self::InvalidConfig { .. } => ErrorKind::Config,
        }
    }

    /// Whether this is an anticipated runtime condition, used for log levels.
    ///
    /// Returns `true` when `warn` is appropriate, `false` for `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::HttpStatus { .. }
        )
    }

    /// Identifier of the catalog that produced the error.
    pub fn source_id(&self) -> &str {
        match self {
            Self::NetworkError { source_id, .. }
            | Self::Timeout { source_id, .. }
            | Self::HttpStatus { source_id, .. }
            | Self::ParseError { source_id, .. }
            | Self::InvalidConfig { source_id, .. } => source_id,
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { source_id, detail } => {
                write!(f, "[{source_id}] Network error: {detail}")
            }
            Self::Timeout { source_id, detail } => {
                write!(f, "[{source_id}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                source_id, status, ..
            } => {
                write!(f, "[{source_id}] HTTP {status}")
            }
            Self::ParseError { source_id, detail } => {
                write!(f, "[{source_id}] Parse error: {detail}")
            }
            Self::InvalidConfig { source_id, detail } => {
                write!(f, "[{source_id}] Invalid configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Convenience type alias for `Result<T, CatalogError>`.
pub type Result<T> = std::result::Result<T, CatalogError>;
