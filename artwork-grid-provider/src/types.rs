use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Pagination parameters for page fetches.
///
/// Pages are 1-indexed.
///
/// # Default
///
/// The default is `page = 1, page_size = 12`, which matches the Art Institute
/// of Chicago API's own default `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size.max(1)),
        }
    }
}

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Largest page size the Art Institute of Chicago API serves.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A paginated response wrapper.
///
/// Contains the current page of items along with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page, in catalog order.
    pub items: Vec<T>,
    /// Page number this response answers.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u64,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, automatically computing [`has_more`](Self::has_more).
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u64) -> Self {
        let has_more = u64::from(page) * u64::from(page_size) < total_count;
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

// ============ Catalog Records ============

/// One catalog entry.
///
/// `id` is unique across the whole catalog, not only within a page. Every
/// descriptive field may be absent; the upstream API returns `null` for
/// unknown values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Catalog-wide identifier.
    pub id: u64,
    /// Title of the work.
    #[serde(default)]
    pub title: Option<String>,
    /// Place the work originates from.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist attribution, as displayed by the museum.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscription text.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Start year (negative for BCE).
    #[serde(default)]
    pub date_start: Option<i32>,
    /// End year (negative for BCE).
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Create a record with only an identifier and a title.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Title for display, falling back to `"Untitled"`.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}

// ============ Catalog Settings ============

/// Base URL of the Art Institute of Chicago public API.
pub const ARTIC_API_BASE: &str = "https://api.artic.edu/api/v1";

/// Connection settings for a catalog source.
///
/// # Default
///
/// Art Institute of Chicago API, 12 records per page, 10s connect timeout,
/// 30s request timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSettings {
    /// API base URL, without the `/artworks` path.
    pub base_url: String,
    /// Records requested per page.
    pub page_size: u32,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: ARTIC_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}
