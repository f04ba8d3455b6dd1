//! Pagination math
//!
//! Pure functions over `(current page, total pages)`. Pages are 1-indexed
//! everywhere; `total_pages == 0` means the total is unknown or the catalog is
//! empty.

use serde::Serialize;

use crate::error::{parse_integer, InputError};

/// Number of page buttons shown on each side of the current page.
pub const WINDOW_RADIUS: u32 = 2;

/// `ceil(total / page_size)`, saturating at `u32::MAX`.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

/// Page buttons to display around `current`.
///
/// Yields `max(1, current - 2) ..= min(total_pages, current + 2)`. Near either
/// end the window is simply shorter; it is never shifted to keep five buttons.
/// Empty when `total_pages == 0`.
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let first = current.saturating_sub(WINDOW_RADIUS).max(1);
    let last = current.saturating_add(WINDOW_RADIUS).min(total_pages);
    (first..=last).collect()
}

/// Clamp an arbitrary integer into `[1, max(total_pages, 1)]`.
pub fn clamp_page(value: i64, total_pages: u32) -> u32 {
    let upper = i64::from(total_pages.max(1));
    // 上界不超过 u32::MAX，转换不会失败
    u32::try_from(value.clamp(1, upper)).unwrap_or(1)
}

/// Parse the page-jump field.
///
/// Any integer is accepted and clamped (`"999"` with 50 pages is 50, `"0"` is
/// 1). Non-numeric text is rejected and the caller keeps the current page.
pub fn parse_page_input(input: &str, total_pages: u32) -> Result<u32, InputError> {
    parse_integer(input).map(|value| clamp_page(value, total_pages))
}

/// The "Showing `first` to `last` of `total`" summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowingRange {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}

impl ShowingRange {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        let page = u64::from(page.max(1));
        let size = u64::from(page_size);
        let last = (size * page).min(total);
        if last == 0 {
            return Self {
                first: 0,
                last: 0,
                total,
            };
        }
        Self {
            first: (size * (page - 1) + 1).min(last),
            last,
            total,
        }
    }
}

impl std::fmt::Display for ShowingRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {} to {} of {}", self.first, self.last, self.total)
    }
}
