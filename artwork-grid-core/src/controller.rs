//! Page controller
//!
//! Owns the loaded page, the selection set and the two input fields, and turns
//! user intent into fetch tickets. The controller never performs I/O on its
//! own; a front end takes the returned [`FetchTicket`], runs
//! [`fetch_ticket`] wherever it likes and hands the result back through
//! [`PageController::apply_fetch`].
//!
//! Every navigation issues a ticket with a strictly increasing sequence
//! number. Only the result of the most recently issued ticket is applied, so
//! responses that arrive out of order cannot overwrite a newer page.

use artwork_grid_provider::{Artwork, CatalogError, CatalogSource, PaginatedResponse};

use crate::error::{CoreError, InputError};
use crate::pagination::{self, ShowingRange};
use crate::selection::{parse_bulk_count, SelectionSet};

/// Longest accepted content of a numeric input field.
const MAX_INPUT_LEN: usize = 12;

/// Identifies one issued page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page: u32,
}

/// What a catalog fetch produced.
pub type FetchOutcome = Result<PaginatedResponse<Artwork>, CatalogError>;

/// A finished fetch, ready for [`PageController::apply_fetch`].
#[derive(Debug)]
pub struct FetchResult {
    pub ticket: FetchTicket,
    pub outcome: FetchOutcome,
}

/// Run the request described by `ticket` against `source`.
pub async fn fetch_ticket(source: &dyn CatalogSource, ticket: FetchTicket) -> FetchResult {
    let outcome = source.fetch_page(ticket.page).await;
    FetchResult { ticket, outcome }
}

/// How [`PageController::apply_fetch`] handled a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDisposition {
    /// The page was loaded.
    Applied,
    /// The fetch failed; previous records and selection are kept.
    Failed,
    /// A newer ticket was issued after this one; the result was dropped.
    Stale,
    /// The new total puts the requested page out of range. The loaded page is
    /// left as it was; the controller moved to the last page and issued this
    /// ticket for it.
    Reclamped(FetchTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
}

/// Records currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// At most one page of records, in catalog order.
    pub records: Vec<Artwork>,
    /// Page the records belong to. `0` before the first successful fetch.
    pub loaded_page: u32,
    /// Catalog total, `None` until the first successful fetch.
    pub total: Option<u64>,
}

/// The "select first N rows" panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSelectPanel {
    pub open: bool,
    pub input: String,
}

pub struct PageController {
    page_size: u32,
    current_page: u32,
    page: PageState,
    selection: SelectionSet,
    load_state: LoadState,
    page_input: String,
    bulk: BulkSelectPanel,
    latest_seq: u64,
    last_error: Option<CoreError>,
}

impl PageController {
    /// Create a controller positioned on page 1 with nothing loaded.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            page: PageState::default(),
            selection: SelectionSet::new(),
            load_state: LoadState::Idle,
            page_input: "1".to_string(),
            bulk: BulkSelectPanel::default(),
            latest_seq: 0,
            last_error: None,
        }
    }

    /// Create a controller using the page size `source` serves.
    #[must_use]
    pub fn for_source(source: &dyn CatalogSource) -> Self {
        Self::new(source.page_size())
    }

    // ===== Navigation =====

    /// Navigate to `page`.
    ///
    /// Once the total is known the target is clamped into range. Returns
    /// `None` when the target is already the current page.
    pub fn go_to(&mut self, page: u32) -> Option<FetchTicket> {
        let target = match self.page.total {
            Some(_) => pagination::clamp_page(i64::from(page), self.total_pages()),
            None => page.max(1),
        };
        if target == self.current_page {
            self.reset_page_input();
            return None;
        }
        Some(self.issue(target))
    }

    pub fn previous(&mut self) -> Option<FetchTicket> {
        if !self.can_go_previous() {
            return None;
        }
        self.go_to(self.current_page - 1)
    }

    pub fn next(&mut self) -> Option<FetchTicket> {
        if !self.can_go_next() {
            return None;
        }
        self.go_to(self.current_page + 1)
    }

    /// Jump to the `index`-th (0-based) button of the pagination window.
    pub fn go_to_window_slot(&mut self, index: usize) -> Option<FetchTicket> {
        let page = self.window().get(index).copied()?;
        self.go_to(page)
    }

    /// Re-request the current page regardless of what is loaded.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue(self.current_page)
    }

    /// Apply the page-jump field (Enter or blur).
    ///
    /// Integers are clamped into range. Anything else is ignored and the
    /// field snaps back to the current page.
    pub fn commit_page_input(&mut self) -> Option<FetchTicket> {
        match pagination::parse_page_input(&self.page_input, self.total_pages()) {
            Ok(page) => self.go_to(page),
            Err(e) => {
                log::debug!("Ignoring page input: {e}");
                self.reset_page_input();
                None
            }
        }
    }

    pub fn page_input_push(&mut self, c: char) {
        push_numeric(&mut self.page_input, c);
    }

    pub fn page_input_pop(&mut self) {
        self.page_input.pop();
    }

    pub fn page_input_clear(&mut self) {
        self.page_input.clear();
    }

    pub fn can_go_previous(&self) -> bool {
        self.page.total.is_some() && self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page.total.is_some() && self.current_page < self.total_pages()
    }

    fn issue(&mut self, page: u32) -> FetchTicket {
        self.latest_seq += 1;
        self.current_page = page;
        self.load_state = LoadState::Loading;
        self.reset_page_input();
        let ticket = FetchTicket {
            seq: self.latest_seq,
            page,
        };
        log::debug!("Issued fetch #{} for page {page}", ticket.seq);
        ticket
    }

    fn reset_page_input(&mut self) {
        self.page_input = self.current_page.to_string();
    }

    // ===== Fetch resolution =====

    /// Apply a finished fetch.
    ///
    /// Results for any ticket other than the latest one are discarded without
    /// touching state.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, outcome: FetchOutcome) -> FetchDisposition {
        if ticket.seq != self.latest_seq {
            log::debug!(
                "Discarding stale fetch #{} for page {} (latest #{})",
                ticket.seq,
                ticket.page,
                self.latest_seq
            );
            return FetchDisposition::Stale;
        }

        self.load_state = LoadState::Idle;

        match outcome {
            Ok(response) => {
                let last_page =
                    pagination::total_pages(response.total_count, self.page_size).max(1);
                if ticket.page > last_page {
                    // Rows on screen stay as they were until the last page arrives.
                    log::warn!(
                        "Page {} is past the end ({} records), moving to page {last_page}",
                        ticket.page,
                        response.total_count
                    );
                    return FetchDisposition::Reclamped(self.issue(last_page));
                }

                log::info!(
                    "Loaded page {} ({} records, {} total)",
                    ticket.page,
                    response.items.len(),
                    response.total_count
                );
                self.page = PageState {
                    records: response.items,
                    loaded_page: ticket.page,
                    total: Some(response.total_count),
                };
                self.current_page = ticket.page;
                self.last_error = None;
                self.reset_page_input();
                FetchDisposition::Applied
            }
            Err(e) => {
                let err = CoreError::from(e);
                if err.is_expected() {
                    log::warn!("Failed to load page {}: {err}", ticket.page);
                } else {
                    log::error!("Failed to load page {}: {err}", ticket.page);
                }
                self.last_error = Some(err);
                FetchDisposition::Failed
            }
        }
    }

    /// Navigate to `page` and fetch it from `source`, following any
    /// reclamp to the last page.
    ///
    /// Returns `None` when `page` is already current.
    pub async fn load(
        &mut self,
        source: &dyn CatalogSource,
        page: u32,
    ) -> Option<FetchDisposition> {
        let mut ticket = self.go_to(page)?;
        loop {
            let result = fetch_ticket(source, ticket).await;
            match self.apply_fetch(result.ticket, result.outcome) {
                FetchDisposition::Reclamped(next) => ticket = next,
                other => return Some(other),
            }
        }
    }

    // ===== Selection =====

    /// The table reported its complete list of selected rows for the
    /// visible page.
    pub fn on_selection_change(&mut self, selected_rows: &[Artwork]) {
        self.selection
            .toggle_current_page_selection(&self.page.records, selected_rows);
    }

    pub fn toggle_row(&mut self, id: u64) -> bool {
        self.selection.toggle_row(&self.page.records, id)
    }

    pub fn toggle_all_on_page(&mut self) -> bool {
        self.selection.toggle_all_on_page(&self.page.records)
    }

    // ===== Bulk select panel =====

    pub fn open_bulk_panel(&mut self) {
        self.bulk.open = true;
    }

    pub fn close_bulk_panel(&mut self) {
        self.bulk.open = false;
    }

    pub fn toggle_bulk_panel(&mut self) {
        self.bulk.open = !self.bulk.open;
    }

    pub fn bulk_input_push(&mut self, c: char) {
        push_numeric(&mut self.bulk.input, c);
    }

    pub fn bulk_input_pop(&mut self) {
        self.bulk.input.pop();
    }

    /// Select the first N loaded rows, N taken from the panel input.
    ///
    /// The panel closes and its input is cleared whatever the outcome. Invalid
    /// input selects nothing. Returns the number of rows covered.
    pub fn apply_bulk_select(&mut self) -> Result<usize, InputError> {
        let input = std::mem::take(&mut self.bulk.input);
        self.bulk.open = false;

        let n = parse_bulk_count(&input).inspect_err(|e| {
            log::debug!("Bulk select aborted: {e}");
        })?;
        let covered = self.selection.bulk_select_first_n(&self.page.records, n);
        log::info!("Bulk selected first {covered} rows of page {}", self.page.loaded_page);
        Ok(covered)
    }

    /// Close the panel without selecting. The typed count is kept.
    pub fn cancel_bulk_select(&mut self) {
        self.bulk.open = false;
    }

    // ===== Accessors =====

    pub fn records(&self) -> &[Artwork] {
        &self.page.records
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Total page count, `0` while the total is unknown.
    pub fn total_pages(&self) -> u32 {
        self.page
            .total
            .map_or(0, |total| pagination::total_pages(total, self.page_size))
    }

    pub fn window(&self) -> Vec<u32> {
        pagination::page_window(self.current_page, self.total_pages())
    }

    /// Range summary for the loaded records, `None` before the first load.
    pub fn showing(&self) -> Option<ShowingRange> {
        self.page
            .total
            .map(|total| ShowingRange::new(self.page.loaded_page, self.page_size, total))
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(id)
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn page_input(&self) -> &str {
        &self.page_input
    }

    pub fn bulk_panel(&self) -> &BulkSelectPanel {
        &self.bulk
    }

    pub fn last_error(&self) -> Option<&CoreError> {
        self.last_error.as_ref()
    }
}

/// Accept digits, and a leading minus sign, into a numeric field.
fn push_numeric(buf: &mut String, c: char) {
    let accepted = c.is_ascii_digit() || (c == '-' && buf.is_empty());
    if accepted && buf.len() < MAX_INPUT_LEN {
        buf.push(c);
    }
}
