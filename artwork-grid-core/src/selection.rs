//! Cross-page selection tracking
//!
//! The selection is a set of catalog identifiers. It does not know which page
//! is loaded; every operation that depends on the visible rows takes the
//! loaded page as an argument.

use std::collections::BTreeSet;

use artwork_grid_provider::Artwork;

use crate::error::{parse_integer, InputError};

/// Identifiers marked selected, independent of pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<u64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Selected identifiers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }

    /// Replace the selection state of the loaded page with `selected_rows`.
    ///
    /// Every identifier on `loaded_page` is removed, then every identifier in
    /// `selected_rows` is added. Identifiers belonging to other pages are
    /// untouched. `selected_rows` is the complete list of rows now selected on
    /// the visible page, not a delta, so applying the same list twice is a
    /// no-op the second time.
    pub fn toggle_current_page_selection(
        &mut self,
        loaded_page: &[Artwork],
        selected_rows: &[Artwork],
    ) {
        for artwork in loaded_page {
            self.ids.remove(&artwork.id);
        }
        self.ids.extend(selected_rows.iter().map(|a| a.id));
    }

    /// Add the first `min(n, loaded_page.len())` identifiers of the loaded page.
    ///
    /// Additive: existing selections are kept. Never reaches beyond the loaded
    /// page. Returns the number of rows covered; `n <= 0` is a no-op.
    pub fn bulk_select_first_n(&mut self, loaded_page: &[Artwork], n: i64) -> usize {
        let Ok(n) = usize::try_from(n) else {
            return 0;
        };
        let limit = n.min(loaded_page.len());
        self.ids
            .extend(loaded_page.iter().take(limit).map(|a| a.id));
        limit
    }

    /// Loaded records whose identifier is selected, in loaded order.
    pub fn selected_on_page<'a>(&self, loaded_page: &'a [Artwork]) -> Vec<&'a Artwork> {
        loaded_page
            .iter()
            .filter(|a| self.ids.contains(&a.id))
            .collect()
    }

    /// Flip one row's checkbox. Returns the row's new state.
    ///
    /// Expressed through [`toggle_current_page_selection`](Self::toggle_current_page_selection)
    /// with the resulting full row list, the same contract a table widget uses.
    /// Identifiers not on the loaded page are ignored.
    pub fn toggle_row(&mut self, loaded_page: &[Artwork], id: u64) -> bool {
        if !loaded_page.iter().any(|a| a.id == id) {
            return self.contains(id);
        }
        let now_selected = !self.contains(id);
        let rows: Vec<Artwork> = loaded_page
            .iter()
            .filter(|a| if a.id == id { now_selected } else { self.contains(a.id) })
            .cloned()
            .collect();
        self.toggle_current_page_selection(loaded_page, &rows);
        now_selected
    }

    pub fn select_all_on_page(&mut self, loaded_page: &[Artwork]) {
        self.toggle_current_page_selection(loaded_page, loaded_page);
    }

    pub fn clear_page(&mut self, loaded_page: &[Artwork]) {
        self.toggle_current_page_selection(loaded_page, &[]);
    }

    /// Whether every loaded row is selected. `false` for an empty page.
    pub fn all_on_page(&self, loaded_page: &[Artwork]) -> bool {
        !loaded_page.is_empty() && loaded_page.iter().all(|a| self.contains(a.id))
    }

    /// Header checkbox: select every loaded row, or clear them all if every
    /// row is already selected. Returns whether the page ends up selected.
    pub fn toggle_all_on_page(&mut self, loaded_page: &[Artwork]) -> bool {
        if self.all_on_page(loaded_page) {
            self.clear_page(loaded_page);
            false
        } else {
            self.select_all_on_page(loaded_page);
            !loaded_page.is_empty()
        }
    }
}

/// Parse the bulk-select count field.
///
/// Must be a positive integer; anything else aborts the bulk selection.
pub fn parse_bulk_count(input: &str) -> Result<i64, InputError> {
    let value = parse_integer(input)?;
    if value <= 0 {
        return Err(InputError::NotPositive(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::artworks;

    #[test]
    fn toggle_replaces_only_current_page() {
        let page_a = artworks(1..=12);
        let page_b = artworks(13..=24);
        let mut sel = SelectionSet::new();

        sel.toggle_current_page_selection(&page_a, &page_a[0..3]);
        sel.toggle_current_page_selection(&page_b, &page_b[5..6]);
        // deselect row 2 of page A by sending the new full list
        sel.toggle_current_page_selection(&page_a, &[page_a[0].clone(), page_a[2].clone()]);

        assert_eq!(sel.iter().collect::<Vec<_>>(), vec![1, 3, 18]);
    }

    #[test]
    fn toggle_is_idempotent() {
        let page = artworks(1..=12);
        let mut sel = SelectionSet::new();
        sel.toggle_current_page_selection(&page, &page[2..7]);
        let once = sel.clone();
        sel.toggle_current_page_selection(&page, &page[2..7]);
        assert_eq!(sel, once);
    }

    #[test]
    fn bulk_select_adds_first_n_and_keeps_others() {
        let page = artworks(101..=112);
        let mut sel = SelectionSet::new();
        sel.toggle_current_page_selection(&artworks(1..=12), &artworks(7..=7));

        let covered = sel.bulk_select_first_n(&page, 5);

        assert_eq!(covered, 5);
        assert_eq!(
            sel.iter().collect::<Vec<_>>(),
            vec![7, 101, 102, 103, 104, 105]
        );
    }

    #[test]
    fn bulk_select_clamps_to_loaded_page() {
        let page = artworks(1..=12);
        let mut sel = SelectionSet::new();
        assert_eq!(sel.bulk_select_first_n(&page, 40), 12);
        assert_eq!(sel.len(), 12);
    }

    #[test]
    fn bulk_select_non_positive_is_noop() {
        let page = artworks(1..=12);
        let mut sel = SelectionSet::new();
        sel.bulk_select_first_n(&page, 2);
        let before = sel.clone();

        assert_eq!(sel.bulk_select_first_n(&page, 0), 0);
        assert_eq!(sel.bulk_select_first_n(&page, -3), 0);
        assert_eq!(sel, before);
    }

    #[test]
    fn selected_on_page_keeps_loaded_order() {
        let page = artworks(1..=5);
        let mut sel = SelectionSet::new();
        sel.toggle_current_page_selection(&page, &[page[4].clone(), page[1].clone()]);
        let ids: Vec<u64> = sel.selected_on_page(&page).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn toggle_row_flips_single_row() {
        let page = artworks(1..=4);
        let mut sel = SelectionSet::new();
        sel.toggle_current_page_selection(&page, &page[0..1]);

        assert!(sel.toggle_row(&page, 3));
        assert!(!sel.toggle_row(&page, 1));
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn toggle_row_ignores_ids_off_page() {
        let page = artworks(1..=4);
        let mut sel = SelectionSet::new();
        assert!(!sel.toggle_row(&page, 99));
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_all_selects_then_clears() {
        let page = artworks(1..=3);
        let mut sel = SelectionSet::new();
        sel.toggle_current_page_selection(&artworks(50..=50), &artworks(50..=50));
        sel.toggle_current_page_selection(&page, &page[0..1]);

        assert!(sel.toggle_all_on_page(&page));
        assert_eq!(sel.len(), 4);
        assert!(!sel.toggle_all_on_page(&page));
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec![50]);
    }

    #[test]
    fn bulk_count_parsing() {
        assert_eq!(parse_bulk_count("5"), Ok(5));
        assert_eq!(parse_bulk_count("0"), Err(InputError::NotPositive(0)));
        assert_eq!(parse_bulk_count("-3"), Err(InputError::NotPositive(-3)));
        assert!(matches!(parse_bulk_count(""), Err(InputError::NotNumeric(_))));
    }
}
