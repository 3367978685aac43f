use carte_engine::Catalog;
use carte_types::EntryId;

/// Focusable regions of the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFocus {
    #[default]
    List,
    Back,
}

impl CatalogFocus {
    pub fn toggle(self) -> Self {
        match self {
            CatalogFocus::List => CatalogFocus::Back,
            CatalogFocus::Back => CatalogFocus::List,
        }
    }
}

/// Selection and scroll position over the catalog's entries.
///
/// Positions index the catalog's insertion order and are clamped whenever
/// the catalog shrinks.
#[derive(Debug, Default, Clone)]
pub struct CatalogState {
    pub focus: CatalogFocus,
    selected: usize,
    /// Index of the first card drawn
    offset: usize,
}

impl CatalogState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn selected_id(&self, catalog: &Catalog) -> Option<EntryId> {
        catalog.get_index(self.selected).map(|entry| entry.id)
    }

    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index;
        self.clamp(len);
    }

    pub fn select_next(&mut self, len: usize) {
        self.select(self.selected.saturating_add(1), len);
    }

    pub fn select_prev(&mut self, len: usize) {
        self.select(self.selected.saturating_sub(1), len);
    }

    pub fn select_last(&mut self, len: usize) {
        self.select(len.saturating_sub(1), len);
    }

    /// Keep the selection inside `0..len`.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.offset = self.offset.min(self.selected);
    }

    /// Move `offset` so the selected card fits in `available` rows, given
    /// the height of every card.
    pub fn scroll_into_view(&mut self, heights: &[u16], available: u16) {
        if heights.is_empty() {
            self.offset = 0;
            return;
        }
        self.clamp(heights.len());
        if self.selected < self.offset {
            self.offset = self.selected;
            return;
        }
        let selected = self.selected;
        let rows_through_selected = |offset: usize| -> u32 { heights[offset..=selected].iter().map(|h| u32::from(*h)).sum() };
        while self.offset < selected && rows_through_selected(self.offset) > u32::from(available) {
            self.offset += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_clamped_to_the_catalog() {
        let mut state = CatalogState::default();
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected(), 2);

        state.clamp(1);
        assert_eq!(state.selected(), 0);

        state.select_prev(0);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn scrolling_keeps_the_selected_card_visible() {
        let mut state = CatalogState::default();
        let heights = [5, 5, 5, 5];

        state.select_last(heights.len());
        state.scroll_into_view(&heights, 12);
        assert_eq!(state.offset(), 2);

        state.select(0, heights.len());
        state.scroll_into_view(&heights, 12);
        assert_eq!(state.offset(), 0);
    }
}
