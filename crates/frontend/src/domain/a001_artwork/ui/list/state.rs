use super::paging::{total_pages, DEFAULT_ROWS};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ArtworkListState {
    // pagination (1-based page)
    pub page: u32,
    pub rows: u32,
    pub total_records: u64,
    pub total_pages: u32,

    // load flag
    pub is_loaded: bool,
}

impl Default for ArtworkListState {
    fn default() -> Self {
        Self {
            page: 1,
            rows: DEFAULT_ROWS,
            total_records: 0,
            total_pages: 0,
            is_loaded: false,
        }
    }
}

impl ArtworkListState {
    /// Jump to `page`, clamped to the known page range.
    ///
    /// Before the first response the page count is unknown (0) and only
    /// page 1 is reachable.
    pub fn go_to(&mut self, page: u32) {
        self.page = page.clamp(1, self.total_pages.max(1));
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self) {
        if self.page < self.total_pages {
            self.page += 1;
        }
    }

    pub fn last(&mut self) {
        self.page = self.total_pages.max(1);
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Change page size; always restarts from page 1.
    pub fn set_rows(&mut self, rows: u32) {
        self.rows = rows.max(1);
        self.page = 1;
        self.total_pages = total_pages(self.total_records, self.rows);
    }

    /// Store the total from the latest list response.
    pub fn apply_response(&mut self, total: u64) {
        self.total_records = total;
        self.total_pages = total_pages(total, self.rows);
        self.is_loaded = true;
    }
}

pub fn create_state() -> RwSignal<ArtworkListState> {
    RwSignal::new(ArtworkListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(total: u64, rows: u32) -> ArtworkListState {
        let mut st = ArtworkListState::default();
        st.set_rows(rows);
        st.apply_response(total);
        st
    }

    #[test]
    fn test_defaults() {
        let st = ArtworkListState::default();
        assert_eq!(st.page, 1);
        assert_eq!(st.rows, 5);
        assert!(st.is_first());
        // nothing loaded yet: next/last are disabled
        assert!(st.is_last());
    }

    #[test]
    fn test_navigation_stays_in_range() {
        let mut st = loaded(23, 5);
        assert_eq!(st.total_pages, 5);

        st.prev();
        assert_eq!(st.page, 1);

        st.next();
        st.next();
        assert_eq!(st.page, 3);

        st.last();
        assert_eq!(st.page, 5);
        assert!(st.is_last());

        st.next();
        assert_eq!(st.page, 5);

        st.first();
        assert_eq!(st.page, 1);
        assert!(st.is_first());
    }

    #[test]
    fn test_go_to_clamps() {
        let mut st = loaded(50, 10);
        st.go_to(4);
        assert_eq!(st.page, 4);
        st.go_to(99);
        assert_eq!(st.page, 5);
        st.go_to(0);
        assert_eq!(st.page, 1);
    }

    #[test]
    fn test_go_to_before_first_load() {
        let mut st = ArtworkListState::default();
        st.go_to(3);
        assert_eq!(st.page, 1);
    }

    #[test]
    fn test_set_rows_resets_page() {
        let mut st = loaded(100, 5);
        st.go_to(7);
        st.set_rows(25);
        assert_eq!(st.page, 1);
        assert_eq!(st.rows, 25);
        assert_eq!(st.total_pages, 4);
    }

    #[test]
    fn test_apply_response_marks_loaded() {
        let mut st = ArtworkListState::default();
        st.apply_response(12);
        assert!(st.is_loaded);
        assert_eq!(st.total_records, 12);
        assert_eq!(st.total_pages, 3);
    }
}
