//! Page arithmetic for the artworks list.
//!
//! Pages are 1-based, matching the `page` query parameter of the catalog.

/// Page size options shown in the "Rows per page" select
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [5, 10, 25];

pub const DEFAULT_ROWS: u32 = 5;

/// Maximum number of numbered page buttons in the pager
pub const VISIBLE_PAGES: u32 = 6;

/// `ceil(total / rows)`, 0 when `rows` is 0
pub fn total_pages(total: u64, rows: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    let pages = total.div_ceil(rows as u64);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Numbered pages to render around `page`.
///
/// The window is centred on the current page and slides back when it would
/// run past the last page.
pub fn page_window(page: u32, total_pages: u32) -> Vec<u32> {
    if total_pages <= VISIBLE_PAGES {
        return (1..=total_pages).collect();
    }

    let mut start = page.saturating_sub(VISIBLE_PAGES / 2).max(1);
    let mut end = start + VISIBLE_PAGES - 1;

    if end > total_pages {
        end = total_pages;
        start = end - VISIBLE_PAGES + 1;
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(129_884, 25), 5196);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_window_shows_all_when_few_pages() {
        assert_eq!(page_window(1, 0), Vec::<u32>::new());
        assert_eq!(page_window(1, 4), vec![1, 2, 3, 4]);
        assert_eq!(page_window(6, 6), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(page_window(1, 100), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(page_window(3, 100), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_window_centred() {
        assert_eq!(page_window(10, 100), vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_window_slides_back_at_end() {
        assert_eq!(page_window(100, 100), vec![95, 96, 97, 98, 99, 100]);
        assert_eq!(page_window(98, 100), vec![95, 96, 97, 98, 99, 100]);
        assert_eq!(page_window(7, 8), vec![3, 4, 5, 6, 7, 8]);
    }
}
