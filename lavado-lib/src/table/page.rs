//! Pagination over the filtered and sorted rows.

use std::ops::Range;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page index and size.
///
/// An index past the last page is valid and selects an empty page. The page
/// size is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Creates pagination on the first page. Returns `None` for a zero size.
    pub fn new(page_size: usize) -> Option<Self> {
        (page_size > 0).then_some(Self {
            page_index: 0,
            page_size,
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to a page. Any index is accepted.
    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Change the page size. Zero is rejected and leaves the state untouched.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if size == 0 {
            return false;
        }
        self.page_size = size;
        true
    }

    /// Index range of the current page within `total` rows, clipped to bounds.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    /// Number of pages needed for `total` rows (zero when there are none).
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    pub fn has_next_page(&self, total: usize) -> bool {
        self.page_index.saturating_add(1) < self.page_count(total)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }
}

/// Slice the current page out of `items`.
pub fn page_slice<'a, T>(items: &'a [T], pagination: &Pagination) -> &'a [T] {
    &items[pagination.range(items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert!(Pagination::new(0).is_none());
        let mut p = Pagination::default();
        assert!(!p.set_page_size(0));
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_range_clipped() {
        let mut p = Pagination::new(3).unwrap();
        assert_eq!(p.range(7), 0..3);
        p.set_page_index(2);
        assert_eq!(p.range(7), 6..7);
        p.set_page_index(9);
        assert_eq!(p.range(7), 7..7);
        p.set_page_index(usize::MAX);
        assert_eq!(p.range(7), 7..7);
    }

    #[test]
    fn test_page_count_and_navigation() {
        let mut p = Pagination::new(1).unwrap();
        p.set_page_index(5);
        assert_eq!(p.page_count(2), 2);
        assert!(!p.has_next_page(2));
        assert!(p.range(2).is_empty());
        assert_eq!(p.page_count(0), 0);

        let mut p = Pagination::new(10).unwrap();
        assert_eq!(p.page_count(25), 3);
        assert!(p.has_next_page(25));
        assert!(!p.has_previous_page());
        p.set_page_index(2);
        assert!(!p.has_next_page(25));
        assert!(p.has_previous_page());
    }

    #[test]
    fn test_pages_reconstruct_sequence() {
        let items: Vec<u32> = (0..23).collect();
        for size in 1..=25 {
            let mut p = Pagination::new(size).unwrap();
            let mut rebuilt = Vec::new();
            for index in 0..p.page_count(items.len()) {
                p.set_page_index(index);
                let page = page_slice(&items, &p);
                assert!(page.len() <= size);
                rebuilt.extend_from_slice(page);
            }
            assert_eq!(rebuilt, items);
        }
    }
}
