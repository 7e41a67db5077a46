//! Paging state for deal carousels.

use std::ops::Range;

/// Which page of a carousel is showing.
///
/// `next` and `prev` wrap around; `go_to` clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    page: usize,
    len: usize,
    per_page: usize,
}

impl CarouselState {
    /// A carousel over `len` items showing `per_page` at a time.
    /// A zero page size is treated as one.
    pub fn new(len: usize, per_page: usize) -> Self {
        Self {
            page: 0,
            len,
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages; at least one, even when empty.
    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.per_page).max(1)
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1) % self.page_count();
    }

    pub fn prev(&mut self) {
        let count = self.page_count();
        self.page = (self.page + count - 1) % count;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Item indices on the current page, clamped to the item count.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.page * self.per_page).min(self.len);
        let end = (start + self.per_page).min(self.len);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = CarouselState::new(10, 4);
        assert_eq!(carousel.page_count(), 3);

        carousel.prev();
        assert_eq!(carousel.page(), 2);
        carousel.next();
        assert_eq!(carousel.page(), 0);
    }

    #[test]
    fn test_last_page_is_partial() {
        let mut carousel = CarouselState::new(10, 4);
        carousel.go_to(2);
        assert_eq!(carousel.visible_range(), 8..10);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut carousel = CarouselState::new(10, 4);
        carousel.go_to(99);
        assert_eq!(carousel.page(), 2);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = CarouselState::new(0, 4);
        assert_eq!(carousel.page_count(), 1);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.page(), 0);
        assert_eq!(carousel.visible_range(), 0..0);
    }

    #[test]
    fn test_zero_page_size() {
        let carousel = CarouselState::new(3, 0);
        assert_eq!(carousel.per_page(), 1);
        assert_eq!(carousel.page_count(), 3);
    }
}
