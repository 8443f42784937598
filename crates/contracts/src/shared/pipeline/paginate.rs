use serde::{Deserialize, Serialize};

/// Table page position. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    /// A zero page size is bumped to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.page_size)
    }

    /// Keep `current_page` inside `1..=total_pages(total)`
    pub fn clamp(&mut self, total: usize) {
        let last = self.total_pages(total);
        self.current_page = self.current_page.clamp(1, last);
    }

    pub fn first(&mut self) {
        self.current_page = 1;
    }

    pub fn last(&mut self, total: usize) {
        self.current_page = self.total_pages(total);
    }

    pub fn next(&mut self, total: usize) {
        if self.current_page < self.total_pages(total) {
            self.current_page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn go_to(&mut self, page: usize, total: usize) {
        self.current_page = page;
        self.clamp(total);
    }

    /// 1-based `(first, last)` row numbers shown on the current page, `(0, 0)` when empty
    pub fn range(&self, total: usize) -> (usize, usize) {
        if total == 0 {
            return (0, 0);
        }
        let start = (self.current_page - 1) * self.page_size;
        if start >= total {
            return (0, 0);
        }
        (start + 1, (start + self.page_size).min(total))
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(20)
    }
}

/// `ceil(len / page_size)`, never less than 1
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Rows of 1-indexed `page`, clamped to the available length
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size).min(rows.len());
    let end = start.saturating_add(size).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(45, 20), 3);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let rows: Vec<usize> = (1..=45).collect();
        assert_eq!(paginate(&rows, 3, 20), &[41, 42, 43, 44, 45]);
        assert_eq!(paginate(&rows, 1, 20).len(), 20);
        assert!(paginate(&rows, 4, 20).is_empty());
        assert!(paginate(&Vec::<usize>::new(), 1, 20).is_empty());
    }

    #[test]
    fn test_clamp_after_shrinking() {
        let mut page = PageState::new(20);
        page.go_to(3, 45);
        assert_eq!(page.current_page, 3);

        page.clamp(10);
        assert_eq!(page.current_page, 1);

        page.clamp(0);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_navigation_and_range() {
        let mut page = PageState::new(20);
        assert_eq!(page.range(45), (1, 20));
        page.next(45);
        page.next(45);
        page.next(45);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.range(45), (41, 45));
        page.prev();
        assert_eq!(page.current_page, 2);
        page.last(45);
        assert_eq!(page.current_page, 3);
        page.first();
        assert_eq!(page.range(0), (0, 0));
    }
}
