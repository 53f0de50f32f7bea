//! Client-side pagination over an already-fetched, ordered list.

use std::{num::NonZeroUsize, ops::Range, sync::Arc};

use serde::Serialize;

/// Pagination state over one full list.
///
/// `total_pages` is `ceil(total_records / page_size)` and `current_page`
/// stays within `1..=max(total_pages, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current_page: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub total_pages: usize,
}

impl PageWindow {
    pub fn new(page_size: NonZeroUsize, total_records: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.get(),
            total_records,
            total_pages: total_records.div_ceil(page_size.get()),
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Index range of the visible slice. Empty when there are no records.
    pub fn bounds(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_records);
        let end = (self.current_page * self.page_size).min(self.total_records);
        start..end
    }

    /// 1-based inclusive `(start, end)` for display; `(0, 0)` when empty.
    pub fn record_range(&self) -> (usize, usize) {
        if self.total_records == 0 {
            return (0, 0);
        }
        let bounds = self.bounds();
        (bounds.start + 1, bounds.end)
    }

    fn advance(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    fn retreat(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Arc<[T]>,
    page_size: NonZeroUsize,
    window: PageWindow,
}

impl<T> Paginator<T> {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            items: Arc::from(Vec::new()),
            page_size,
            window: PageWindow::new(page_size, 0),
        }
    }

    /// Replaces the list and resets to page 1.
    pub fn set_data(&mut self, items: Arc<[T]>) -> PageWindow {
        self.window = PageWindow::new(self.page_size, items.len());
        self.items = items;
        self.window
    }

    pub fn current_window(&self) -> &[T] {
        &self.items[self.window.bounds()]
    }

    /// Moves forward one page; a no-op on the last page.
    pub fn next(&mut self) -> PageWindow {
        if self.window.advance() {
            tracing::debug!(page = self.window.current_page, "advanced page");
        }
        self.window
    }

    /// Moves back one page; a no-op on the first page.
    pub fn previous(&mut self) -> PageWindow {
        if self.window.retreat() {
            tracing::debug!(page = self.window.current_page, "moved back a page");
        }
        self.window
    }

    /// Steps toward `page`, stopping at the first or last page.
    pub fn go_to(&mut self, page: usize) -> PageWindow {
        while self.window.current_page < page && self.window.advance() {}
        while self.window.current_page > page.max(1) && self.window.retreat() {}
        self.window
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn current_page(&self) -> usize {
        self.window.current_page
    }

    pub fn page_size(&self) -> usize {
        self.window.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.window.total_pages
    }

    pub fn total_records(&self) -> usize {
        self.window.total_records
    }

    pub fn is_first_page(&self) -> bool {
        self.window.is_first_page()
    }

    pub fn is_last_page(&self) -> bool {
        self.window.is_last_page()
    }

    pub fn record_range_label(&self) -> (usize, usize) {
        self.window.record_range()
    }

    pub fn show_pagination(&self) -> bool {
        self.window.total_pages > 1
    }

    pub fn has_data(&self) -> bool {
        !self.current_window().is_empty()
    }

    pub fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            self.window.current_page, self.window.total_pages
        )
    }
}

#[cfg(test)]
#[path = "tests/paginator_tests.rs"]
mod tests;
