//! Pagination engine.
//!
//! The paginator never points past the last page: every change to the item
//! count re-clamps the page index, navigation clamps instead of failing, and a
//! page-size change returns to the first page.

use crate::config::DEFAULT_PAGE_SIZE;
use std::ops::Range;
use tracing::{debug, warn};

/// Page navigation state for one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_index: usize,
    page_size: usize,
    total_items: usize,
}

/// The visible slice of a sequence plus the state it was cut with.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Paginator {
    /// Creates a paginator on the first page.
    ///
    /// A zero page size is replaced by the default.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            warn!(default = DEFAULT_PAGE_SIZE, "zero page size, using default");
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self {
            page_index: 0,
            page_size,
            total_items: 0,
        }
    }

    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`; zero for an empty sequence.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// Item positions covered by the current page.
    #[must_use]
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Records a new item count and clamps the page index to it.
    pub fn set_total_items(&mut self, total_items: usize) {
        if total_items == self.total_items {
            return;
        }
        self.total_items = total_items;
        let last = self.last_index();
        if self.page_index > last {
            debug!(from = self.page_index, to = last, total_items, "page index clamped");
            self.page_index = last;
        }
    }

    /// Jumps to page `n`, clamped into `[0, page_count - 1]`.
    pub fn go_to_page(&mut self, n: isize) {
        let last = self.last_index();
        self.page_index = usize::try_from(n).map_or(0, |n| n.min(last));
    }

    /// Advances one page. Returns whether the index moved.
    pub fn next_page(&mut self) -> bool {
        if self.has_next_page() {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page. Returns whether the index moved.
    pub fn previous_page(&mut self) -> bool {
        if self.has_previous_page() {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }

    /// Changes the page size and returns to the first page.
    ///
    /// Zero is rejected as a no-op and reported as `false`.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            warn!("rejected zero page size");
            return false;
        }
        self.page_size = page_size;
        self.page_index = 0;
        true
    }

    /// Syncs with `items.len()` and returns the current page of `items`.
    pub fn paginate<'a, T>(&mut self, items: &'a [T]) -> Page<'a, T> {
        self.set_total_items(items.len());
        Page {
            items: &items[self.page_range()],
            page_index: self.page_index,
            page_count: self.page_count(),
            page_size: self.page_size,
            total_items: self.total_items,
        }
    }

    fn last_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
