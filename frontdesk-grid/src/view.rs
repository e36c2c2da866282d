//! The list-screen pipeline: filter → sort → paginate.

use crate::config::GridConfig;
use crate::filter::SearchFilter;
use crate::pagination::Paginator;
use crate::sort::{sort_indices, SortIcon, SortState};
use frontdesk_model::{FieldPath, FieldSource};
use tracing::{debug, warn};

/// One rendered page of a [`GridView`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridPage<'a, T> {
    pub rows: Vec<&'a T>,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// Rows left after filtering, across all pages.
    pub total_items: usize,
}

/// Grid state behind one list screen.
///
/// Every mutation recomputes the visible order and re-clamps the paginator,
/// so [`GridView::page`] never reads stale page state.
#[derive(Debug, Clone)]
pub struct GridView<T> {
    config: GridConfig,
    records: Vec<T>,
    filter: SearchFilter,
    sort: Option<SortState>,
    visible: Vec<usize>,
    paginator: Paginator,
}

impl<T: FieldSource> GridView<T> {
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        let paginator = Paginator::new(config.default_page_size);
        Self {
            config,
            records: Vec::new(),
            filter: SearchFilter::default(),
            sort: None,
            visible: Vec::new(),
            paginator,
        }
    }

    /// Restricts the search box to the given field paths.
    #[must_use]
    pub fn with_search_fields<I, P>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPath>,
    {
        self.filter = SearchFilter::new(self.filter.query(), fields);
        self.recompute();
        self
    }

    /// Starts the grid sorted by `state`.
    #[must_use]
    pub fn with_sort(mut self, state: SortState) -> Self {
        self.sort = Some(state);
        self.recompute();
        self
    }

    /// Replaces the underlying records, e.g. after a fetch.
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.recompute();
    }

    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn set_search(&mut self, query: &str) {
        self.filter.set_query(query);
        self.recompute();
    }

    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        self.filter.query()
    }

    /// Applies a column-header click for `path`.
    pub fn request_sort(&mut self, path: impl Into<FieldPath>) {
        let next = SortState::requested(self.sort.as_ref(), path.into());
        debug!(key = %next.key, direction = ?next.direction, "grid sort requested");
        self.sort = Some(next);
        self.recompute();
    }

    #[must_use]
    pub fn sort_icon(&self, path: &str) -> SortIcon {
        SortState::icon_for(self.sort.as_ref(), path)
    }

    #[must_use]
    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn go_to_page(&mut self, n: isize) {
        self.paginator.go_to_page(n);
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.paginator.previous_page()
    }

    /// Switches page size if the selector offers it; returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !self.config.allows_page_size(page_size) {
            warn!(page_size, options = ?self.config.page_size_options, "page size not offered");
            return false;
        }
        self.paginator.set_page_size(page_size)
    }

    #[must_use]
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of rows before filtering.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.records.len()
    }

    /// Number of rows after filtering.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    /// All rows that pass the filter, in sorted order.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.records[i]).collect()
    }

    /// The rows of the current page.
    #[must_use]
    pub fn page(&self) -> GridPage<'_, T> {
        let rows = self.visible[self.paginator.page_range()]
            .iter()
            .map(|&i| &self.records[i])
            .collect();
        GridPage {
            rows,
            page_index: self.paginator.page_index(),
            page_count: self.paginator.page_count(),
            page_size: self.paginator.page_size(),
            total_items: self.paginator.total_items(),
        }
    }

    fn recompute(&mut self) {
        let matching: Vec<(usize, &T)> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filter.matches(*record))
            .collect();
        let rows: Vec<&T> = matching.iter().map(|(_, record)| *record).collect();
        self.visible = sort_indices(&rows, self.sort.as_ref())
            .into_iter()
            .map(|i| matching[i].0)
            .collect();
        self.paginator.set_total_items(self.visible.len());
    }
}
