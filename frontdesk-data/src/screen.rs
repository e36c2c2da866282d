use crate::collaborator::DataCollaborator;
use crate::collection::Collection;
use crate::error::DataResult;
use crate::repository::Repository;
use frontdesk_grid::{GridConfig, GridPage, GridView, SortState};
use frontdesk_model::{FieldPath, Record};
use std::sync::Arc;
use tracing::{info, warn};

/// One list screen: a collection, its repository and the grid it renders.
///
/// A failed load leaves the grid on the last records it successfully
/// received; the error is handed back for the caller to report.
pub struct ListScreen<C: ?Sized> {
    repository: Arc<Repository<C>>,
    collection: Collection,
    grid: GridView<Record>,
}

impl<C: DataCollaborator + ?Sized> ListScreen<C> {
    #[must_use]
    pub fn new(repository: Arc<Repository<C>>, collection: Collection, config: GridConfig) -> Self {
        Self {
            repository,
            collection,
            grid: GridView::new(config),
        }
    }

    /// Restricts the search box to the given field paths.
    #[must_use]
    pub fn with_search_fields<I, P>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPath>,
    {
        self.grid = self.grid.with_search_fields(fields);
        self
    }

    /// Opens the screen sorted by `state`.
    #[must_use]
    pub fn with_sort(mut self, state: SortState) -> Self {
        self.grid = self.grid.with_sort(state);
        self
    }

    #[must_use]
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Loads the collection (cache first) into the grid. Returns the row count.
    pub async fn load(&mut self) -> DataResult<usize> {
        let result = self.repository.list(self.collection).await;
        self.apply(result)
    }

    /// Bypasses the cache and loads fresh rows into the grid.
    pub async fn reload(&mut self) -> DataResult<usize> {
        let result = self.repository.refresh(self.collection).await;
        self.apply(result)
    }

    #[must_use]
    pub fn grid(&self) -> &GridView<Record> {
        &self.grid
    }

    /// Search, sort and paging controls bind here.
    pub fn grid_mut(&mut self) -> &mut GridView<Record> {
        &mut self.grid
    }

    #[must_use]
    pub fn page(&self) -> GridPage<'_, Record> {
        self.grid.page()
    }

    fn apply(&mut self, result: DataResult<Vec<Record>>) -> DataResult<usize> {
        match result {
            Ok(records) => {
                let count = records.len();
                self.grid.set_records(records);
                info!(collection = %self.collection, count, "list screen loaded");
                Ok(count)
            }
            Err(err) => {
                warn!(
                    collection = %self.collection,
                    kept = self.grid.total_len(),
                    error = %err,
                    "list screen load failed, keeping last records"
                );
                Err(err)
            }
        }
    }
}
