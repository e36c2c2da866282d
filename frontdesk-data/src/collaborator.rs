//! Backend collaborator abstraction.
//!
//! Screens never talk to a database client or an HTTP API directly; they go
//! through this trait so the grid, cache and repository stay backend-agnostic.

use crate::collection::Collection;
use crate::error::DataResult;
use async_trait::async_trait;
use frontdesk_model::Record;
use serde_json::Value;

/// Abstract record store for the list screens.
#[async_trait]
pub trait DataCollaborator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns every record in `collection`.
    async fn list(&self, collection: Collection) -> DataResult<Vec<Record>>;

    /// Returns one record by id.
    async fn get(&self, collection: Collection, id: &str) -> DataResult<Record>;

    /// Creates a record from a JSON object payload and returns it with its id.
    async fn create(&self, collection: Collection, data: Value) -> DataResult<Record>;

    /// Merges `data`'s top-level fields into an existing record.
    async fn update(&self, collection: Collection, id: &str, data: Value) -> DataResult<Record>;

    /// Removes a record.
    async fn delete(&self, collection: Collection, id: &str) -> DataResult<()>;
}
