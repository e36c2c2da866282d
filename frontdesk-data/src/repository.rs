//! Cached access to a [`DataCollaborator`].

use crate::collaborator::DataCollaborator;
use crate::collection::Collection;
use crate::error::DataResult;
use frontdesk_cache::TtlCache;
use frontdesk_model::Record;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Reads listings through the shared cache and keeps it honest after writes.
///
/// Listings are cached per collection for the TTL configured under the
/// collection's name. Single-record reads always go to the collaborator.
pub struct Repository<C: ?Sized> {
    collaborator: Arc<C>,
    cache: Arc<TtlCache>,
}

impl<C: DataCollaborator + ?Sized> Repository<C> {
    #[must_use]
    pub fn new(collaborator: Arc<C>, cache: Arc<TtlCache>) -> Self {
        Self {
            collaborator,
            cache,
        }
    }

    #[must_use]
    pub fn collaborator(&self) -> &Arc<C> {
        &self.collaborator
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<TtlCache> {
        &self.cache
    }

    /// Returns every record in `collection`, from cache when fresh.
    pub async fn list(&self, collection: Collection) -> DataResult<Vec<Record>> {
        let key = collection.cache_key();
        let ttl = self.cache.config().ttl_for(collection.as_str());
        self.cache
            .get_or_fetch(&key, ttl, || {
                debug!(%collection, backend = self.collaborator.name(), "fetching listing");
                self.collaborator.list(collection)
            })
            .await
    }

    /// Drops the cached listing and fetches it again.
    pub async fn refresh(&self, collection: Collection) -> DataResult<Vec<Record>> {
        self.cache.invalidate(&collection.cache_key());
        self.list(collection).await
    }

    pub async fn get(&self, collection: Collection, id: &str) -> DataResult<Record> {
        self.collaborator.get(collection, id).await
    }

    pub async fn create(&self, collection: Collection, data: Value) -> DataResult<Record> {
        let record = self.collaborator.create(collection, data).await?;
        info!(%collection, id = %record.id, "record created");
        self.invalidate_after_write(collection);
        Ok(record)
    }

    pub async fn update(&self, collection: Collection, id: &str, data: Value) -> DataResult<Record> {
        let record = self.collaborator.update(collection, id, data).await?;
        info!(%collection, id, "record updated");
        self.invalidate_after_write(collection);
        Ok(record)
    }

    pub async fn delete(&self, collection: Collection, id: &str) -> DataResult<()> {
        self.collaborator.delete(collection, id).await?;
        info!(%collection, id, "record deleted");
        self.invalidate_after_write(collection);
        Ok(())
    }

    fn invalidate_after_write(&self, collection: Collection) {
        for stale in collection.invalidates() {
            self.cache.invalidate(&stale.cache_key());
        }
    }
}
