//! In-process collaborator used by tests and local demos.

use crate::collaborator::DataCollaborator;
use crate::collection::Collection;
use crate::error::{DataError, DataResult};
use async_trait::async_trait;
use frontdesk_model::{ModelError, Record};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A collaborator that keeps every collection in memory.
///
/// Records keep insertion order. Ids are UUID v7.
#[derive(Debug, Default)]
pub struct InMemoryCollaborator {
    tables: RwLock<HashMap<Collection, Vec<Record>>>,
    fail_next_list: AtomicBool,
    list_calls: AtomicUsize,
}

impl InMemoryCollaborator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts payloads as new records and returns them.
    pub async fn seed(&self, collection: Collection, rows: Vec<Value>) -> DataResult<Vec<Record>> {
        let mut created = Vec::with_capacity(rows.len());
        for data in rows {
            created.push(self.create(collection, data).await?);
        }
        Ok(created)
    }

    /// Makes the next `list` call fail with a backend error.
    pub fn fail_next_list(&self) {
        self.fail_next_list.store(true, Ordering::SeqCst);
    }

    /// Number of `list` calls that reached this collaborator.
    #[must_use]
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataCollaborator for InMemoryCollaborator {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    async fn list(&self, collection: Collection) -> DataResult<Vec<Record>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_list.swap(false, Ordering::SeqCst) {
            return Err(DataError::Backend(format!("listing {collection} failed")));
        }
        let tables = self.tables.read().await;
        Ok(tables.get(&collection).cloned().unwrap_or_default())
    }

    async fn get(&self, collection: Collection, id: &str) -> DataResult<Record> {
        let tables = self.tables.read().await;
        tables
            .get(&collection)
            .and_then(|rows| rows.iter().find(|r| r.id == id))
            .cloned()
            .ok_or_else(|| not_found(collection, id))
    }

    async fn create(&self, collection: Collection, data: Value) -> DataResult<Record> {
        let record = Record::new(Uuid::now_v7().to_string(), collection.as_str(), data, now_ms())?;
        let mut tables = self.tables.write().await;
        tables.entry(collection).or_default().push(record.clone());
        Ok(record)
    }

    async fn update(&self, collection: Collection, id: &str, data: Value) -> DataResult<Record> {
        let patch = match data {
            Value::Object(patch) => patch,
            other => return Err(ModelError::not_an_object(&other).into()),
        };
        let mut tables = self.tables.write().await;
        let record = tables
            .get_mut(&collection)
            .and_then(|rows| rows.iter_mut().find(|r| r.id == id))
            .ok_or_else(|| not_found(collection, id))?;
        if let Value::Object(fields) = &mut record.data {
            fields.extend(patch);
        }
        record.modified_at = now_ms();
        Ok(record.clone())
    }

    async fn delete(&self, collection: Collection, id: &str) -> DataResult<()> {
        let mut tables = self.tables.write().await;
        let rows = tables.get_mut(&collection).ok_or_else(|| not_found(collection, id))?;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(not_found(collection, id));
        }
        Ok(())
    }
}

fn not_found(collection: Collection, id: &str) -> DataError {
    DataError::NotFound {
        collection,
        id: id.to_string(),
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(epoch_millis)
        .unwrap_or_default()
}

fn epoch_millis(since_epoch: Duration) -> i64 {
    i64::try_from(since_epoch.as_millis()).unwrap_or(i64::MAX)
}
