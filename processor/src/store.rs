//! Record store: the single write operation the mapper depends on

use async_trait::async_trait;
use indexer_db::entity::EventRecord;
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;

use crate::error::AppError;

/// Result of an insert. A duplicate id is a replayed event, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Duplicate,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist one record, enforcing uniqueness of its id within its table
    async fn insert(&self, record: &EventRecord) -> Result<InsertOutcome, AppError>;
}

/// Postgres-backed store, one table per event type
#[derive(Clone)]
pub struct PgRecordStore {
    db_pool: Pool<Postgres>,
}

impl PgRecordStore {
    pub fn new(db_pool: Pool<Postgres>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert(&self, record: &EventRecord) -> Result<InsertOutcome, AppError> {
        let inserted = record
            .create(&self.db_pool)
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

        Ok(if inserted {
            InsertOutcome::Inserted
        } else {
            InsertOutcome::Duplicate
        })
    }
}

/// In-process store keeping records in insertion order.
///
/// Backs the ingestion tests; the binary always writes to Postgres.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<EventRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored records in the order they were accepted
    pub async fn records(&self) -> Vec<EventRecord> {
        self.records.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }

    pub async fn get(&self, table: &str, id: &str) -> Option<EventRecord> {
        self.records
            .lock()
            .await
            .iter()
            .find(|record| record.table() == table && record.id() == id)
            .cloned()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, record: &EventRecord) -> Result<InsertOutcome, AppError> {
        let mut records = self.records.lock().await;

        let exists = records
            .iter()
            .any(|stored| stored.table() == record.table() && stored.id() == record.id());
        if exists {
            return Ok(InsertOutcome::Duplicate);
        }

        records.push(record.clone());
        Ok(InsertOutcome::Inserted)
    }
}
