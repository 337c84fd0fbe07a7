//! Raw log queue feeding the decoder

use async_trait::async_trait;
use indexer_db::entity::evm_logs::EvmLogs;
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;

use crate::error::AppError;

#[async_trait]
pub trait LogQueue: Send + Sync {
    /// Number of queued logs for a chain, `None` when there is nothing to do
    async fn count(&self, chain_id: i64) -> Result<Option<i64>, AppError>;

    /// Oldest queued logs of a chain, in chain order
    async fn pending(&self, chain_id: i64, limit: i32) -> Result<Vec<EvmLogs>, AppError>;

    /// Drop a log whose event has been settled
    async fn remove(&self, id: i64) -> Result<(), AppError>;
}

/// The `evm_logs` table filled by the log collector
#[derive(Clone)]
pub struct PgLogQueue {
    db_pool: Pool<Postgres>,
}

impl PgLogQueue {
    pub fn new(db_pool: Pool<Postgres>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl LogQueue for PgLogQueue {
    async fn count(&self, chain_id: i64) -> Result<Option<i64>, AppError> {
        Ok(EvmLogs::count(chain_id, &self.db_pool).await?)
    }

    async fn pending(&self, chain_id: i64, limit: i32) -> Result<Vec<EvmLogs>, AppError> {
        Ok(EvmLogs::find_all(chain_id, limit, &self.db_pool).await?)
    }

    async fn remove(&self, id: i64) -> Result<(), AppError> {
        Ok(EvmLogs::delete(id, &self.db_pool).await?)
    }
}

/// In-process queue with the same chain ordering as `evm_logs`
#[derive(Default)]
pub struct MemoryQueue {
    logs: Mutex<Vec<EvmLogs>>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, log: EvmLogs) {
        self.logs.lock().await.push(log);
    }

    /// Queue row ids still waiting, in chain order
    pub async fn ids(&self) -> Vec<i64> {
        let mut logs = self.logs.lock().await.clone();
        sort_chain_order(&mut logs);
        logs.iter().map(|log| log.id).collect()
    }
}

fn sort_chain_order(logs: &mut [EvmLogs]) {
    logs.sort_by_key(|log| (log.block_number, log.transaction_index, log.log_index));
}

#[async_trait]
impl LogQueue for MemoryQueue {
    async fn count(&self, chain_id: i64) -> Result<Option<i64>, AppError> {
        let count = self
            .logs
            .lock()
            .await
            .iter()
            .filter(|log| log.chain_id == chain_id)
            .count() as i64;

        Ok((count > 0).then_some(count))
    }

    async fn pending(&self, chain_id: i64, limit: i32) -> Result<Vec<EvmLogs>, AppError> {
        let mut logs: Vec<EvmLogs> = self
            .logs
            .lock()
            .await
            .iter()
            .filter(|log| log.chain_id == chain_id)
            .cloned()
            .collect();

        sort_chain_order(&mut logs);
        logs.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(logs)
    }

    async fn remove(&self, id: i64) -> Result<(), AppError> {
        self.logs.lock().await.retain(|log| log.id != id);
        Ok(())
    }
}
