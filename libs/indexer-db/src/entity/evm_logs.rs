use sqlx::{types::chrono, Executor, Postgres};

/// Raw log queued by the log collector, waiting to be decoded and mapped
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct EvmLogs {
    pub id: i64,
    pub chain_id: i64,
    pub block_number: i64,
    pub block_timestamp: i64,
    pub transaction_hash: Vec<u8>,
    pub transaction_index: i64,
    pub log_index: i64,
    pub address: Vec<u8>,
    pub event_signature: Vec<u8>,
    pub topics: Vec<Vec<u8>>,
    pub data: Vec<u8>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl EvmLogs {
    /// Number of queued logs for a chain, `None` when the queue is empty
    pub async fn count<'c, E>(chain_id: i64, connection: E) -> Result<Option<i64>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM evm_logs WHERE chain_id = $1")
            .bind(chain_id)
            .fetch_one(connection)
            .await?;

        Ok((count > 0).then_some(count))
    }

    /// Oldest queued logs in chain order
    pub async fn find_all<'c, E>(
        chain_id: i64,
        limit: i32,
        connection: E,
    ) -> Result<Vec<EvmLogs>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as::<_, EvmLogs>(
            r#"
            SELECT * FROM evm_logs
            WHERE chain_id = $1
            ORDER BY block_number ASC, transaction_index ASC, log_index ASC
            LIMIT $2
            "#,
        )
        .bind(chain_id)
        .bind(limit)
        .fetch_all(connection)
        .await
    }

    pub async fn delete<'c, E>(id: i64, connection: E) -> Result<(), sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query("DELETE FROM evm_logs WHERE id = $1")
            .bind(id)
            .execute(connection)
            .await?;

        Ok(())
    }
}
