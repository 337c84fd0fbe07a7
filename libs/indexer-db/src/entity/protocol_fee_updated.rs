use serde::Serialize;
use sqlx::{Executor, Postgres};

/// Protocol fee change for a single pool (uint24 packed fee)
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct ProtocolFeeUpdated {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub pool_id: String,
    pub protocol_fee: i32,
}

impl ProtocolFeeUpdated {
    pub const TABLE: &'static str = "protocolFeeUpdated";

    pub async fn create<'c, E>(
        update: &ProtocolFeeUpdated,
        connection: E,
    ) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "protocolFeeUpdated" ("id", "timestamp", "blockNumber", "poolId", "protocolFee")
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&update.id)
            .bind(update.timestamp)
            .bind(update.block_number)
            .bind(&update.pool_id)
            .bind(update.protocol_fee)
            .fetch_optional(connection)
            .await
    }
}
