use serde::Serialize;
use sqlx::{types::BigDecimal, Executor, Postgres};

/// Donation of both currencies to in-range liquidity of a pool
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Donate {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub pool_id: String,
    pub sender: String,
    pub amount0: BigDecimal,
    pub amount1: BigDecimal,
}

impl Donate {
    pub const TABLE: &'static str = "donate";

    /// Insert a donate row. Returns `None` when the id was already stored.
    pub async fn create<'c, E>(donate: &Donate, connection: E) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "donate" ("id", "timestamp", "blockNumber", "poolId", "sender", "amount0", "amount1")
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&donate.id)
            .bind(donate.timestamp)
            .bind(donate.block_number)
            .bind(&donate.pool_id)
            .bind(&donate.sender)
            .bind(&donate.amount0)
            .bind(&donate.amount1)
            .fetch_optional(connection)
            .await
    }
}
