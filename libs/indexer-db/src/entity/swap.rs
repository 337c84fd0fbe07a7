use serde::Serialize;
use sqlx::{types::BigDecimal, Executor, Postgres};

use super::{CHAIN_ORDER_ASC, CHAIN_ORDER_DESC};

/// Swap entity representing a trade against a pool manager pool
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Swap {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub pool_id: String,
    pub sender: String,
    pub amount0: BigDecimal,
    pub amount1: BigDecimal,
    pub sqrt_price_x96: BigDecimal,
    pub liquidity: BigDecimal,
    pub tick: i32,
    pub fee: i32,
}

impl Swap {
    pub const TABLE: &'static str = "swap";

    /// Insert a swap row. Returns `None` when the id was already stored.
    pub async fn create<'c, E>(swap: &Swap, connection: E) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "swap" (
                "id", "timestamp", "blockNumber", "poolId", "sender", "amount0",
                "amount1", "sqrtPriceX96", "liquidity", "tick", "fee"
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&swap.id)
            .bind(swap.timestamp)
            .bind(swap.block_number)
            .bind(&swap.pool_id)
            .bind(&swap.sender)
            .bind(&swap.amount0)
            .bind(&swap.amount1)
            .bind(&swap.sqrt_price_x96)
            .bind(&swap.liquidity)
            .bind(swap.tick)
            .bind(swap.fee)
            .fetch_optional(connection)
            .await
    }

    /// Find swaps by pool, most recent first
    pub async fn find_by_pool<'c, E>(
        pool_id: &str,
        limit: i32,
        connection: E,
    ) -> Result<Vec<Swap>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let sql = format!(
            r#"SELECT * FROM "swap" WHERE "poolId" = $1 ORDER BY {CHAIN_ORDER_DESC} LIMIT $2"#
        );

        sqlx::query_as::<_, Swap>(&sql)
        .bind(pool_id)
        .bind(limit)
        .fetch_all(connection)
        .await
    }

    /// Swaps for a pool since a unix timestamp, oldest first (chart series)
    pub async fn find_since<'c, E>(
        pool_id: &str,
        since: i64,
        connection: E,
    ) -> Result<Vec<Swap>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let sql = format!(
            r#"SELECT * FROM "swap" WHERE "poolId" = $1 AND "timestamp" >= $2 ORDER BY {CHAIN_ORDER_ASC}"#
        );

        sqlx::query_as::<_, Swap>(&sql)
        .bind(pool_id)
        .bind(since)
        .fetch_all(connection)
        .await
    }
}
