use serde::Serialize;
use sqlx::{types::BigDecimal, Executor, Postgres};

use super::CHAIN_ORDER_DESC;

/// Liquidity added to (positive delta) or removed from a tick range
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct ModifyLiquidity {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub pool_id: String,
    pub sender: String,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity_delta: BigDecimal,
    pub salt: String,
}

impl ModifyLiquidity {
    pub const TABLE: &'static str = "modifyLiquidity";

    /// Insert a modifyLiquidity row. Returns `None` when the id was already stored.
    pub async fn create<'c, E>(
        modify: &ModifyLiquidity,
        connection: E,
    ) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "modifyLiquidity" (
                "id", "timestamp", "blockNumber", "poolId", "sender",
                "tickLower", "tickUpper", "liquidityDelta", "salt"
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&modify.id)
            .bind(modify.timestamp)
            .bind(modify.block_number)
            .bind(&modify.pool_id)
            .bind(&modify.sender)
            .bind(modify.tick_lower)
            .bind(modify.tick_upper)
            .bind(&modify.liquidity_delta)
            .bind(&modify.salt)
            .fetch_optional(connection)
            .await
    }

    /// Liquidity changes for a pool, most recent first
    pub async fn find_by_pool<'c, E>(
        pool_id: &str,
        limit: i32,
        connection: E,
    ) -> Result<Vec<ModifyLiquidity>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let sql = format!(
            r#"SELECT * FROM "modifyLiquidity" WHERE "poolId" = $1 ORDER BY {CHAIN_ORDER_DESC} LIMIT $2"#
        );

        sqlx::query_as::<_, ModifyLiquidity>(&sql)
        .bind(pool_id)
        .bind(limit)
        .fetch_all(connection)
        .await
    }

    /// Net liquidity delta for a pool across all recorded changes
    pub async fn net_liquidity<'c, E>(pool_id: &str, connection: E) -> Result<BigDecimal, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let total: Option<BigDecimal> = sqlx::query_scalar(
            r#"SELECT COALESCE(SUM("liquidityDelta"), 0) FROM "modifyLiquidity" WHERE "poolId" = $1"#,
        )
        .bind(pool_id)
        .fetch_one(connection)
        .await?;

        Ok(total.unwrap_or_else(|| BigDecimal::from(0)))
    }
}
