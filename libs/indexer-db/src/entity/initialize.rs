use serde::Serialize;
use sqlx::{types::BigDecimal, Executor, Postgres};

/// Pool initialization: the pool key plus the starting price and tick
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Initialize {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub pool_id: String,
    pub currency0: String,
    pub currency1: String,
    pub fee: i32,
    pub tick_spacing: i32,
    pub hooks: String,
    pub sqrt_price_x96: BigDecimal,
    pub tick: i32,
}

impl Initialize {
    pub const TABLE: &'static str = "initialize";

    /// Insert an initialize row. Returns `None` when the id was already stored.
    pub async fn create<'c, E>(init: &Initialize, connection: E) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "initialize" (
                "id", "timestamp", "blockNumber", "poolId", "currency0", "currency1",
                "fee", "tickSpacing", "hooks", "sqrtPriceX96", "tick"
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&init.id)
            .bind(init.timestamp)
            .bind(init.block_number)
            .bind(&init.pool_id)
            .bind(&init.currency0)
            .bind(&init.currency1)
            .bind(init.fee)
            .bind(init.tick_spacing)
            .bind(&init.hooks)
            .bind(&init.sqrt_price_x96)
            .bind(init.tick)
            .fetch_optional(connection)
            .await
    }

    /// Find the initialization of a pool
    pub async fn find_by_pool<'c, E>(
        pool_id: &str,
        connection: E,
    ) -> Result<Option<Initialize>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as::<_, Initialize>(r#"SELECT * FROM "initialize" WHERE "poolId" = $1"#)
            .bind(pool_id)
            .fetch_optional(connection)
            .await
    }
}
