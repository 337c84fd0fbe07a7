use serde::Serialize;
use sqlx::{types::BigDecimal, Executor, Postgres};

/// ERC-6909 allowance change emitted by the pool manager
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Approval {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub owner: String,
    pub spender: String,
    pub token_id: BigDecimal,
    pub amount: BigDecimal,
}

impl Approval {
    pub const TABLE: &'static str = "approval";

    /// Insert an approval row. Returns `None` when the id was already stored.
    pub async fn create<'c, E>(approval: &Approval, connection: E) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "approval" ("id", "timestamp", "blockNumber", "owner", "spender", "tokenId", "amount")
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&approval.id)
            .bind(approval.timestamp)
            .bind(approval.block_number)
            .bind(&approval.owner)
            .bind(&approval.spender)
            .bind(&approval.token_id)
            .bind(&approval.amount)
            .fetch_optional(connection)
            .await
    }
}
