use serde::Serialize;
use sqlx::{types::BigDecimal, Executor, Postgres};

/// ERC-6909 balance transfer of a pool manager claim token
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub caller: String,
    pub from: String,
    pub to: String,
    pub token_id: BigDecimal,
    pub amount: BigDecimal,
}

impl Transfer {
    pub const TABLE: &'static str = "transfer";

    /// Insert a transfer row. Returns `None` when the id was already stored.
    pub async fn create<'c, E>(transfer: &Transfer, connection: E) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "transfer" ("id", "timestamp", "blockNumber", "caller", "from", "to", "tokenId", "amount")
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&transfer.id)
            .bind(transfer.timestamp)
            .bind(transfer.block_number)
            .bind(&transfer.caller)
            .bind(&transfer.from)
            .bind(&transfer.to)
            .bind(&transfer.token_id)
            .bind(&transfer.amount)
            .fetch_optional(connection)
            .await
    }
}
