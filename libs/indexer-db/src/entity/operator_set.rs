use serde::Serialize;
use sqlx::{Executor, Postgres};

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct OperatorSet {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub owner: String,
    pub operator: String,
    pub approved: bool,
}

impl OperatorSet {
    pub const TABLE: &'static str = "operatorSet";

    pub async fn create<'c, E>(set: &OperatorSet, connection: E) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "operatorSet" ("id", "timestamp", "blockNumber", "owner", "operator", "approved")
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&set.id)
            .bind(set.timestamp)
            .bind(set.block_number)
            .bind(&set.owner)
            .bind(&set.operator)
            .bind(set.approved)
            .fetch_optional(connection)
            .await
    }
}
