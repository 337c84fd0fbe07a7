use serde::Serialize;
use sqlx::{Executor, Postgres};

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct OwnershipTransferred {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub user: String,
    pub new_owner: String,
}

impl OwnershipTransferred {
    pub const TABLE: &'static str = "ownershipTransferred";

    pub async fn create<'c, E>(
        transfer: &OwnershipTransferred,
        connection: E,
    ) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "ownershipTransferred" ("id", "timestamp", "blockNumber", "user", "newOwner")
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&transfer.id)
            .bind(transfer.timestamp)
            .bind(transfer.block_number)
            .bind(&transfer.user)
            .bind(&transfer.new_owner)
            .fetch_optional(connection)
            .await
    }
}
