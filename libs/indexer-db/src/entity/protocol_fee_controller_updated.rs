use serde::Serialize;
use sqlx::{Executor, Postgres};

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct ProtocolFeeControllerUpdated {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub protocol_fee_controller: String,
}

impl ProtocolFeeControllerUpdated {
    pub const TABLE: &'static str = "protocolFeeControllerUpdated";

    pub async fn create<'c, E>(
        update: &ProtocolFeeControllerUpdated,
        connection: E,
    ) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "protocolFeeControllerUpdated" ("id", "timestamp", "blockNumber", "protocolFeeController")
            VALUES ($1, $2, $3, $4)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&update.id)
            .bind(update.timestamp)
            .bind(update.block_number)
            .bind(&update.protocol_fee_controller)
            .fetch_optional(connection)
            .await
    }
}
