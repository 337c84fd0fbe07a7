use serde::Serialize;
use sqlx::{types::BigDecimal, Executor, Postgres};

use super::CHAIN_ORDER_DESC;

/// Token launched through the token factory, with its social metadata
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct TokenCreated {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
    pub token_address: String,
    pub creator: String,
    pub name: String,
    pub symbol: String,
    pub decimals: i16,
    pub initial_supply: BigDecimal,
    pub description: String,
    pub image: String,
    pub website: String,
    pub twitter: String,
    pub telegram: String,
    pub discord: String,
}

impl TokenCreated {
    pub const TABLE: &'static str = "tokenCreated";

    /// Insert a tokenCreated row. Returns `None` when the id was already stored.
    pub async fn create<'c, E>(token: &TokenCreated, connection: E) -> Result<Option<String>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = r#"
            INSERT INTO "tokenCreated" (
                "id", "timestamp", "blockNumber", "tokenAddress", "creator", "name", "symbol",
                "decimals", "initialSupply", "description", "image", "website", "twitter",
                "telegram", "discord"
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT ("id") DO NOTHING
            RETURNING "id"
        "#;

        sqlx::query_scalar::<_, String>(query)
            .bind(&token.id)
            .bind(token.timestamp)
            .bind(token.block_number)
            .bind(&token.token_address)
            .bind(&token.creator)
            .bind(&token.name)
            .bind(&token.symbol)
            .bind(token.decimals)
            .bind(&token.initial_supply)
            .bind(&token.description)
            .bind(&token.image)
            .bind(&token.website)
            .bind(&token.twitter)
            .bind(&token.telegram)
            .bind(&token.discord)
            .fetch_optional(connection)
            .await
    }

    /// Find a created token by its contract address
    pub async fn find_by_address<'c, E>(
        address: &str,
        connection: E,
    ) -> Result<Option<TokenCreated>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as::<_, TokenCreated>(
            r#"SELECT * FROM "tokenCreated" WHERE LOWER("tokenAddress") = LOWER($1)"#,
        )
        .bind(address)
        .fetch_optional(connection)
        .await
    }

    /// Get recent launches (newest first)
    pub async fn find_recent<'c, E>(limit: i32, connection: E) -> Result<Vec<TokenCreated>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let sql = format!(r#"SELECT * FROM "tokenCreated" ORDER BY {CHAIN_ORDER_DESC} LIMIT $1"#);

        sqlx::query_as::<_, TokenCreated>(&sql)
        .bind(limit)
        .fetch_all(connection)
        .await
    }

    /// Tokens launched by one creator
    pub async fn find_by_creator<'c, E>(
        creator: &str,
        limit: i32,
        connection: E,
    ) -> Result<Vec<TokenCreated>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let sql = format!(
            r#"SELECT * FROM "tokenCreated" WHERE LOWER("creator") = LOWER($1) ORDER BY {CHAIN_ORDER_DESC} LIMIT $2"#
        );

        sqlx::query_as::<_, TokenCreated>(&sql)
        .bind(creator)
        .bind(limit)
        .fetch_all(connection)
        .await
    }
}
