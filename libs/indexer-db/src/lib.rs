use std::env;

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    Pool, Postgres,
};

pub mod entity;

// Re-export commonly used types
pub use entity::{
    Approval, Donate, EventRecord, EvmLogs, Initialize, ModifyLiquidity, OperatorSet,
    OwnershipTransferred, ProtocolFeeControllerUpdated, ProtocolFeeUpdated, Swap, TokenCreated,
    Transfer,
};

mod defaults {
    pub const DATABASE_MAX_CONNECTIONS: &str = "5";
}

async fn create_pool(max_connections: u32) -> Result<Pool<Postgres>, sqlx::Error> {
    // DATABASE_URL wins; otherwise PgConnectOptions picks up the PG* variables
    let conn = match env::var("DATABASE_URL") {
        Ok(url) => url.parse::<PgConnectOptions>()?,
        Err(_) => PgConnectOptions::new(),
    };

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(conn)
        .await
}

pub async fn initialize_database() -> Result<Pool<Postgres>, sqlx::Error> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let db_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .unwrap_or(String::from(defaults::DATABASE_MAX_CONNECTIONS))
        .parse::<u32>()
        .map_err(|e| sqlx::Error::Configuration(Box::new(e)))?;

    create_pool(db_max_connections).await
}
