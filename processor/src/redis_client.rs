use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};

use crate::error::AppError;

/// Sink for newly indexed rows
#[async_trait]
pub trait LiveFeed: Send {
    async fn publish(&mut self, channel: &str, payload: &str) -> Result<(), AppError>;
}

/// Redis publisher for the live feed (newly indexed rows)
pub struct RedisPublisher {
    connection: MultiplexedConnection,
}

impl RedisPublisher {
    pub async fn new(redis_url: &str) -> Result<Self, AppError> {
        let client =
            Client::open(redis_url).map_err(|e| AppError::RedisConnection(e.to_string()))?;

        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::RedisConnection(e.to_string()))?;

        tracing::info!("Connected to Redis");
        Ok(Self { connection })
    }
}

#[async_trait]
impl LiveFeed for RedisPublisher {
    /// Publish a message to a Redis channel
    async fn publish(&mut self, channel: &str, payload: &str) -> Result<(), AppError> {
        self.connection
            .publish::<_, _, ()>(channel, payload)
            .await
            .map_err(|e| AppError::RedisPublish(e.to_string()))?;
        Ok(())
    }
}

/// Redis channels, one per event table
pub mod channels {
    pub const PREFIX: &str = "chain:events:";

    /// Channel carrying rows of `table`, e.g. `chain:events:swap`
    pub fn for_table(table: &str) -> String {
        format!("{PREFIX}{table}")
    }
}

#[cfg(test)]
mod tests {
    use super::channels;

    #[test]
    fn channel_names_follow_table_names() {
        assert_eq!(channels::for_table("swap"), "chain:events:swap");
        assert_eq!(
            channels::for_table("modifyLiquidity"),
            "chain:events:modifyLiquidity"
        );
    }
}
