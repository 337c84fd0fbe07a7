use std::error::Error;

use indexer_db::initialize_database;
use processor::{
    config::Config,
    queue::{LogQueue, PgLogQueue},
    redis_client::RedisPublisher,
    service::{process_logs, Ingestor},
    store::PgRecordStore,
};
use tokio::time::sleep;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "processor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting event processor...");

    let config = Config::from_env()?;

    let db_pool = initialize_database().await?;
    tracing::info!("Connected to Postgres");

    let mut redis = match &config.redis_url {
        Some(url) => Some(RedisPublisher::new(url).await?),
        None => {
            tracing::info!("REDIS_URL not set, live feed disabled");
            None
        }
    };

    let queue = PgLogQueue::new(db_pool.clone());
    let ingestor = Ingestor::new(PgRecordStore::new(db_pool));

    tracing::info!(
        chain_id = config.chain_id,
        "Processor started. Polling every {} seconds...",
        config.poll_interval.as_secs()
    );

    loop {
        let queued = match queue.count(config.chain_id).await {
            Ok(count) => count,
            Err(err) => {
                tracing::error!(
                    "Error counting queued logs: {err}. Sleeping for {} seconds...",
                    config.poll_interval.as_secs()
                );

                sleep(config.poll_interval).await;
                continue;
            }
        };

        match queued {
            Some(count) => {
                tracing::info!("Found {count} queued logs. Processing...");

                match process_logs(&queue, &ingestor, &config, redis.as_mut()).await {
                    Ok(stats) => tracing::info!(
                        inserted = stats.inserted,
                        duplicates = stats.duplicates,
                        skipped = stats.skipped,
                        "Batch processed"
                    ),
                    Err(err) if err.is_halting() => {
                        // The offending log stays queued; nothing after it may be indexed
                        tracing::error!("Halting ingestion: {err}");
                        return Err(err.into());
                    }
                    Err(err) => {
                        tracing::error!("Error processing logs: {err}");
                        sleep(config.poll_interval).await;
                    }
                }
            }
            None => {
                tracing::debug!(
                    "No queued logs. Sleeping for {} seconds...",
                    config.poll_interval.as_secs()
                );
                sleep(config.poll_interval).await;
            }
        }
    }
}
