//! Ingestion pipeline: queue → decode → map → store

use indexer_db::entity::EventRecord;

use crate::{
    config::Config,
    error::AppError,
    events::{decode, IndexedEvent},
    handlers,
    queue::LogQueue,
    redis_client::{channels, LiveFeed},
    store::{InsertOutcome, RecordStore},
};

/// Outcome of ingesting one event
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested {
    pub record: EventRecord,
    pub outcome: InsertOutcome,
}

/// Maps events and writes them to a [`RecordStore`], one at a time.
///
/// Holds no per-event state; the only await point is the store write, which
/// completes before `ingest` returns.
pub struct Ingestor<S> {
    store: S,
}

impl<S: RecordStore> Ingestor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Map the event and issue exactly one insert for it.
    ///
    /// A malformed event fails before the store is touched. A duplicate id is
    /// reported as [`InsertOutcome::Duplicate`].
    pub async fn ingest(&self, event: &IndexedEvent) -> Result<Ingested, AppError> {
        let record = handlers::map_event(event)?;
        let outcome = self.store.insert(&record).await?;

        match outcome {
            InsertOutcome::Inserted => {
                tracing::debug!(table = record.table(), id = record.id(), "indexed event")
            }
            InsertOutcome::Duplicate => {
                tracing::debug!(table = record.table(), id = record.id(), "event already indexed")
            }
        }

        Ok(Ingested { record, outcome })
    }
}

/// Counters for one processed batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

/// Drain one batch of queued logs for the configured chain.
///
/// Logs are handled strictly in chain order. A queue row is removed only once
/// its event is stored (or was already stored, or is not ours), so an
/// interrupted batch replays cleanly. On error the batch stops at the failing
/// row and leaves it queued.
pub async fn process_logs<Q, S, F>(
    queue: &Q,
    ingestor: &Ingestor<S>,
    config: &Config,
    mut feed: Option<&mut F>,
) -> Result<BatchStats, AppError>
where
    Q: LogQueue,
    S: RecordStore,
    F: LiveFeed,
{
    let queued_logs = queue.pending(config.chain_id, config.batch_size).await?;
    let mut stats = BatchStats::default();

    for log in queued_logs {
        let log_id = log.id;

        match decode::decode_log(&log, &config.contracts)? {
            Some(event) => {
                let ingested = ingestor.ingest(&event).await?;

                match ingested.outcome {
                    InsertOutcome::Inserted => {
                        stats.inserted += 1;
                        if let Some(feed) = feed.as_deref_mut() {
                            publish(feed, &ingested.record).await;
                        }
                    }
                    InsertOutcome::Duplicate => stats.duplicates += 1,
                }
            }
            None => stats.skipped += 1,
        }

        queue.remove(log_id).await?;
    }

    Ok(stats)
}

/// Live feed is best effort: failures are logged and ingestion continues
async fn publish<F: LiveFeed>(feed: &mut F, record: &EventRecord) {
    let payload = match serde_json::to_string(record) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(table = record.table(), id = record.id(), "Failed to serialize record: {e}");
            return;
        }
    };

    if let Err(e) = feed
        .publish(&channels::for_table(record.table()), &payload)
        .await
    {
        tracing::warn!(table = record.table(), id = record.id(), "{e}");
    }
}
