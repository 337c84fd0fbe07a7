use thiserror::Error;

use crate::events::EventKind;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing `{0}` environment variable")]
    MissingEnvVar(String),

    #[error("Invalid `{name}` value: {reason}")]
    InvalidConfig { name: String, reason: String },

    /// Argument bag is missing a field or carries an incompatible value.
    /// Nothing is written for the event and the stream halts.
    #[error("Malformed {event} event: {reason}")]
    MalformedEvent { event: &'static str, reason: String },

    /// Transient store failure, left to the caller's retry policy
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Redis connection error: {0}")]
    RedisConnection(String),

    #[error("Redis publish error: {0}")]
    RedisPublish(String),
}

impl AppError {
    pub fn malformed(kind: EventKind, reason: impl Into<String>) -> Self {
        AppError::MalformedEvent {
            event: kind.name(),
            reason: reason.into(),
        }
    }

    pub fn invalid_config(name: &str, reason: impl ToString) -> Self {
        AppError::InvalidConfig {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Errors after which the stream must not advance past the current event
    pub fn is_halting(&self) -> bool {
        matches!(self, AppError::MalformedEvent { .. })
    }
}
