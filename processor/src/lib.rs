//! Event ingestion for the pool manager and token factory contracts.
//!
//! Raw logs taken from a [`queue::LogQueue`] are decoded into [`events::IndexedEvent`]s, mapped to one
//! row each by [`handlers::map_event`] and written through a
//! [`store::RecordStore`] keyed by event id.

pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod queue;
pub mod redis_client;
pub mod service;
pub mod store;
