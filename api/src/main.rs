//! Read-only REST endpoints over the indexed event tables

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::{Pool, Postgres};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::ApiError;

mod config;
mod error;
mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: Pool<Postgres>,
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config::listen_addr()?;

    let db_pool = indexer_db::initialize_database().await?;
    tracing::info!("Connected to database");

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api", routes::api_routes())
        .with_state(Arc::new(AppState { db_pool }))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
