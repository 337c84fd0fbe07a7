//! API route definitions

pub mod pools;
pub mod tokens;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Pool routes
        .route("/pools/:pool_id", get(pools::get_pool))
        .route("/pools/:pool_id/swaps", get(pools::get_pool_swaps))
        .route("/pools/:pool_id/liquidity", get(pools::get_pool_liquidity))
        .route("/pools/:pool_id/chart", get(pools::get_pool_chart))
        // Token routes
        .route("/tokens/new", get(tokens::get_new_tokens))
        .route("/tokens/:address", get(tokens::get_token))
        .route("/creators/:address/tokens", get(tokens::get_creator_tokens))
}
