//! Token API routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

use indexer_db::entity::token_created::TokenCreated;

use crate::AppState;

/// Token list response item
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListItem {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub creator: String,
    pub image: String,
    pub created_at: String,
    pub block_number: i64,
}

impl From<TokenCreated> for TokenListItem {
    fn from(t: TokenCreated) -> Self {
        Self {
            created_at: created_at(t.timestamp),
            address: t.token_address,
            name: t.name,
            symbol: t.symbol,
            creator: t.creator,
            image: t.image,
            block_number: t.block_number,
        }
    }
}

/// Token detail response: the full launch record plus a readable date
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetail {
    #[serde(flatten)]
    pub token: TokenCreated,
    pub created_at: String,
}

fn created_at(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

/// Query params for list endpoints
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i32>,
}

/// GET /api/tokens/new
/// Returns newest launches
pub async fn get_new_tokens(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(50).min(100);

    match TokenCreated::find_recent(limit, &state.db_pool).await {
        Ok(tokens) => {
            let items: Vec<TokenListItem> = tokens.into_iter().map(Into::into).collect();
            Json(items).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to get new tokens: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// GET /api/tokens/:address
pub async fn get_token(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> impl IntoResponse {
    match TokenCreated::find_by_address(&address, &state.db_pool).await {
        Ok(Some(token)) => Json(TokenDetail {
            created_at: created_at(token.timestamp),
            token,
        })
        .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Token not found").into_response(),
        Err(e) => {
            tracing::error!("Failed to get token: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// GET /api/creators/:address/tokens
/// Returns launches by one creator, newest first
pub async fn get_creator_tokens(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(50).min(100);

    match TokenCreated::find_by_creator(&address, limit, &state.db_pool).await {
        Ok(tokens) => {
            let items: Vec<TokenListItem> = tokens.into_iter().map(Into::into).collect();
            Json(items).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to get creator tokens: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}
