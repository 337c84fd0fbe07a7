//! Pool API routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;

use indexer_db::entity::{initialize::Initialize, modify_liquidity::ModifyLiquidity, swap::Swap};

use crate::AppState;

/// 2^96, the fixed-point scale of `sqrtPriceX96`
const Q96: f64 = 79_228_162_514_264_337_593_543_950_336.0;

/// Helper to convert BigDecimal to f64
fn bd_to_f64(bd: &BigDecimal) -> f64 {
    bd.to_string().parse().unwrap_or(0.0)
}

/// Raw price of currency0 in currency1 units, `(sqrtPriceX96 / 2^96)^2`
pub fn price_from_sqrt_price_x96(sqrt_price_x96: &BigDecimal) -> f64 {
    let ratio = bd_to_f64(sqrt_price_x96) / Q96;
    ratio * ratio
}

/// Chart range in hours
fn range_hours(range: &str) -> i64 {
    match range {
        "1h" => 1,
        "6h" => 6,
        "24h" => 24,
        "7d" => 168,
        _ => 24,
    }
}

/// Pool detail response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDetail {
    #[serde(flatten)]
    pub pool: Initialize,
    pub initial_price: f64,
    pub net_liquidity: String,
}

/// Chart data point
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    pub timestamp: i64,
    pub block_number: i64,
    pub price: f64,
    pub tick: i32,
}

impl From<Swap> for ChartDataPoint {
    fn from(s: Swap) -> Self {
        Self {
            timestamp: s.timestamp,
            block_number: s.block_number,
            price: price_from_sqrt_price_x96(&s.sqrt_price_x96),
            tick: s.tick,
        }
    }
}

/// Query params for list endpoints
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i32>,
}

/// Query params for chart endpoint
#[derive(Debug, Deserialize)]
pub struct ChartParams {
    pub range: Option<String>, // "1h", "6h", "24h", "7d"
}

/// GET /api/pools/:pool_id
/// Returns the pool key, starting price and net liquidity
pub async fn get_pool(
    State(state): State<Arc<AppState>>,
    Path(pool_id): Path<String>,
) -> impl IntoResponse {
    let pool = match Initialize::find_by_pool(&pool_id, &state.db_pool).await {
        Ok(Some(pool)) => pool,
        Ok(None) => return (StatusCode::NOT_FOUND, "Pool not found").into_response(),
        Err(e) => {
            tracing::error!("Failed to get pool: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    };

    let net_liquidity = match ModifyLiquidity::net_liquidity(&pool_id, &state.db_pool).await {
        Ok(total) => total,
        Err(e) => {
            tracing::error!("Failed to sum pool liquidity: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    };

    Json(PoolDetail {
        initial_price: price_from_sqrt_price_x96(&pool.sqrt_price_x96),
        net_liquidity: net_liquidity.to_string(),
        pool,
    })
    .into_response()
}

/// GET /api/pools/:pool_id/swaps
/// Returns recent swaps, newest first
pub async fn get_pool_swaps(
    State(state): State<Arc<AppState>>,
    Path(pool_id): Path<String>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(50).min(500);

    match Swap::find_by_pool(&pool_id, limit, &state.db_pool).await {
        Ok(swaps) => Json(swaps).into_response(),
        Err(e) => {
            tracing::error!("Failed to get pool swaps: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// GET /api/pools/:pool_id/liquidity
/// Returns recent liquidity changes, newest first
pub async fn get_pool_liquidity(
    State(state): State<Arc<AppState>>,
    Path(pool_id): Path<String>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(50).min(500);

    match ModifyLiquidity::find_by_pool(&pool_id, limit, &state.db_pool).await {
        Ok(changes) => Json(changes).into_response(),
        Err(e) => {
            tracing::error!("Failed to get pool liquidity: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// GET /api/pools/:pool_id/chart
/// Returns the swap price series for charting
pub async fn get_pool_chart(
    State(state): State<Arc<AppState>>,
    Path(pool_id): Path<String>,
    Query(params): Query<ChartParams>,
) -> impl IntoResponse {
    let hours = range_hours(params.range.as_deref().unwrap_or("24h"));
    let since = (Utc::now() - Duration::hours(hours)).timestamp();

    match Swap::find_since(&pool_id, since, &state.db_pool).await {
        Ok(swaps) => {
            let items: Vec<ChartDataPoint> = swaps.into_iter().map(Into::into).collect();
            Json(items).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to get chart data: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}
