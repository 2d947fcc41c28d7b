//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`               - Health check (database connectivity)
//! - `GET /success-rate/daily`   - Cross-form success rate per day
//! - `GET /success-rate/summary` - Per-form success rate over the range
//! - `GET /participants/daily`   - Active participants per day
//! - `GET /participants/monthly` - Participants aggregated per month
//! - anything else               - 404 JSON body
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    health_handler, participants_daily_handler, participants_monthly_handler,
    success_rate_daily_handler, success_rate_summary_handler,
};
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/success-rate/daily", get(success_rate_daily_handler))
        .route("/success-rate/summary", get(success_rate_summary_handler))
        .route("/participants/daily", get(participants_daily_handler))
        .route("/participants/monthly", get(participants_monthly_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Fallback for unmatched routes; not reported as an operational error.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("No route matched", json!({}))
}
