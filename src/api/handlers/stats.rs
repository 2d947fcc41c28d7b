//! Handlers for the four statistics series.
//!
//! Each handler delegates to [`serve_series`], which implements the shared
//! request pipeline exactly once per request:
//!
//! 1. Normalize `from`/`to` against the request path
//! 2. On a redirect outcome, emit it and stop — no query executes
//! 3. Otherwise run the aggregate query for the canonical range
//! 4. Attach the selected `cache-control` directive and serialize the rows
//!    as a JSON array
//!
//! A validation failure short-circuits before any I/O; query failures
//! propagate as a 500 through [`AppError`].

use axum::{
    Json,
    extract::{Query, State},
    http::{Uri, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;
use std::future::Future;

use crate::api::dto::range::RangeParams;
use crate::domain::cache_policy::CachePolicy;
use crate::domain::date_range::{CanonicalRedirect, DateRange, Outcome, normalize};
use crate::error::AppError;
use crate::state::AppState;

/// Cross-form success rate per day.
///
/// # Endpoint
///
/// `GET /success-rate/daily?from=YYYY-MM-DD&to=YYYY-MM-DD`
pub async fn success_rate_daily_handler(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<RangeParams>,
) -> Result<Response, AppError> {
    let service = state.stats_service.clone();
    serve_series(&uri, params, move |range| async move {
        service.success_rate_by_day(range).await
    })
    .await
}

/// Per-form success rate over the requested range.
///
/// # Endpoint
///
/// `GET /success-rate/summary?from=YYYY-MM-DD&to=YYYY-MM-DD`
pub async fn success_rate_summary_handler(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<RangeParams>,
) -> Result<Response, AppError> {
    let service = state.stats_service.clone();
    serve_series(&uri, params, move |range| async move {
        service.success_rate_by_form(range).await
    })
    .await
}

/// Active participants per day.
///
/// # Endpoint
///
/// `GET /participants/daily?from=YYYY-MM-DD&to=YYYY-MM-DD`
pub async fn participants_daily_handler(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<RangeParams>,
) -> Result<Response, AppError> {
    let service = state.stats_service.clone();
    serve_series(&uri, params, move |range| async move {
        service.participants_by_day(range).await
    })
    .await
}

/// Participants aggregated per calendar month.
///
/// # Endpoint
///
/// `GET /participants/monthly?from=YYYY-MM-DD&to=YYYY-MM-DD`
pub async fn participants_monthly_handler(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<RangeParams>,
) -> Result<Response, AppError> {
    let service = state.stats_service.clone();
    serve_series(&uri, params, move |range| async move {
        service.participants_by_month(range).await
    })
    .await
}

/// Shared pipeline: normalize, redirect or query, attach cache directive.
///
/// The clock is read once; the same instant drives both "today" for
/// defaulting and the finalization boundary for cache selection.
async fn serve_series<T, F, Fut>(
    uri: &Uri,
    params: RangeParams,
    query: F,
) -> Result<Response, AppError>
where
    T: Serialize,
    F: FnOnce(DateRange) -> Fut,
    Fut: Future<Output = Result<Vec<T>, AppError>>,
{
    let now = Utc::now();

    match normalize(
        params.from.as_deref(),
        params.to.as_deref(),
        uri.path(),
        now.date_naive(),
    )? {
        Outcome::Redirect(redirect) => Ok(redirect_response(&redirect)),
        Outcome::Serve(range) => {
            let rows = query(range).await?;
            let policy = CachePolicy::for_range(&range, now);

            Ok((
                [(header::CACHE_CONTROL, policy.header_value())],
                Json(rows),
            )
                .into_response())
        }
    }
}

/// Emits a normalization redirect with its status, location, and the cache
/// directive of the redirect itself.
fn redirect_response(redirect: &CanonicalRedirect) -> Response {
    (
        redirect.reason.status(),
        [
            (header::LOCATION, redirect.location.as_str()),
            (
                header::CACHE_CONTROL,
                redirect.reason.cache_policy().header_value(),
            ),
        ],
    )
        .into_response()
}
