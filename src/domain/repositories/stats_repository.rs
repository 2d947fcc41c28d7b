//! Repository trait for pre-aggregated submission statistics.

use crate::domain::date_range::DateRange;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

/// Cross-form success rate for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct DailySuccessRate {
    pub day: NaiveDate,
    pub success_rate: f64,
}

/// Success rate of a single form over the whole requested range.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct FormSuccessRate {
    pub form: String,
    pub success_rate: f64,
}

/// Active participants on a single day.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct DailyParticipants {
    pub day: NaiveDate,
    pub participants: i64,
}

/// Participants aggregated over one calendar month.
///
/// `month` is the first day of the month, serialized as `YYYY-MM-01`.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct MonthlyParticipants {
    pub month: NaiveDate,
    pub participants: i64,
}

/// Repository interface for the four aggregate series.
///
/// All methods take a canonical [`DateRange`] produced by the normalizer and
/// return rows ordered by their grouping key. Daily series cover the window
/// `[from - 1 day, to)`; the monthly series covers whole months touching the
/// range, `[month(from), month(to) + 1 month)`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Cross-form success rate per day, ordered by day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn success_rate_by_day(
        &self,
        range: DateRange,
    ) -> Result<Vec<DailySuccessRate>, AppError>;

    /// Per-form success rate over the range, ordered by form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn success_rate_by_form(
        &self,
        range: DateRange,
    ) -> Result<Vec<FormSuccessRate>, AppError>;

    /// Active participants per day, ordered by day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn participants_by_day(
        &self,
        range: DateRange,
    ) -> Result<Vec<DailyParticipants>, AppError>;

    /// Participants summed per calendar month, ordered by month.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn participants_by_month(
        &self,
        range: DateRange,
    ) -> Result<Vec<MonthlyParticipants>, AppError>;

    /// Cheap connectivity check for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
