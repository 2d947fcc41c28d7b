//! Aggregate statistics service.

use std::sync::Arc;

use crate::domain::date_range::DateRange;
use crate::domain::repositories::{
    DailyParticipants, DailySuccessRate, FormSuccessRate, MonthlyParticipants, StatsRepository,
};
use crate::error::AppError;

/// Service for querying pre-aggregated submission statistics.
///
/// Thin orchestration over the repository: each method executes one grouped
/// aggregate query for a canonical date range. The service never inspects
/// row contents; ordering and windowing are the repository's contract.
pub struct StatsService {
    repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn StatsRepository>) -> Self {
        Self { repository }
    }

    /// Cross-form success rate per day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn success_rate_by_day(
        &self,
        range: DateRange,
    ) -> Result<Vec<DailySuccessRate>, AppError> {
        self.repository.success_rate_by_day(range).await
    }

    /// Per-form success rate over the range.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn success_rate_by_form(
        &self,
        range: DateRange,
    ) -> Result<Vec<FormSuccessRate>, AppError> {
        self.repository.success_rate_by_form(range).await
    }

    /// Active participants per day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn participants_by_day(
        &self,
        range: DateRange,
    ) -> Result<Vec<DailyParticipants>, AppError> {
        self.repository.participants_by_day(range).await
    }

    /// Participants aggregated per calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn participants_by_month(
        &self,
        range: DateRange,
    ) -> Result<Vec<MonthlyParticipants>, AppError> {
        self.repository.participants_by_month(range).await
    }

    /// Database connectivity check for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
