//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::date_range::DateRange;
use crate::domain::repositories::{
    DailyParticipants, DailySuccessRate, FormSuccessRate, MonthlyParticipants, StatsRepository,
};
use crate::error::AppError;

/// PostgreSQL repository over the pre-aggregated statistics tables.
///
/// Daily series read `submission_stats` / `participant_stats` over the
/// window `[from - 1 day, to)`; the monthly series covers whole months,
/// `[month(from), month(to) + 1 month)`. Success rates guard against
/// zero-attempt days with `NULLIF`.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn success_rate_by_day(
        &self,
        range: DateRange,
    ) -> Result<Vec<DailySuccessRate>, AppError> {
        let rows = sqlx::query_as::<_, DailySuccessRate>(
            r#"
            SELECT
                day,
                COALESCE(SUM(successes)::float8 / NULLIF(SUM(attempts)::float8, 0), 0)
                    AS success_rate
            FROM submission_stats
            WHERE day >= $1::date - 1 AND day < $2
            GROUP BY day
            ORDER BY day
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn success_rate_by_form(
        &self,
        range: DateRange,
    ) -> Result<Vec<FormSuccessRate>, AppError> {
        let rows = sqlx::query_as::<_, FormSuccessRate>(
            r#"
            SELECT
                form,
                COALESCE(SUM(successes)::float8 / NULLIF(SUM(attempts)::float8, 0), 0)
                    AS success_rate
            FROM submission_stats
            WHERE day >= $1::date - 1 AND day < $2
            GROUP BY form
            ORDER BY form
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn participants_by_day(
        &self,
        range: DateRange,
    ) -> Result<Vec<DailyParticipants>, AppError> {
        let rows = sqlx::query_as::<_, DailyParticipants>(
            r#"
            SELECT day, participants
            FROM participant_stats
            WHERE day >= $1::date - 1 AND day < $2
            ORDER BY day
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn participants_by_month(
        &self,
        range: DateRange,
    ) -> Result<Vec<MonthlyParticipants>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyParticipants>(
            r#"
            SELECT
                date_trunc('month', day)::date AS month,
                SUM(participants)::bigint AS participants
            FROM participant_stats
            WHERE day >= date_trunc('month', $1::date)
              AND day < date_trunc('month', $2::date) + INTERVAL '1 month'
            GROUP BY date_trunc('month', day)
            ORDER BY month
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
