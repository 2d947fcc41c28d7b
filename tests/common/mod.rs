#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Datelike, Days, NaiveDate};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

use form_stats::application::services::StatsService;
use form_stats::domain::date_range::DateRange;
use form_stats::domain::repositories::{
    DailyParticipants, DailySuccessRate, FormSuccessRate, MonthlyParticipants, StatsRepository,
};
use form_stats::error::AppError;
use form_stats::state::AppState;

/// One pre-aggregated submission row: form, day, attempts, successes.
pub struct SubmissionRow {
    pub form: String,
    pub day: NaiveDate,
    pub attempts: i64,
    pub successes: i64,
}

/// In-memory stand-in for the Postgres repository.
///
/// Replicates the SQL window semantics: daily series cover
/// `[from - 1 day, to)`, the monthly series covers whole months touching the
/// range.
#[derive(Default)]
pub struct FakeStatsRepository {
    pub submissions: Vec<SubmissionRow>,
    pub participants: Vec<(NaiveDate, i64)>,
    pub fail: bool,
}

impl FakeStatsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_submission(
        mut self,
        form: &str,
        day: NaiveDate,
        attempts: i64,
        successes: i64,
    ) -> Self {
        self.submissions.push(SubmissionRow {
            form: form.to_string(),
            day,
            attempts,
            successes,
        });
        self
    }

    pub fn with_participants(mut self, day: NaiveDate, participants: i64) -> Self {
        self.participants.push((day, participants));
        self
    }

    fn check_fail(&self) -> Result<(), AppError> {
        if self.fail {
            Err(AppError::internal("Database error", json!({})))
        } else {
            Ok(())
        }
    }
}

fn daily_window(range: DateRange) -> (NaiveDate, NaiveDate) {
    let start = range.from.checked_sub_days(Days::new(1)).unwrap();
    (start, range.to)
}

fn month_floor(day: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap()
}

fn next_month(month: NaiveDate) -> NaiveDate {
    if month.month() == 12 {
        NaiveDate::from_ymd_opt(month.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(month.year(), month.month() + 1, 1).unwrap()
    }
}

fn rate(successes: i64, attempts: i64) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        successes as f64 / attempts as f64
    }
}

#[async_trait]
impl StatsRepository for FakeStatsRepository {
    async fn success_rate_by_day(
        &self,
        range: DateRange,
    ) -> Result<Vec<DailySuccessRate>, AppError> {
        self.check_fail()?;

        let (start, end) = daily_window(range);
        let mut by_day: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();
        for row in &self.submissions {
            if row.day >= start && row.day < end {
                let entry = by_day.entry(row.day).or_default();
                entry.0 += row.attempts;
                entry.1 += row.successes;
            }
        }

        Ok(by_day
            .into_iter()
            .map(|(day, (attempts, successes))| DailySuccessRate {
                day,
                success_rate: rate(successes, attempts),
            })
            .collect())
    }

    async fn success_rate_by_form(
        &self,
        range: DateRange,
    ) -> Result<Vec<FormSuccessRate>, AppError> {
        self.check_fail()?;

        let (start, end) = daily_window(range);
        let mut by_form: BTreeMap<String, (i64, i64)> = BTreeMap::new();
        for row in &self.submissions {
            if row.day >= start && row.day < end {
                let entry = by_form.entry(row.form.clone()).or_default();
                entry.0 += row.attempts;
                entry.1 += row.successes;
            }
        }

        Ok(by_form
            .into_iter()
            .map(|(form, (attempts, successes))| FormSuccessRate {
                form,
                success_rate: rate(successes, attempts),
            })
            .collect())
    }

    async fn participants_by_day(
        &self,
        range: DateRange,
    ) -> Result<Vec<DailyParticipants>, AppError> {
        self.check_fail()?;

        let (start, end) = daily_window(range);
        let mut rows: Vec<DailyParticipants> = self
            .participants
            .iter()
            .filter(|(day, _)| *day >= start && *day < end)
            .map(|&(day, participants)| DailyParticipants { day, participants })
            .collect();
        rows.sort_by_key(|r| r.day);

        Ok(rows)
    }

    async fn participants_by_month(
        &self,
        range: DateRange,
    ) -> Result<Vec<MonthlyParticipants>, AppError> {
        self.check_fail()?;

        let start = month_floor(range.from);
        let end = next_month(month_floor(range.to));

        let mut by_month: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for &(day, participants) in &self.participants {
            if day >= start && day < end {
                *by_month.entry(month_floor(day)).or_default() += participants;
            }
        }

        Ok(by_month
            .into_iter()
            .map(|(month, participants)| MonthlyParticipants {
                month,
                participants,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_fail()
    }
}

pub fn create_test_state(repository: FakeStatsRepository) -> AppState {
    AppState {
        stats_service: Arc::new(StatsService::new(Arc::new(repository))),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
