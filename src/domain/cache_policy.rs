//! HTTP cache directive selection for data responses.
//!
//! Aggregate rows for a day are assumed complete at most one hour after the
//! day ends (the upstream finalization delay). A range whose `to` bound may
//! still receive data is only briefly cacheable; a fully historical range
//! will never change and can be cached indefinitely.

use chrono::{DateTime, Duration, Utc};

use crate::domain::date_range::DateRange;

/// Cache directive attached to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// `public, max-age=600` — data for the current period may still change.
    ShortPublic,
    /// `public, max-age=31536000, immutable` — the response will never change.
    LongImmutable,
}

impl CachePolicy {
    /// The literal `cache-control` header value.
    pub const fn header_value(self) -> &'static str {
        match self {
            Self::ShortPublic => "public, max-age=600",
            Self::LongImmutable => "public, max-age=31536000, immutable",
        }
    }

    /// Selects the directive for a data response over `range`.
    ///
    /// The boundary is the UTC calendar date one hour ago; a range ending on
    /// or after it may include not-yet-finalized aggregates. The decision
    /// depends only on `range.to` and the wall clock, never on the query
    /// result.
    pub fn for_range(range: &DateRange, now: DateTime<Utc>) -> Self {
        let boundary = (now - Duration::hours(1)).date_naive();
        if range.to >= boundary {
            Self::ShortPublic
        } else {
            Self::LongImmutable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range_to(to: NaiveDate) -> DateRange {
        DateRange {
            from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            to,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        date(y, m, d)
            .and_hms_opt(h, min, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_range_ending_today_is_short_lived() {
        let now = at(2024, 6, 15, 12, 0);
        let policy = CachePolicy::for_range(&range_to(date(2024, 6, 15)), now);
        assert_eq!(policy, CachePolicy::ShortPublic);
        assert_eq!(policy.header_value(), "public, max-age=600");
    }

    #[test]
    fn test_range_ending_in_future_is_short_lived() {
        let now = at(2024, 6, 15, 12, 0);
        let policy = CachePolicy::for_range(&range_to(date(2024, 7, 1)), now);
        assert_eq!(policy, CachePolicy::ShortPublic);
    }

    #[test]
    fn test_historical_range_is_immutable() {
        let now = at(2024, 6, 15, 12, 0);
        let policy = CachePolicy::for_range(&range_to(date(2024, 6, 14)), now);
        assert_eq!(policy, CachePolicy::LongImmutable);
        assert_eq!(
            policy.header_value(),
            "public, max-age=31536000, immutable"
        );
    }

    #[test]
    fn test_grace_period_keeps_yesterday_short_lived_after_midnight() {
        // 00:30 UTC: one hour ago is still yesterday, whose aggregates may
        // not be finalized yet.
        let now = at(2024, 6, 15, 0, 30);
        let policy = CachePolicy::for_range(&range_to(date(2024, 6, 14)), now);
        assert_eq!(policy, CachePolicy::ShortPublic);
    }

    #[test]
    fn test_yesterday_becomes_immutable_after_grace_period() {
        let now = at(2024, 6, 15, 1, 30);
        let policy = CachePolicy::for_range(&range_to(date(2024, 6, 14)), now);
        assert_eq!(policy, CachePolicy::LongImmutable);
    }
}
