//! Date range normalization for statistics endpoints.
//!
//! Turns raw, possibly-absent `from`/`to` query parameters into a canonical
//! [`DateRange`], or decides that the caller must be redirected to the
//! canonical URL for the range. The decision is returned as an explicit
//! [`Outcome`] so handlers and tests can pattern-match on it instead of
//! relying on interleaved early returns.
//!
//! # Normalization Steps
//!
//! 1. **Defaulting**: an absent `to` becomes today's UTC calendar date; an
//!    absent `from` becomes the (possibly just defaulted) `to`. Any applied
//!    default produces a `302 Found` redirect — defaults are cheap to
//!    recompute and "today" changes daily, so the redirect itself is only
//!    briefly cacheable.
//! 2. **Validation**: each supplied value must be either a bare `YYYY-MM-DD`
//!    date or a millisecond-precision UTC instant
//!    (`YYYY-MM-DDThh:mm:ss.sssZ`). Anything else is a 400.
//! 3. **Canonicalization**: instants are truncated to their calendar date;
//!    any truncation produces a `301 Moved Permanently` redirect, since the
//!    mapping from instant to date is a stable identity.
//! 4. Otherwise the canonical range is served.

use axum::http::StatusCode;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use url::form_urlencoded;

use crate::domain::cache_policy::CachePolicy;
use crate::error::AppError;

static BARE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

static UTC_INSTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$").expect("valid regex")
});

/// Human-readable description of the accepted wire formats, used in 400 bodies.
pub const ACCEPTED_FORMATS: &str = "YYYY-MM-DD or YYYY-MM-DDThh:mm:ss.sssZ";

/// A canonical, inclusive calendar date range.
///
/// Both bounds are date-only values; no time component or timezone offset
/// survives normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Why a redirect to the canonical URL is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// `to` was absent and defaulted to today's UTC date.
    MissingTo,
    /// `from` was absent and defaulted to the (possibly defaulted) `to`.
    MissingFrom,
    /// At least one value carried a timestamp suffix that was truncated.
    TimestampTrimmed,
}

impl RedirectReason {
    /// Status code of the redirect response.
    ///
    /// Defaulted parameters are a transient mapping (302); a trimmed
    /// timestamp maps permanently to the same canonical URL (301).
    pub fn status(self) -> StatusCode {
        match self {
            Self::MissingTo | Self::MissingFrom => StatusCode::FOUND,
            Self::TimestampTrimmed => StatusCode::MOVED_PERMANENTLY,
        }
    }

    /// Cache directive of the redirect response itself.
    pub fn cache_policy(self) -> CachePolicy {
        match self {
            Self::MissingTo | Self::MissingFrom => CachePolicy::ShortPublic,
            Self::TimestampTrimmed => CachePolicy::LongImmutable,
        }
    }
}

/// A redirect to the canonical URL for the requested range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRedirect {
    pub reason: RedirectReason,
    pub location: String,
}

/// Result of normalizing the raw `from`/`to` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The caller must be redirected; no query is executed.
    Redirect(CanonicalRedirect),
    /// The range is canonical and can be queried directly.
    Serve(DateRange),
}

/// A single parsed parameter, tracking whether a timestamp was truncated.
enum Parsed {
    Bare(NaiveDate),
    Trimmed(NaiveDate),
}

impl Parsed {
    fn date(&self) -> NaiveDate {
        match self {
            Self::Bare(d) | Self::Trimmed(d) => *d,
        }
    }
}

/// Normalizes raw `from`/`to` query parameters against `path`.
///
/// `today` is the UTC calendar date of the instant the request is handled;
/// it is injected rather than read from the clock so the decision stays a
/// pure function.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when a supplied value matches neither
/// accepted format; the message names the offending parameter. Malformed
/// values are never silently coerced.
pub fn normalize(
    from_raw: Option<&str>,
    to_raw: Option<&str>,
    path: &str,
    today: NaiveDate,
) -> Result<Outcome, AppError> {
    // Step 1: defaulting. Validation is deliberately skipped here; the
    // redirect target carries the raw supplied value and the follow-up
    // request validates it.
    let (from_raw, to_raw) = match (from_raw, to_raw) {
        (Some(from), Some(to)) => (from, to),
        (from_raw, to_raw) => {
            let reason = if to_raw.is_none() {
                RedirectReason::MissingTo
            } else {
                RedirectReason::MissingFrom
            };
            let to = match to_raw {
                Some(raw) => raw.to_string(),
                None => today.to_string(),
            };
            let from = match from_raw {
                Some(raw) => raw.to_string(),
                None => to.clone(),
            };
            return Ok(Outcome::Redirect(CanonicalRedirect {
                reason,
                location: redirect_location(path, &from, &to),
            }));
        }
    };

    // Step 2: format validation.
    let from = parse_param("from", from_raw)?;
    let to = parse_param("to", to_raw)?;

    let range = DateRange {
        from: from.date(),
        to: to.date(),
    };

    // Step 3: redirect-on-trim.
    if matches!(from, Parsed::Trimmed(_)) || matches!(to, Parsed::Trimmed(_)) {
        return Ok(Outcome::Redirect(CanonicalRedirect {
            reason: RedirectReason::TimestampTrimmed,
            location: redirect_location(path, &range.from.to_string(), &range.to.to_string()),
        }));
    }

    // Step 4: canonical range, ready to query.
    Ok(Outcome::Serve(range))
}

/// Parses one parameter against the two accepted wire formats.
///
/// The anchored regexes reject non-canonical shapes (`2024-1-5`, missing
/// milliseconds, offsets other than `Z`) that chrono alone would accept;
/// chrono then rejects shapes that are not real calendar dates
/// (`2024-02-30`).
fn parse_param(name: &'static str, raw: &str) -> Result<Parsed, AppError> {
    if BARE_DATE.is_match(raw) {
        let date =
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| malformed(name, raw))?;
        return Ok(Parsed::Bare(date));
    }

    if UTC_INSTANT.is_match(raw) {
        let instant = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.3fZ")
            .map_err(|_| malformed(name, raw))?;
        return Ok(Parsed::Trimmed(instant.date()));
    }

    Err(malformed(name, raw))
}

fn malformed(name: &'static str, raw: &str) -> AppError {
    AppError::bad_request(
        format!("Query parameter '{name}' must be {ACCEPTED_FORMATS}"),
        json!({ "parameter": name, "value": raw }),
    )
}

/// Builds the redirect target with query parameters in canonical
/// `from`-then-`to` order, percent-encoded as needed.
fn redirect_location(path: &str, from: &str, to: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("from", from)
        .append_pair("to", to)
        .finish();
    format!("{path}?{query}")
}
