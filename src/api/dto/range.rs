//! Raw date range query parameters.

use serde::Deserialize;

/// Raw `from`/`to` query parameters as supplied by the caller.
///
/// Both are kept as strings; validation and canonicalization happen in
/// [`crate::domain::date_range::normalize`], never in deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}
