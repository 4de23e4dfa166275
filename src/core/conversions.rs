//! Conversion utilities for the two typed columns of an observation row.
//!
//! The two helpers deliberately have opposite policies. Dates index the
//! series, so an unparseable date fails the whole fetch. Values carry the
//! service's missing-data convention (a `"."` placeholder), so anything that
//! is not a finite numeric literal coerces to `None` instead of erroring.

use chrono::NaiveDate;

use crate::core::error::FredError;

/// Date format of every date field in the observations payload.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The service's placeholder for "no data available" in a `value` field.
const MISSING_VALUE_PLACEHOLDER: &str = ".";

/// Parse an observation date (`YYYY-MM-DD`). Strict: failure is an error.
///
/// # Errors
///
/// Returns [`FredError::Format`] when the string is not a valid calendar date
/// in the service's format.
pub fn parse_observation_date(raw: &str) -> Result<NaiveDate, FredError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| FredError::Format(format!("invalid observation date '{raw}': {e}")))
}

/// Coerce an observation value to a number. Lenient: never an error.
///
/// Returns `None` for the `"."` placeholder, empty/blank strings, non-numeric
/// text, and non-finite parses.
#[must_use]
pub fn coerce_observation_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == MISSING_VALUE_PLACEHOLDER {
        return None;
    }
    let v = trimmed.parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}
