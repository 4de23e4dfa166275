use std::fmt;

use serde::Deserialize;

/* --- Internal response mapping (only fields we need) --- */

#[derive(Deserialize)]
pub(crate) struct ObservationsEnvelope {
    #[serde(default)]
    pub(crate) error_code: Option<ErrorCode>,
    #[serde(default)]
    pub(crate) error_message: Option<String>,
    #[serde(default)]
    pub(crate) realtime_start: Option<String>,
    #[serde(default)]
    pub(crate) realtime_end: Option<String>,
    #[serde(default)]
    pub(crate) observation_start: Option<String>,
    #[serde(default)]
    pub(crate) observation_end: Option<String>,
    #[serde(default)]
    pub(crate) units: Option<String>,
    #[serde(default)]
    pub(crate) order_by: Option<String>,
    #[serde(default)]
    pub(crate) sort_order: Option<String>,
    #[serde(default)]
    pub(crate) count: Option<u64>,
    #[serde(default)]
    pub(crate) offset: Option<u64>,
    #[serde(default)]
    pub(crate) limit: Option<u64>,
    #[serde(default)]
    pub(crate) observations: Option<Vec<ObsRow>>,
}

/// One row as FRED serializes it: every field is a string, including the
/// value (missing data is the string `"."`, not JSON null).
#[derive(Deserialize)]
pub(crate) struct ObsRow {
    #[serde(default)]
    pub(crate) realtime_start: Option<String>,
    #[serde(default)]
    pub(crate) realtime_end: Option<String>,
    pub(crate) date: String,
    pub(crate) value: String,
}

/// FRED documents `error_code` as an integer, but the envelope contract only
/// promises "non-null", so accept a string rendition too.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorCode {
    Int(i64),
    Text(String),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Int(n) => write!(f, "{n}"),
            ErrorCode::Text(s) => f.write_str(s),
        }
    }
}
