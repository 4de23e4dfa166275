use chrono::NaiveDate;
use serde::Serialize;

/* ----- OBSERVATIONS (shared by observations/ and series/) ----- */

/// One observation with the value coerced to a number.
///
/// `value: None` is the missing-value sentinel: FRED marks gaps with a `"."`
/// placeholder, and coercion maps that (and anything else that is not a
/// finite numeric literal) to `None` rather than failing the fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: Option<f64>,
    pub realtime_start: Option<NaiveDate>,
    pub realtime_end: Option<NaiveDate>,
}

/// One observation with the value left exactly as the service returned it.
///
/// The date column is still parsed strictly; only `value` (and the realtime
/// bookkeeping fields) pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawObservation {
    pub date: NaiveDate,
    pub value: String,
    pub realtime_start: Option<String>,
    pub realtime_end: Option<String>,
}

/// Envelope metadata FRED returns alongside the observation rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationsMeta {
    pub realtime_start: Option<NaiveDate>,
    pub realtime_end: Option<NaiveDate>,
    pub observation_start: Option<NaiveDate>,
    pub observation_end: Option<NaiveDate>,
    pub units: Option<String>,
    pub order_by: Option<String>,
    pub sort_order: Option<String>,
    pub count: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// A full observations response: rows in API order plus envelope metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationsResponse {
    pub observations: Vec<Observation>,
    pub meta: ObservationsMeta,
}

/* ----- REQUEST PARAMS (so series/ doesn't import observations/) ----- */

/// Row order of the returned observations (`sort_order`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Data value transformation (`units`), using FRED's own short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    /// Levels (no transformation).
    Lin,
    /// Change.
    Chg,
    /// Change from a year ago.
    Ch1,
    /// Percent change.
    Pch,
    /// Percent change from a year ago.
    Pc1,
    /// Compounded annual rate of change.
    Pca,
    /// Continuously compounded rate of change.
    Cch,
    /// Continuously compounded annual rate of change.
    Cca,
    /// Natural log.
    Log,
}

impl Units {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Units::Lin => "lin",
            Units::Chg => "chg",
            Units::Ch1 => "ch1",
            Units::Pch => "pch",
            Units::Pc1 => "pc1",
            Units::Pca => "pca",
            Units::Cch => "cch",
            Units::Cca => "cca",
            Units::Log => "log",
        }
    }
}

/// Frequency to aggregate observations to (`frequency`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl Frequency {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "d",
            Frequency::Weekly => "w",
            Frequency::Biweekly => "bw",
            Frequency::Monthly => "m",
            Frequency::Quarterly => "q",
            Frequency::Semiannual => "sa",
            Frequency::Annual => "a",
        }
    }
}

/// How values are aggregated when a `frequency` is set
/// (`aggregation_method`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationMethod {
    Average,
    Sum,
    EndOfPeriod,
}

impl AggregationMethod {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            AggregationMethod::Average => "avg",
            AggregationMethod::Sum => "sum",
            AggregationMethod::EndOfPeriod => "eop",
        }
    }
}
