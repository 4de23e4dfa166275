use polars::prelude::*;

use crate::core::models::{Observation, ObservationsResponse};

/// Trait for converting observation data into Polars DataFrames.
///
/// The `value` column is `Float64` with nulls standing in for the service's
/// missing-data placeholder, so the DataFrame carries the same
/// missing-value semantics as [`Observation`].
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;

    /// Creates an empty DataFrame with the correct schema for this type.
    fn empty_dataframe() -> PolarsResult<DataFrame>
    where
        Self: Sized;

    /// Returns the flattened schema for this type.
    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>>
    where
        Self: Sized;
}

fn observations_to_dataframe(observations: &[Observation]) -> PolarsResult<DataFrame> {
    let dates = DateChunked::from_naive_date(
        "date".into(),
        observations.iter().map(|o| o.date),
    )
    .into_series()
    .into_column();

    let values = Column::new(
        "value".into(),
        observations.iter().map(|o| o.value).collect::<Vec<_>>(),
    );

    let realtime_start = DateChunked::from_naive_date_options(
        "realtime_start".into(),
        observations.iter().map(|o| o.realtime_start),
    )
    .into_series()
    .into_column();

    let realtime_end = DateChunked::from_naive_date_options(
        "realtime_end".into(),
        observations.iter().map(|o| o.realtime_end),
    )
    .into_series()
    .into_column();

    DataFrame::new(vec![dates, values, realtime_start, realtime_end])
}

fn empty_observations_dataframe() -> PolarsResult<DataFrame> {
    let columns = Vec::<Observation>::schema()?
        .into_iter()
        .map(|(name, dtype)| Series::new_empty(name.into(), &dtype).into_column())
        .collect();
    DataFrame::new(columns)
}

fn observations_schema() -> Vec<(&'static str, DataType)> {
    vec![
        ("date", DataType::Date),
        ("value", DataType::Float64),
        ("realtime_start", DataType::Date),
        ("realtime_end", DataType::Date),
    ]
}

impl ToDataFrame for Vec<Observation> {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        observations_to_dataframe(self)
    }

    fn empty_dataframe() -> PolarsResult<DataFrame> {
        empty_observations_dataframe()
    }

    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>> {
        Ok(observations_schema())
    }
}

impl ToDataFrame for ObservationsResponse {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        observations_to_dataframe(&self.observations)
    }

    fn empty_dataframe() -> PolarsResult<DataFrame> {
        empty_observations_dataframe()
    }

    fn schema() -> PolarsResult<Vec<(&'static str, DataType)>> {
        Ok(observations_schema())
    }
}
