//! fredapi-rs: ergonomic FRED (Federal Reserve Economic Data) client.
//!
//! Fetches series observations from the St. Louis Fed's
//! `fred/series/observations` endpoint and returns them as typed rows:
//! calendar dates plus numeric values, with the service's `"."`
//! missing-data placeholder surfaced as `None` instead of a parse error.
//!
//! The high-level entry point is [`Series`]; [`ObservationsBuilder`] exposes
//! the full set of request parameters.
//!
//! ```no_run
//! use fredapi_rs::{FredClient, Series};
//!
//! # async fn run() -> Result<(), fredapi_rs::FredError> {
//! let client = FredClient::builder().api_key("my-key").build()?;
//! let observations = Series::new(&client, "GDP").fetch().await?;
//! for obs in observations {
//!     println!("{} {:?}", obs.date, obs.value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod observations;
pub mod series;

pub use crate::core::{
    AggregationMethod, FredClient, FredClientBuilder, FredError, Frequency, Observation,
    ObservationsMeta, ObservationsResponse, RawObservation, SortOrder, Units,
};
pub use observations::ObservationsBuilder;
pub use series::Series;

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
