//! Core components of the `fredapi-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FredClient`] and its builder.
//! - The primary [`FredError`] type.
//! - Shared data models like [`Observation`] and [`ObservationsResponse`].
//! - Internal networking and value-coercion logic.

/// The main client (`FredClient`), builder, and configuration.
pub mod client;
/// Helpers for parsing dates and coercing observation values.
pub mod conversions;
/// The primary error type (`FredError`) for the crate.
pub mod error;
/// Shared data models (`Observation`, `ObservationsResponse`, parameter enums).
pub mod models;

pub(crate) mod net;

#[cfg(feature = "dataframe")]
pub mod dataframe;

// convenient re-exports so most code can just `use crate::core::FredClient`
pub use client::{FredClient, FredClientBuilder};
pub use error::FredError;
pub use models::{
    AggregationMethod, Frequency, Observation, ObservationsMeta, ObservationsResponse,
    RawObservation, SortOrder, Units,
};
