use chrono::NaiveDate;

use crate::core::{FredClient, FredError, Observation, SortOrder};
use crate::observations::ObservationsBuilder;

/// A high-level handle for a single FRED series.
///
/// A `Series` is created with a [`FredClient`] and a series id (e.g. `"GDP"`
/// or `"CPIAUCSL"`). It offers the common fetch shapes directly and hands out
/// an [`ObservationsBuilder`] when the full parameter surface is needed.
///
/// # Example
///
/// ```no_run
/// # use fredapi_rs::{FredClient, Series};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FredClient::builder().api_key("abcdef").build()?;
/// let gdp = Series::new(&client, "GDP");
///
/// let all = gdp.fetch().await?;
/// println!("{} observations of {}", all.len(), gdp.id());
///
/// if let Some(last) = gdp.latest().await? {
///     println!("latest: {} = {:?}", last.date, last.value);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Series {
    client: FredClient,
    series_id: String,
}

impl Series {
    /// Creates a new `Series` for a given series id.
    pub fn new(client: &FredClient, series_id: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            series_id: series_id.into(),
        }
    }

    /// The series id this handle was created with.
    pub fn id(&self) -> &str {
        &self.series_id
    }

    /// Start a fully parameterized observations request for this series.
    pub fn observations(&self) -> ObservationsBuilder<'_> {
        ObservationsBuilder::new(&self.client, self.series_id.clone())
    }

    /// Fetch every observation of the series, values coerced to numbers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// shaped; see [`FredError`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(series_id = %self.series_id))
    )]
    pub async fn fetch(&self) -> Result<Vec<Observation>, FredError> {
        self.observations().fetch().await
    }

    /// Fetch the observations dated within `[start, end]`, inclusive.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`fetch`](Self::fetch).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(series_id = %self.series_id))
    )]
    pub async fn between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>, FredError> {
        self.observations()
            .observation_start(start)
            .observation_end(end)
            .fetch()
            .await
    }

    /// Fetch the most recent observation, or `None` for an empty series.
    ///
    /// The returned value can still be `None` inside the row when the latest
    /// entry is the service's missing-data placeholder.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`fetch`](Self::fetch).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(series_id = %self.series_id))
    )]
    pub async fn latest(&self) -> Result<Option<Observation>, FredError> {
        let rows = self
            .observations()
            .sort_order(SortOrder::Desc)
            .limit(1)
            .fetch()
            .await?;
        Ok(rows.into_iter().next())
    }
}
