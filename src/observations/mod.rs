use chrono::NaiveDate;
use url::Url;

use crate::core::conversions::{coerce_observation_value, parse_observation_date};
use crate::core::{
    AggregationMethod, FredClient, FredError, Frequency, Observation, ObservationsMeta,
    ObservationsResponse, RawObservation, SortOrder, Units, net,
};

mod wire;

/// A builder for fetching the observations of a single FRED series.
///
/// Each terminal call performs exactly one HTTP GET: resolve the API key,
/// build the request URL, execute, gate on the content type, parse, surface
/// any service-reported error, and shape the rows. There is no retry, no
/// caching, and no pagination loop; `limit`/`offset` are passed straight to
/// the service.
///
/// # Example
///
/// ```no_run
/// # use fredapi_rs::{FredClient, ObservationsBuilder};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FredClient::builder().api_key("abcdef").build()?;
/// let obs = ObservationsBuilder::new(&client, "GDP").fetch().await?;
/// println!("{} observations", obs.len());
/// # Ok(())
/// # }
/// ```
pub struct ObservationsBuilder<'a> {
    client: &'a FredClient,
    series_id: String,
    api_key: Option<String>,
    observation_start: Option<NaiveDate>,
    observation_end: Option<NaiveDate>,
    sort_order: Option<SortOrder>,
    limit: Option<u32>,
    offset: Option<u32>,
    units: Option<Units>,
    frequency: Option<Frequency>,
    aggregation: Option<AggregationMethod>,
}

impl<'a> ObservationsBuilder<'a> {
    pub fn new(client: &'a FredClient, series_id: impl Into<String>) -> Self {
        Self {
            client,
            series_id: series_id.into(),
            api_key: None,
            observation_start: None,
            observation_end: None,
            sort_order: None,
            limit: None,
            offset: None,
            units: None,
            frequency: None,
            aggregation: None,
        }
    }

    /// Use this API key for this call only, ahead of the client-configured
    /// key and the environment fallback.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Earliest observation date to return (`observation_start`).
    #[must_use]
    pub fn observation_start(mut self, date: NaiveDate) -> Self {
        self.observation_start = Some(date);
        self
    }

    /// Latest observation date to return (`observation_end`).
    #[must_use]
    pub fn observation_end(mut self, date: NaiveDate) -> Self {
        self.observation_end = Some(date);
        self
    }

    /// Row order; the service default is ascending by date.
    #[must_use]
    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    /// Maximum number of rows the service should return (1 to 100000).
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Row offset into the service-side result set.
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Value transformation applied by the service (`units`).
    #[must_use]
    pub fn units(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }

    /// Aggregate observations to a lower frequency (`frequency`).
    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// How values are combined when aggregating (`aggregation_method`).
    /// Only meaningful together with [`frequency`](Self::frequency).
    #[must_use]
    pub fn aggregation(mut self, method: AggregationMethod) -> Self {
        self.aggregation = Some(method);
        self
    }

    /// Fetch the observations with the value column coerced to numbers.
    ///
    /// The service's missing-data placeholder (`"."`) becomes `None`; an
    /// unparseable date fails the whole call.
    ///
    /// # Errors
    ///
    /// See [`FredError`] for the failure kinds; none of them leave a partial
    /// result.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(series_id = %self.series_id))
    )]
    pub async fn fetch(self) -> Result<Vec<Observation>, FredError> {
        let resp = self.fetch_full().await?;
        Ok(resp.observations)
    }

    /// Fetch the observations with the value column left as the original
    /// strings, exactly as returned by the service.
    ///
    /// Dates are still parsed strictly; only the value (and the per-row
    /// realtime fields) pass through untouched.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`fetch`](Self::fetch).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(series_id = %self.series_id))
    )]
    pub async fn fetch_raw(self) -> Result<Vec<RawObservation>, FredError> {
        let mut env = self.request_envelope().await?;
        let rows = env.observations.take().ok_or_else(missing_observations)?;
        rows.into_iter()
            .map(|row| {
                Ok(RawObservation {
                    date: parse_observation_date(&row.date)?,
                    value: row.value,
                    realtime_start: row.realtime_start,
                    realtime_end: row.realtime_end,
                })
            })
            .collect()
    }

    /// Fetch the observations plus the envelope metadata FRED returns with
    /// them (realtime period, requested window, units, count/offset/limit).
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`fetch`](Self::fetch).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(series_id = %self.series_id))
    )]
    pub async fn fetch_full(self) -> Result<ObservationsResponse, FredError> {
        let mut env = self.request_envelope().await?;
        let rows = env.observations.take().ok_or_else(missing_observations)?;

        let meta = ObservationsMeta {
            realtime_start: parse_optional_date(env.realtime_start.as_deref())?,
            realtime_end: parse_optional_date(env.realtime_end.as_deref())?,
            observation_start: parse_optional_date(env.observation_start.as_deref())?,
            observation_end: parse_optional_date(env.observation_end.as_deref())?,
            units: env.units,
            order_by: env.order_by,
            sort_order: env.sort_order,
            count: env.count,
            offset: env.offset,
            limit: env.limit,
        };

        let observations = rows
            .into_iter()
            .map(|row| {
                Ok(Observation {
                    date: parse_observation_date(&row.date)?,
                    value: coerce_observation_value(&row.value),
                    realtime_start: parse_optional_date(row.realtime_start.as_deref())?,
                    realtime_end: parse_optional_date(row.realtime_end.as_deref())?,
                })
            })
            .collect::<Result<Vec<_>, FredError>>()?;

        Ok(ObservationsResponse { observations, meta })
    }

    /// Credential resolution, URL construction, GET, content-type gate,
    /// parse, and remote-error surfacing. Row order is whatever the API
    /// returned.
    async fn request_envelope(&self) -> Result<wire::ObservationsEnvelope, FredError> {
        // All-or-nothing, before any network activity.
        let api_key = self.client.resolve_api_key(self.api_key.as_deref())?;

        let url = self.build_url(&api_key);

        let resp = self.client.http().get(url.clone()).send().await?;
        let (status, body) = net::get_json_text(resp).await?;

        let parsed: wire::ObservationsEnvelope = serde_json::from_str(&body)
            .map_err(|e| FredError::Protocol(format!("observations json parse error: {e}")))?;

        // A JSON error envelope is valid JSON but not a valid observation
        // set; it also arrives with a non-2xx status, so check it first to
        // keep the service's own message.
        if let Some(code) = parsed.error_code {
            return Err(FredError::Remote {
                code: code.to_string(),
                message: parsed.error_message.unwrap_or_default(),
            });
        }

        if !status.is_success() {
            return Err(FredError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(parsed)
    }

    /// Pure request construction; every parameter is percent-encoded.
    fn build_url(&self, api_key: &str) -> Url {
        let mut url = self.client.base_observations().clone();
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("series_id", &self.series_id);
            qp.append_pair("api_key", api_key);
            qp.append_pair("file_type", "json");

            if let Some(d) = self.observation_start {
                qp.append_pair("observation_start", &d.to_string());
            }
            if let Some(d) = self.observation_end {
                qp.append_pair("observation_end", &d.to_string());
            }
            if let Some(order) = self.sort_order {
                qp.append_pair("sort_order", order.as_str());
            }
            if let Some(limit) = self.limit {
                qp.append_pair("limit", &limit.to_string());
            }
            if let Some(offset) = self.offset {
                qp.append_pair("offset", &offset.to_string());
            }
            if let Some(units) = self.units {
                qp.append_pair("units", units.as_str());
            }
            if let Some(frequency) = self.frequency {
                qp.append_pair("frequency", frequency.as_str());
            }
            if let Some(method) = self.aggregation {
                qp.append_pair("aggregation_method", method.as_str());
            }
        }
        url
    }
}

fn missing_observations() -> FredError {
    FredError::Protocol("payload contains neither observations nor an error envelope".into())
}

fn parse_optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, FredError> {
    raw.map(parse_observation_date).transpose()
}
