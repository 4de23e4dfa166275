//! Public client surface + builder.
//! `constants` holds the endpoint/UA defaults and key-discovery strings.

mod constants;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::FredError;
use constants::{API_KEY_DOCS_URL, API_KEY_ENV, DEFAULT_BASE_OBSERVATIONS, USER_AGENT};

/// Named-variable lookup used for the environment fallback of the API key.
///
/// Injected so the credential path is testable without touching the real
/// process environment.
type KeyLookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// HTTP client plus endpoint and credential configuration.
///
/// Cheap to clone; holds no per-request state. The API key is resolved fresh
/// on every call (explicit per-call key, then the key configured here, then
/// the `FRED_API_KEY` lookup), never cached across calls.
#[derive(Clone)]
pub struct FredClient {
    http: Client,
    base_observations: Url,
    api_key: Option<String>,
    key_lookup: Arc<KeyLookup>,
}

impl fmt::Debug for FredClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FredClient")
            .field("base_observations", &self.base_observations.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl Default for FredClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FredClient {
    /// Create a new builder.
    pub fn builder() -> FredClientBuilder {
        FredClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_observations(&self) -> &Url {
        &self.base_observations
    }

    /// Resolve the API key for one call: per-call override, then the key
    /// configured on this client, then the `FRED_API_KEY` lookup. Blank
    /// strings count as absent at every level, and resolution happens before
    /// any network activity.
    pub(crate) fn resolve_api_key(&self, call_key: Option<&str>) -> Result<String, FredError> {
        if let Some(k) = non_blank(call_key) {
            return Ok(k.to_owned());
        }
        if let Some(k) = non_blank(self.api_key.as_deref()) {
            return Ok(k.to_owned());
        }
        let looked_up = (self.key_lookup)(API_KEY_ENV);
        if let Some(k) = non_blank(looked_up.as_deref()) {
            return Ok(k.to_owned());
        }
        Err(FredError::Config(format!(
            "no API key was provided and {API_KEY_ENV} is not set; \
             request a free key at {API_KEY_DOCS_URL}"
        )))
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FredClientBuilder {
    user_agent: Option<String>,
    base_observations: Option<Url>,
    api_key: Option<String>,
    key_lookup: Option<Arc<KeyLookup>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FredClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the observations endpoint
    /// (e.g. `https://api.stlouisfed.org/fred/series/observations`).
    pub fn base_observations(mut self, url: Url) -> Self {
        self.base_observations = Some(url);
        self
    }

    /// Configure an API key on the client. A per-call key set on the request
    /// builder still takes precedence.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Replace the environment lookup used as the last credential fallback.
    ///
    /// Defaults to `std::env::var`. Supplying a closure here keeps tests away
    /// from the real process environment.
    pub fn api_key_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.key_lookup = Some(Arc::new(lookup));
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// A missing API key is not an error here: the key is request-scoped and
    /// checked when a fetch is issued.
    ///
    /// # Errors
    ///
    /// Fails only if the endpoint URL cannot be parsed or the underlying HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<FredClient, FredError> {
        let base_observations = self
            .base_observations
            .unwrap_or(Url::parse(DEFAULT_BASE_OBSERVATIONS)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FredClient {
            http,
            base_observations,
            api_key: self.api_key,
            key_lookup: self
                .key_lookup
                .unwrap_or_else(|| Arc::new(|name: &str| std::env::var(name).ok())),
        })
    }
}
