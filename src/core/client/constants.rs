//! Centralized constants for the default endpoint, UA, and key discovery.

/// Plain library UA; FRED does not gate on browser user agents.
pub(crate) const USER_AGENT: &str = concat!("fredapi-rs/", env!("CARGO_PKG_VERSION"));

/// FRED series observations endpoint (the series id goes in the query string).
pub(crate) const DEFAULT_BASE_OBSERVATIONS: &str =
    "https://api.stlouisfed.org/fred/series/observations";

/// Environment variable consulted when no API key is configured explicitly.
pub(crate) const API_KEY_ENV: &str = "FRED_API_KEY";

/// Where to request a (free) API key.
pub(crate) const API_KEY_DOCS_URL: &str = "https://fred.stlouisfed.org/docs/api/api_key.html";
