use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every failure is terminal for the call that produced it; the crate never
/// retries and never returns a partial observation set. The one deliberately
/// tolerant path is numeric coercion of observation values, which maps the
/// service's missing-data placeholder to `None` instead of erroring.
#[derive(Debug, Error)]
pub enum FredError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// No API key was resolvable from the call, the client, or the
    /// environment lookup.
    #[error("API key missing: {0}")]
    Config(String),

    /// The transport succeeded but the response is not the expected format
    /// (non-JSON content type, malformed JSON, or a JSON body without an
    /// observation set).
    #[error("Unexpected response format: {0}")]
    Protocol(String),

    /// FRED itself reported a logical error (bad series id, bad key, ...).
    /// `message` is the service's `error_message`, verbatim.
    #[error("FRED error {code}: {message}")]
    Remote {
        /// The payload's `error_code`, rendered as text.
        code: String,
        /// The payload's `error_message`, untouched.
        message: String,
    },

    /// A field with a fixed shape (an observation date) could not be parsed.
    #[error("Data format unexpected: {0}")]
    Format(String),

    /// The server returned a non-2xx status with no FRED error envelope.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },
}
