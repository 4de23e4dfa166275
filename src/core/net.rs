use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use crate::core::error::FredError;

/// Gate a response on its declared content type, then read the body as text.
///
/// A response that does not declare `application/json` never reaches the JSON
/// parser; FRED falls back to HTML or XML error pages for some bad requests,
/// and those must not be fed to serde. The gate applies to every response,
/// 2xx or not, so the caller can still surface the service's own error
/// envelope on non-2xx JSON bodies.
pub(crate) async fn get_json_text(
    resp: reqwest::Response,
) -> Result<(StatusCode, String), FredError> {
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if !content_type.starts_with("application/json") {
        return Err(FredError::Protocol(format!(
            "FRED did not return JSON (content type '{content_type}'); check API key and series id"
        )));
    }

    let text = resp.text().await?;
    Ok((status, text))
}
