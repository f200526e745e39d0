use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between sending the request and handing a
/// parsed JSON value back to the caller. Every variant is terminal for the
/// run; nothing is retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The service answered with a non-2xx status. `body` is the raw response
    /// text, kept verbatim so the caller can show it to the user.
    #[error("{body}")]
    Status { status: StatusCode, body: String },

    /// Transport-level failure: connect, TLS, or reading the body.
    #[error("request to weather service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered 2xx but the body was not valid JSON.
    #[error("weather service returned invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
