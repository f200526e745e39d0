use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::WeatherError;

use super::WeatherProvider;

/// Current-weather endpoint of the free OpenWeather API.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Same provider against a different endpoint, e.g. a local test server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<Value, WeatherError> {
        debug!(%city, "requesting current weather from OpenWeather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        debug!(%status, bytes = body.len(), "received OpenWeather response");

        decode_response(status, body)
    }
}

/// Split the response: 2xx bodies must parse as JSON, anything else is
/// reported with the raw body preserved.
fn decode_response(status: StatusCode, body: String) -> Result<Value, WeatherError> {
    if !status.is_success() {
        return Err(WeatherError::Status { status, body });
    }

    Ok(serde_json::from_str(&body)?)
}
