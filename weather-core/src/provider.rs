use crate::error::WeatherError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

pub mod openweather;

/// Abstraction over a weather HTTP service.
///
/// The payload stays an untyped JSON tree: the CLI renders whatever the
/// service returned, it does not interpret it. The trait is also the seam
/// tests use to stand in for the real HTTP client.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current weather for a free-form city/location name.
    async fn current_weather(&self, city: &str) -> Result<Value, WeatherError>;
}
