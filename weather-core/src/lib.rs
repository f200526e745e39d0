//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The error taxonomy for the request/response path
//! - Input validators used by the interactive prompts
//! - The weather provider abstraction and its OpenWeather implementation
//!
//! It is used by `weather-cli`, but can also be reused by other binaries.
//! All terminal I/O lives in the binary crate; nothing here touches
//! stdin/stdout.

pub mod error;
pub mod provider;
pub mod validate;

pub use error::WeatherError;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};

pub use reqwest::StatusCode;
