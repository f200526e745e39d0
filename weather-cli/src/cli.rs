use anyhow::Result;
use clap::Parser;
use serde_json::Value;
use std::io::Write;
use tracing::debug;
use weather_core::{OpenWeatherProvider, WeatherError, WeatherProvider, validate};

use crate::{prompt, render};

/// Default city offered by the prompt.
const DEFAULT_CITY: &str = "Pforzheim";

/// Top-level CLI struct. The tool is fully interactive: no flags beyond the
/// clap-provided `--help`/`--version`.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Interactive OpenWeather lookup for the terminal"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> Result<()> {
        render::banner()?;

        let api_key = prompt::text("OpenWeather API key:", None, validate::non_empty)?;
        let city = prompt::text("City:", Some(DEFAULT_CITY), validate::non_empty)?;

        debug!(%city, "inputs collected, fetching");

        let provider = OpenWeatherProvider::new(api_key);
        let result = provider.current_weather(&city).await;

        if result.is_ok() {
            // Fresh screen for the payload, same as on startup.
            render::banner()?;
        }

        let success = report(&city, result, &mut std::io::stdout(), &mut std::io::stderr())?;

        if success {
            prompt::pause()?;
        }

        Ok(())
    }
}

/// Report stage of the flow: success prints the payload panel to `out`,
/// every failure prints one red line to `err`. Returns whether the run
/// succeeded; both outcomes map to exit code 0.
fn report(
    title: &str,
    result: Result<Value, WeatherError>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool> {
    match result {
        Ok(value) => {
            let body = serde_json::to_string_pretty(&value)?;
            writeln!(out, "{}", render::json_panel(title, &body))?;
            Ok(true)
        }
        Err(WeatherError::Status { body, .. }) => {
            writeln!(err, "{}", render::error_text(&body))?;
            Ok(false)
        }
        Err(e) => {
            writeln!(err, "{}", render::error_text(&e.to_string()))?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use weather_core::StatusCode;

    /// Stands in for the HTTP-backed provider.
    #[derive(Debug)]
    enum StubProvider {
        Payload(Value),
        Failure(StatusCode, &'static str),
        Garbage,
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current_weather(&self, _city: &str) -> Result<Value, WeatherError> {
            match self {
                StubProvider::Payload(v) => Ok(v.clone()),
                StubProvider::Failure(status, body) => Err(WeatherError::Status {
                    status: *status,
                    body: (*body).to_string(),
                }),
                StubProvider::Garbage => Err(WeatherError::Json(
                    serde_json::from_str::<Value>("<html>oops</html>").unwrap_err(),
                )),
            }
        }
    }

    async fn run_report(provider: &dyn WeatherProvider) -> (String, String, bool) {
        let result = provider.current_weather("Pforzheim").await;

        let mut out = Vec::new();
        let mut err = Vec::new();
        let success = report("Pforzheim", result, &mut out, &mut err).expect("report must not fail");

        (
            String::from_utf8(out).expect("stdout is utf-8"),
            String::from_utf8(err).expect("stderr is utf-8"),
            success,
        )
    }

    #[tokio::test]
    async fn success_renders_json_panel_and_no_error_line() {
        let provider = StubProvider::Payload(json!({"temp": 21.5}));

        let (out, err, success) = run_report(&provider).await;

        assert!(success);
        assert!(out.contains("\"temp\": 21.5"));
        assert!(out.contains("Pforzheim"));
        assert!(err.is_empty());
    }

    #[tokio::test]
    async fn http_failure_prints_raw_body_and_no_panel() {
        let provider = StubProvider::Failure(StatusCode::UNAUTHORIZED, "Invalid API key");

        let (out, err, success) = run_report(&provider).await;

        assert!(!success);
        assert!(out.is_empty());
        assert!(err.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn transport_failure_prints_error_description() {
        let provider = StubProvider::Garbage;

        let (out, err, success) = run_report(&provider).await;

        assert!(!success);
        assert!(out.is_empty());
        assert!(err.contains("invalid JSON"));
    }
}
