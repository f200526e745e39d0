//! Reusable input validators for interactive prompts.
//!
//! A validator is a pure function from candidate input to acceptance or a
//! rejection message. The prompt layer re-asks until a validator accepts, so
//! rejection is never a program error.

use url::Url;

/// Rejects empty and whitespace-only input.
pub fn non_empty(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        Err("Value must not be empty.".to_string())
    } else {
        Ok(())
    }
}

/// Rejects anything that is not a well-formed absolute `http`/`https` URL.
pub fn absolute_http_url(input: &str) -> Result<(), String> {
    non_empty(input)?;

    let url = Url::parse(input.trim())
        .map_err(|_| format!("'{}' is not a valid absolute URL.", input.trim()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!(
            "URL scheme must be http or https, got '{other}'."
        )),
    }
}
