//! Thin wrappers around `inquire` for the two prompts the tool needs.

use anyhow::Result;
use inquire::{Text, validator::Validation};

/// Pure validator: `Err` carries the rejection message shown to the user.
pub type Validator = fn(&str) -> Result<(), String>;

/// Prompt for one line of text. Rejected input re-asks with the validator's
/// message, without limit; submitting empty input with a `default` set yields
/// the default.
pub fn text(message: &str, default: Option<&str>, validator: Validator) -> Result<String> {
    let mut prompt = Text::new(message).with_validator(move |input: &str| {
        match validator(input) {
            Ok(()) => Ok(Validation::Valid),
            Err(msg) => Ok(Validation::Invalid(msg.into())),
        }
    });

    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }

    Ok(prompt.prompt()?)
}

/// Exit prompt shown after a successful run. Enter (or Esc) dismisses it.
pub fn pause() -> Result<()> {
    let _ = Text::new("Press <Enter> to exit").prompt_skippable()?;
    Ok(())
}
