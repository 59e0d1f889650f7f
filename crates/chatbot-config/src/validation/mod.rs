//! Full configuration validation.
//!
//! Validates numeric ranges, URLs and the course platform list, collecting
//! all errors into a single `ConfigError`.

mod helpers;
mod sections;

#[cfg(test)]
mod tests;

use crate::schema::ChatbotConfig;
use chatbot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChatbotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_model(&mut errors, config);
    sections::validate_search(&mut errors, config);
    sections::validate_courses(&mut errors, config);
    sections::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
