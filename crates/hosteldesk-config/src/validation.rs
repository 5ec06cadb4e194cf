// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as a well-formed base URL and a usable timeout.

use crate::diagnostic::ConfigError;
use crate::model::HosteldeskConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &HosteldeskConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not be empty".to_string(),
        });
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("api.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if config.api.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "api.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.session.state_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "session.state_dir must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.client.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "client.log_level `{}` is not one of {}",
                config.client.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
