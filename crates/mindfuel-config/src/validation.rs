// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as address shapes, URL schemes, and TLS modes.

use crate::diagnostic::ConfigError;
use crate::model::MindfuelConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &MindfuelConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate admin_email looks like an email address
    let admin = config.job.admin_email.trim();
    if admin.is_empty() {
        errors.push(ConfigError::Validation {
            message: "job.admin_email must not be empty".to_string(),
        });
    } else if !admin.contains('@') {
        errors.push(ConfigError::Validation {
            message: format!("job.admin_email `{admin}` is not a valid email address"),
        });
    }

    // Validate quote provider base_url has an HTTP scheme
    let base_url = config.quotes.base_url.trim();
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!(
                "quotes.base_url `{base_url}` must start with http:// or https://"
            ),
        });
    }

    // Validate SMTP settings
    if config.mail.smtp_host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "mail.smtp_host must not be empty".to_string(),
        });
    }

    if config.mail.smtp_port == 0 {
        errors.push(ConfigError::Validation {
            message: "mail.smtp_port must not be 0".to_string(),
        });
    }

    if !matches!(config.mail.tls.as_str(), "starttls" | "tls" | "none") {
        errors.push(ConfigError::Validation {
            message: format!(
                "mail.tls must be one of starttls, tls, none; got `{}`",
                config.mail.tls
            ),
        });
    }

    // Validate database_path is not empty
    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
