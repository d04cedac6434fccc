//! Input validation utilities
//!
//! This module validates configuration values and command-line input
//! before they reach the API client.

use crate::error::{CliError, ConfigError};

/// Validate that a host is an absolute http(s) URL
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

/// Validate an API version segment such as `v5`
pub fn validate_api_version(version: &str) -> crate::Result<()> {
    let digits = version.strip_prefix('v').unwrap_or("");
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidValue {
            field: "api_version".to_string(),
            value: version.to_string(),
            reason: "expected 'v' followed by digits, e.g. v5".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Validate a language code such as `en-US`
pub fn validate_lang(lang: &str) -> crate::Result<()> {
    if lang.is_empty() || !lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ConfigError::InvalidValue {
            field: "api_lang".to_string(),
            value: lang.to_string(),
            reason: "expected a language tag such as en-US".to_string(),
        }
        .into());
    }
    Ok(())
}
