use crate::error::ApiError;

/// Helper functions for standardizing error conversions across the codebase.
/// Every converted error carries the HTTP method and the caller's path.
/// Convert reqwest errors to ApiError with request context
pub fn convert_request_error(
    error: reqwest::Error,
    method: &str,
    path: &str,
    timeout_secs: u64,
) -> ApiError {
    if error.is_timeout() {
        return convert_timeout_error(method, path, timeout_secs);
    }
    ApiError::Network {
        method: method.to_string(),
        path: path.to_string(),
        message: error.to_string(),
    }
}

/// Convert timeout errors to ApiError with request context
pub fn convert_timeout_error(method: &str, path: &str, timeout_secs: u64) -> ApiError {
    ApiError::Timeout {
        method: method.to_string(),
        path: path.to_string(),
        timeout_secs,
    }
}

/// Convert JSON deserialization errors to ApiError with request context
pub fn convert_json_error(error: serde_json::Error, method: &str, path: &str) -> ApiError {
    ApiError::Decode {
        method: method.to_string(),
        path: path.to_string(),
        message: error.to_string(),
    }
}

/// Convert URL parse errors to ApiError
pub fn convert_url_error(error: impl std::fmt::Display, url: &str) -> ApiError {
    ApiError::InvalidUrl {
        url: url.to_string(),
        message: error.to_string(),
    }
}
