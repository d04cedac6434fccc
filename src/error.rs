use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("AuthError: {0}")]
    Auth(#[from] AuthError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Output error: {0}")]
    Output(String),
}

/// Failures of a single API call. Returned as values, never retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to create HTTP client: {message}")]
    ClientInit { message: String },
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
    #[error("Network error for {method} {path}: {message}")]
    Network {
        method: String,
        path: String,
        message: String,
    },
    #[error("Request {method} {path} timed out after {timeout_secs}s")]
    Timeout {
        method: String,
        path: String,
        timeout_secs: u64,
    },
    #[error("Unexpected status for {method} {path}: {status}")]
    UnexpectedStatus {
        method: String,
        path: String,
        status: u16,
    },
    #[error("Failed to decode response for {method} {path}: {message}")]
    Decode {
        method: String,
        path: String,
        message: String,
    },
}

impl ApiError {
    /// HTTP status of the failed call, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Auth token cannot be empty")]
    EmptyToken,
    #[error("Not authenticated")]
    NotAuthenticated,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::ClientInit { .. } => ErrorSeverity::Critical,
                ApiError::UnexpectedStatus { status: 401 | 403, .. } => ErrorSeverity::High,
                ApiError::UnexpectedStatus { status, .. } if *status >= 500 => {
                    ErrorSeverity::High
                }
                _ => ErrorSeverity::Medium,
            },
            AppError::Auth(_) => ErrorSeverity::High,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(ApiError::UnexpectedStatus { status: 401, .. })
            | AppError::Auth(AuthError::NotAuthenticated) => {
                Some("Pass --token or set REVIEW_API_TOKEN and try again".to_string())
            }
            AppError::Api(ApiError::Network { .. } | ApiError::Timeout { .. }) => {
                Some("Check the API host with 'review-cli config show'".to_string())
            }
            AppError::Api(ApiError::InvalidUrl { .. }) => Some(
                "Set an absolute host with 'review-cli config set --host <url>'".to_string(),
            ),
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Fix or remove the configuration file".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = ApiError::UnexpectedStatus {
            method: "GET".to_string(),
            path: "/path".to_string(),
            status: 400,
        };
        assert_eq!(format!("{}", err), "Unexpected status for GET /path: 400");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::Network {
            method: "DELETE".to_string(),
            path: "/accounts/session/".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(
            format!("{}", err),
            "Network error for DELETE /accounts/session/: connection refused"
        );
    }

    #[test]
    fn test_app_error_wraps_api_error() {
        let app_err: AppError = ApiError::UnexpectedStatus {
            method: "GET".to_string(),
            path: "/accounts/profile/".to_string(),
            status: 401,
        }
        .into();
        assert_eq!(
            format!("{}", app_err),
            "ApiError: Unexpected status for GET /accounts/profile/: 401"
        );
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert!(app_err.troubleshooting_hint().is_some());
    }

    #[test]
    fn test_severity_by_status() {
        let server: AppError = ApiError::UnexpectedStatus {
            method: "GET".to_string(),
            path: "/x".to_string(),
            status: 502,
        }
        .into();
        assert_eq!(server.severity(), ErrorSeverity::High);

        let missing: AppError = ApiError::UnexpectedStatus {
            method: "GET".to_string(),
            path: "/x".to_string(),
            status: 404,
        }
        .into();
        assert_eq!(missing.severity(), ErrorSeverity::Medium);
        assert!(missing.troubleshooting_hint().is_none());

        let init: AppError = ApiError::ClientInit {
            message: "tls".to_string(),
        }
        .into();
        assert_eq!(init.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_config_error_fields() {
        let config_err = ConfigError::InvalidValue {
            field: "api_lang".to_string(),
            value: "".to_string(),
            reason: "cannot be empty".to_string(),
        };
        if let ConfigError::InvalidValue {
            field,
            value,
            reason,
        } = config_err
        {
            assert_eq!(field, "api_lang");
            assert_eq!(value, "");
            assert_eq!(reason, "cannot be empty");
        }
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            format!("{}", AppError::Auth(AuthError::EmptyToken)),
            "AuthError: Auth token cannot be empty"
        );
    }
}
