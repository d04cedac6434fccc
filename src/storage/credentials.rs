//! Auth token lookup
//!
//! The bearer token comes from `--token` or the REVIEW_API_TOKEN environment
//! variable. Nothing is written to disk.

use std::env;

pub const TOKEN_ENV: &str = "REVIEW_API_TOKEN";

/// Get the auth token from the environment, if set and non-empty
pub fn get_auth_token() -> Option<String> {
    env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty())
}

/// Effective token: command-line value first, then the environment
pub fn resolve_auth_token(cli_token: Option<String>) -> Option<String> {
    cli_token.filter(|t| !t.is_empty()).or_else(get_auth_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the environment is never mutated concurrently
    #[test]
    fn test_token_resolution() {
        let original = env::var(TOKEN_ENV).ok();

        unsafe {
            env::set_var(TOKEN_ENV, "env_token");
        }
        assert_eq!(get_auth_token(), Some("env_token".to_string()));
        assert_eq!(
            resolve_auth_token(Some("cli_token".to_string())),
            Some("cli_token".to_string())
        );
        assert_eq!(
            resolve_auth_token(Some(String::new())),
            Some("env_token".to_string())
        );

        unsafe {
            env::set_var(TOKEN_ENV, "");
        }
        assert_eq!(get_auth_token(), None);

        unsafe {
            env::remove_var(TOKEN_ENV);
        }
        assert_eq!(resolve_auth_token(None), None);

        unsafe {
            match original {
                Some(value) => env::set_var(TOKEN_ENV, value),
                None => env::remove_var(TOKEN_ENV),
            }
        }
    }
}
