//! Configuration management
//!
//! Priority for every value: CLI argument > environment variable >
//! config.toml > built-in default.

use super::Result;
use crate::api::client::{DEFAULT_API_LANG, DEFAULT_API_VERSION, get_api_host};
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const HOST_ENV: &str = "REVIEW_API_HOST";
pub const INSECURE_PROXY_ENV: &str = "REVIEW_USE_INSECURE_PROXY";
pub const PROXY_ORIGIN_ENV: &str = "REVIEW_PROXY_ORIGIN";
pub const VERSION_ENV: &str = "REVIEW_API_VERSION";
pub const LANG_ENV: &str = "REVIEW_API_LANG";

pub const DEFAULT_PROXY_ORIGIN: &str = "http://localhost:3000";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Backend host, e.g. https://addons.example.test
    pub api_host: Option<String>,
    /// Route requests through the local proxy instead of `api_host`
    pub use_insecure_proxy: Option<bool>,
    /// Origin of the local proxy
    pub proxy_origin: Option<String>,
    pub api_version: Option<String>,
    pub api_lang: Option<String>,
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("review-cli");
        Ok(app_config_dir.join("config.toml"))
    }

    /// Overlay environment values on top of the file values. `lookup` is
    /// `std::env::var` in the binary and a map in tests.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(host) = get(HOST_ENV) {
            self.api_host = Some(host);
        }
        if let Some(flag) = get(INSECURE_PROXY_ENV).as_deref().and_then(parse_flag) {
            self.use_insecure_proxy = Some(flag);
        }
        if let Some(origin) = get(PROXY_ORIGIN_ENV) {
            self.proxy_origin = Some(origin);
        }
        if let Some(version) = get(VERSION_ENV) {
            self.api_version = Some(version);
        }
        if let Some(lang) = get(LANG_ENV) {
            self.api_lang = Some(lang);
        }
        self
    }

    pub fn uses_insecure_proxy(&self) -> bool {
        self.use_insecure_proxy.unwrap_or(false)
    }

    /// Host the client should prefix URLs with; empty means "relative to the
    /// proxy origin"
    pub fn effective_api_host(&self) -> String {
        get_api_host(
            self.api_host.as_deref().filter(|h| !h.is_empty()),
            self.uses_insecure_proxy(),
        )
    }

    pub fn get_proxy_origin(&self) -> String {
        self.proxy_origin
            .clone()
            .unwrap_or_else(|| DEFAULT_PROXY_ORIGIN.to_string())
    }

    pub fn get_api_version(&self) -> String {
        self.api_version
            .clone()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string())
    }

    pub fn get_api_lang(&self) -> String {
        self.api_lang
            .clone()
            .unwrap_or_else(|| DEFAULT_API_LANG.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_host.is_none());
        assert!(!config.uses_insecure_proxy());
        assert_eq!(config.get_api_version(), "v5");
        assert_eq!(config.get_api_lang(), "en-US");
        assert_eq!(config.get_proxy_origin(), DEFAULT_PROXY_ORIGIN);
        assert_eq!(config.effective_api_host(), "");
    }

    #[test]
    fn test_effective_host_with_proxy() {
        let mut config = Config {
            api_host: Some("https://addons.example.test".to_string()),
            ..Config::default()
        };
        assert_eq!(config.effective_api_host(), "https://addons.example.test");

        config.use_insecure_proxy = Some(true);
        assert_eq!(config.effective_api_host(), "");
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = Config {
            api_host: Some("https://file.example.test".to_string()),
            api_lang: Some("de".to_string()),
            ..Config::default()
        }
        .with_env_overrides(lookup(&[
            (HOST_ENV, "https://env.example.test"),
            (VERSION_ENV, "v4"),
            (INSECURE_PROXY_ENV, "true"),
            (LANG_ENV, ""),
        ]));

        assert_eq!(config.api_host.as_deref(), Some("https://env.example.test"));
        assert_eq!(config.get_api_version(), "v4");
        assert!(config.uses_insecure_proxy());
        // empty env values do not override
        assert_eq!(config.get_api_lang(), "de");
    }

    #[test]
    fn test_unparseable_flag_is_ignored() {
        let config = Config {
            use_insecure_proxy: Some(true),
            ..Config::default()
        }
        .with_env_overrides(lookup(&[(INSECURE_PROXY_ENV, "maybe")]));
        assert!(config.uses_insecure_proxy());
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            api_host: Some("https://addons.example.test".to_string()),
            use_insecure_proxy: Some(false),
            proxy_origin: None,
            api_version: Some("v5".to_string()),
            api_lang: Some("fr".to_string()),
        };

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load(Some(nonexistent_path)).expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "api_host = [").expect("write");

        let result = Config::load(Some(config_path));
        assert!(matches!(result, Err(StorageError::ConfigParseError { .. })));
    }
}
