//! Configuration service for reading and updating the config file

use crate::AppError;
use crate::storage::config::Config;
use crate::utils::validation::{validate_api_version, validate_lang, validate_url};
use std::path::PathBuf;

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_api_host(&mut self, host: String) -> Result<(), AppError> {
        validate_url(&host)?;
        self.config.api_host = Some(host.trim_end_matches('/').to_string());
        Ok(())
    }

    pub fn set_use_insecure_proxy(&mut self, enabled: bool) {
        self.config.use_insecure_proxy = Some(enabled);
    }

    pub fn set_proxy_origin(&mut self, origin: String) -> Result<(), AppError> {
        validate_url(&origin)?;
        self.config.proxy_origin = Some(origin);
        Ok(())
    }

    pub fn set_api_version(&mut self, version: String) -> Result<(), AppError> {
        validate_api_version(&version)?;
        self.config.api_version = Some(version);
        Ok(())
    }

    pub fn set_api_lang(&mut self, lang: String) -> Result<(), AppError> {
        validate_lang(&lang)?;
        self.config.api_lang = Some(lang);
        Ok(())
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }
}
