use crate::api::client::ReviewClient;
use crate::api::state::ApiState;
use crate::cli::command_handlers::{ApiHandler, ConfigHandler};
use crate::cli::main_types::Commands;
use crate::core::services::auth_service::AuthService;
use crate::core::services::config_service::ConfigService;
use crate::error::AppError;
use crate::storage::config::Config;
use crate::utils::validation::{validate_api_version, validate_lang, validate_url};
use std::path::PathBuf;
use tracing::debug;

/// Values given on the command line that win over env and file config
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub lang: Option<String>,
    pub api_version: Option<String>,
}

impl Overrides {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(host) = &self.host {
            validate_url(host)?;
        }
        if let Some(lang) = &self.lang {
            validate_lang(lang)?;
        }
        if let Some(version) = &self.api_version {
            validate_api_version(version)?;
        }
        Ok(())
    }

    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(host) = &self.host {
            config.api_host = Some(host.clone());
        }
        if let Some(lang) = &self.lang {
            config.api_lang = Some(lang.clone());
        }
        if let Some(version) = &self.api_version {
            config.api_version = Some(version.clone());
        }
        config
    }
}

pub struct Dispatcher {
    /// Config as stored on disk, what `config set` writes back
    file_config: Config,
    /// File config with env and CLI overrides applied
    config: Config,
    config_path: Option<PathBuf>,
    overrides: Overrides,
    token: Option<String>,
}

impl Dispatcher {
    pub fn new(
        file_config: Config,
        config_path: Option<PathBuf>,
        overrides: Overrides,
        token: Option<String>,
    ) -> Self {
        Self::with_env(file_config, config_path, overrides, token, |name| {
            std::env::var(name).ok()
        })
    }

    pub fn with_env<F>(
        file_config: Config,
        config_path: Option<PathBuf>,
        overrides: Overrides,
        token: Option<String>,
        lookup: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = overrides.apply(file_config.clone().with_env_overrides(lookup));
        Self {
            file_config,
            config,
            config_path,
            overrides,
            token,
        }
    }

    pub fn effective_config(&self) -> &Config {
        &self.config
    }

    pub fn create_client(&self) -> Result<ReviewClient, AppError> {
        let host = self.config.effective_api_host();
        let mut client =
            ReviewClient::new(host.clone())?.with_default_version(self.config.get_api_version());

        if host.is_empty() {
            let origin = self.config.get_proxy_origin();
            debug!(%origin, "using relative API URLs against proxy origin");
            client = client.with_origin(&origin)?;
        } else {
            debug!(%host, "using API host");
        }
        Ok(client)
    }

    pub fn create_state(&self) -> ApiState {
        let state = ApiState::new(self.config.get_api_lang());
        match &self.token {
            Some(token) => state.with_token(token.clone()),
            None => state,
        }
    }

    fn create_auth_service(&self) -> Result<AuthService, AppError> {
        Ok(AuthService::new(self.create_client()?, self.create_state()))
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        self.overrides.validate()?;

        match command {
            Commands::Config { command } => {
                let handler = ConfigHandler::new();
                let mut config_service = ConfigService::new(self.file_config.clone());
                handler.handle(
                    command,
                    &mut config_service,
                    &self.config,
                    &self.overrides,
                    self.token.is_some(),
                    self.config_path.clone(),
                )
            }
            Commands::Logout => {
                let mut auth_service = self.create_auth_service()?;
                ApiHandler::new().logout(&mut auth_service).await
            }
            Commands::User => {
                let auth_service = self.create_auth_service()?;
                ApiHandler::new().current_user(&auth_service).await
            }
            Commands::Versions { addon_id } => {
                let handler = ApiHandler::new();
                handler
                    .versions(&self.create_client()?, &self.create_state(), addon_id)
                    .await
            }
            Commands::Version {
                addon_id,
                version_id,
                file,
            } => {
                let handler = ApiHandler::new();
                handler
                    .version(
                        &self.create_client()?,
                        &self.create_state(),
                        addon_id,
                        version_id,
                        file.as_deref(),
                    )
                    .await
            }
            Commands::Diff {
                addon_id,
                base_version_id,
                head_version_id,
                file,
            } => {
                let handler = ApiHandler::new();
                handler
                    .diff(
                        &self.create_client()?,
                        &self.create_state(),
                        (addon_id, base_version_id, head_version_id),
                        file.as_deref(),
                    )
                    .await
            }
        }
    }
}
