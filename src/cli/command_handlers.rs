use crate::api::client::ReviewClient;
use crate::api::state::ApiState;
use crate::cli::dispatcher::Overrides;
use crate::cli::main_types::ConfigCommands;
use crate::core::services::auth_service::AuthService;
use crate::core::services::config_service::ConfigService;
use crate::error::{AppError, CliError};
use crate::storage::config::Config;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Pretty JSON for stdout
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Cli(CliError::Output(format!("Failed to format JSON: {}", e))))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}

#[derive(Default)]
pub struct ApiHandler;

impl ApiHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn current_user(&self, auth_service: &AuthService) -> Result<(), AppError> {
        debug!("fetching current user");
        let user = auth_service.current_user().await?;
        print_json(&user)
    }

    pub async fn logout(&self, auth_service: &mut AuthService) -> Result<(), AppError> {
        auth_service.logout().await?;
        println!("Logged out.");
        Ok(())
    }

    pub async fn versions(
        &self,
        client: &ReviewClient,
        state: &ApiState,
        addon_id: u64,
    ) -> Result<(), AppError> {
        debug!(addon_id, "listing versions");
        let versions = client.get_versions_list(state, addon_id).await?;
        print_json(&versions)
    }

    pub async fn version(
        &self,
        client: &ReviewClient,
        state: &ApiState,
        addon_id: u64,
        version_id: u64,
        file: Option<&str>,
    ) -> Result<(), AppError> {
        debug!(addon_id, version_id, ?file, "fetching version");
        let version = client.get_version(state, addon_id, version_id, file).await?;
        print_json(&version)
    }

    /// `ids` is (addon, base version, head version)
    pub async fn diff(
        &self,
        client: &ReviewClient,
        state: &ApiState,
        ids: (u64, u64, u64),
        file: Option<&str>,
    ) -> Result<(), AppError> {
        let (addon_id, base_version_id, head_version_id) = ids;
        debug!(addon_id, base_version_id, head_version_id, ?file, "fetching diff");
        let diff = client
            .get_diff(state, addon_id, base_version_id, head_version_id, file)
            .await?;
        print_json(&diff)
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        effective: &Config,
        overrides: &Overrides,
        has_token: bool,
        config_path: Option<PathBuf>,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                println!("{}", render_config(effective, has_token));
                Ok(())
            }
            ConfigCommands::Set {
                insecure_proxy,
                proxy_origin,
            } => {
                let mut updated_fields = Vec::new();

                if let Some(host) = &overrides.host {
                    config_service.set_api_host(host.clone())?;
                    updated_fields.push(format!("host to: {}", host));
                }
                if let Some(enabled) = insecure_proxy {
                    config_service.set_use_insecure_proxy(enabled);
                    updated_fields.push(format!("insecure proxy to: {}", enabled));
                }
                if let Some(origin) = proxy_origin {
                    config_service.set_proxy_origin(origin.clone())?;
                    updated_fields.push(format!("proxy origin to: {}", origin));
                }
                if let Some(version) = &overrides.api_version {
                    config_service.set_api_version(version.clone())?;
                    updated_fields.push(format!("API version to: {}", version));
                }
                if let Some(lang) = &overrides.lang {
                    config_service.set_api_lang(lang.clone())?;
                    updated_fields.push(format!("language to: {}", lang));
                }

                if updated_fields.is_empty() {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "No configuration values provided. Use --host, --insecure-proxy, --proxy-origin, --api-version or --lang".to_string(),
                    )));
                }

                config_service.save_config(config_path)?;
                println!("Set {}", updated_fields.join(", "));
                println!("Configuration saved successfully.");
                Ok(())
            }
        }
    }
}

/// Human-readable view of the effective configuration
pub fn render_config(config: &Config, has_token: bool) -> String {
    let host = config.effective_api_host();
    let host_line = if host.is_empty() {
        format!("(relative to {})", config.get_proxy_origin())
    } else {
        host
    };

    let mut lines = vec![
        "Current Configuration:".to_string(),
        "=====================".to_string(),
        format!("API Host: {}", host_line),
        format!("Insecure Proxy: {}", config.uses_insecure_proxy()),
        format!("API Version: {}", config.get_api_version()),
        format!("Language: {}", config.get_api_lang()),
    ];
    lines.push(if has_token {
        "Auth Token: Set".to_string()
    } else {
        "Auth Token: Not set".to_string()
    });
    lines.join("\n")
}
