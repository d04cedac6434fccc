use clap::Parser;
use review_cli::cli::dispatcher::{Dispatcher, Overrides};
use review_cli::cli::main_types::Cli;
use review_cli::storage::config::Config;
use review_cli::storage::credentials::resolve_auth_token;
use review_cli::utils::logging::init_logging;
use std::path::PathBuf;
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if let Some(config_dir) = &cli.config_dir {
        debug!(%config_dir, "using config directory");
    }

    let token = resolve_auth_token(cli.token);
    if token.is_some() {
        debug!("using auth token provided via env or command line");
    }

    let overrides = Overrides {
        host: cli.host,
        lang: cli.lang,
        api_version: cli.api_version,
    };
    let dispatcher = Dispatcher::new(config, config_path, overrides, token);

    // Execute the command
    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
