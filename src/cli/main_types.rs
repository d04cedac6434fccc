use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "review-cli")]
#[command(about = "Command line client for the add-on code review API")]
#[command(version)]
#[command(after_help = "Examples:
  review-cli user                           # Show the current user
  review-cli versions 502955                # List versions of an add-on
  review-cli version 502955 1541798         # Show one version
  review-cli version 502955 1541798 --file manifest.json
  review-cli diff 502955 1541794 1541798    # Compare two versions
  review-cli logout                         # Invalidate the server session
  review-cli config set --host https://addons.example.test

Environment Variables:
  REVIEW_API_TOKEN           Bearer token for authentication
  REVIEW_API_HOST            API host
  REVIEW_USE_INSECURE_PROXY  Send requests through the local proxy
  REVIEW_PROXY_ORIGIN        Origin of the local proxy
  REVIEW_API_VERSION         API version (default v5)
  REVIEW_API_LANG            API language (default en-US)")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Bearer token for authentication
    #[arg(long, global = true, env = "REVIEW_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API host, overrides configuration
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// API language, overrides configuration
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// API version, overrides configuration
    #[arg(long, global = true)]
    pub api_version: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the user the token belongs to
    User,
    /// List the versions of an add-on
    Versions {
        /// Add-on ID
        addon_id: u64,
    },
    /// Show one version of an add-on
    Version {
        /// Add-on ID
        addon_id: u64,
        /// Version ID
        version_id: u64,
        /// File inside the version to select
        #[arg(long)]
        file: Option<String>,
    },
    /// Compare two versions of an add-on
    Diff {
        /// Add-on ID
        addon_id: u64,
        /// Version to compare from
        base_version_id: u64,
        /// Version to compare to
        head_version_id: u64,
        /// File inside the versions to compare
        #[arg(long)]
        file: Option<String>,
    },
    /// Invalidate the server session for the token
    Logout,
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Save configuration values. Host, version and language are taken from
    /// the global --host, --api-version and --lang flags.
    #[command(after_help = "Examples:
  review-cli config set --host https://addons.example.test
  review-cli config set --insecure-proxy true --proxy-origin http://localhost:3000
  review-cli --api-version v5 --lang fr config set")]
    Set {
        /// Route requests through the local proxy
        #[arg(long)]
        insecure_proxy: Option<bool>,
        /// Origin of the local proxy
        #[arg(long)]
        proxy_origin: Option<String>,
    },
}
