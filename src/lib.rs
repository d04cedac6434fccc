//! # review-cli
//!
//! Client for the add-on code review REST API.
//!
//! ```rust,ignore
//! use review_cli::prelude::*;
//!
//! let client = ReviewClient::new("https://addons.example.test".to_string())?;
//! let state = ApiState::new("en-US").with_token("token");
//! let user = client.get_current_user(&state).await?;
//! ```

pub use error::AppError;

/// Layers (dependency flow: CLI → Core → API/Storage)
pub mod cli; // Command-line interface
pub mod core; // Services owning mutable state
pub mod storage; // Configuration and token lookup

/// Support modules (used across layers)
pub mod api; // Review API client
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

/// Commonly used types in a single import
pub mod prelude {
    pub use crate::Result;
    pub use crate::api::client::{
        ApiResponse, CallApiParams, MakeApiUrl, ReviewClient, get_api_host, is_error_response,
        make_api_url,
    };
    pub use crate::api::models::{User, Version, VersionsListItem};
    pub use crate::api::state::ApiState;
    pub use crate::error::{ApiError, AppError};
    pub use crate::storage::config::Config;
}

pub type Result<T> = std::result::Result<T, AppError>;
