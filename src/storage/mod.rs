//! Storage layer for review-cli
//!
//! Handles the TOML configuration file and the auth token lookup.
//! The token is read from the environment only and never persisted.

use crate::error::StorageError;

pub mod config;
pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
