/// HTTP client, URL helpers and `call_api`
pub mod client;

/// Fixed-path endpoint wrappers around `call_api`
pub mod endpoints;

/// Response payload models
pub mod models;

/// Auth token and language carried into every call
pub mod state;
