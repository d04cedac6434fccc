//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Standard conversions from transport and decode errors to `ApiError`
pub mod error_helpers;

/// Tracing subscriber setup for the binary
pub mod logging;

/// Input validation for hosts, versions and languages
pub mod validation;
