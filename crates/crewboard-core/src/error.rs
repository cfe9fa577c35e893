//! Core error types for crewboard-core.
//!
//! This module defines the error hierarchy using thiserror
//! for error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for crewboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Solver API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Solver-API-specific errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request never reached the backend or the connection dropped
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("Solver returned {status} for '{endpoint}': {body}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body could not be decoded
    #[error("Failed to decode response from '{endpoint}': {message}")]
    Decode { endpoint: String, message: String },

    /// Base URL is not a valid absolute URL
    #[error("Invalid solver URL '{url}': {message}")]
    BaseUrl { url: String, message: String },

    /// Solve-start response was not a UUID job id
    #[error("Solver returned an invalid job id: '{0}'")]
    JobId(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Platform config directory could not be determined
    #[error("Config directory could not be determined")]
    NoConfigDir,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
