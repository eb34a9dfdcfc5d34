//! # App Error Types
//!
//! Errors that can stop a Shopfront run.
//!
//! Business failures (out of stock, empty cart, low balance) are NOT here:
//! they are printed as `Error: ...` and the run carries on. Only broken
//! configuration, broken sample data or a closed stdout end the process.

use shopfront_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for the CLI.
pub type AppResult<T> = Result<T, AppError>;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `ShopConfig`.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but breaks a rule (e.g. negative shipping rate).
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Fatal run errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The built-in sample catalog failed validation.
    #[error("Invalid sample data: {0}")]
    Seed(#[from] CoreError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
