//! Error types for deploy-check operations.
//!
//! This module defines [`DeployCheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Checks never return these errors: they convert every failure into a
//!   failed [`CheckOutcome`](crate::checks::CheckOutcome)
//! - Commands propagate `DeployCheckError` up to `main`, which reports it
//!   and exits with status 1

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deploy-check operations.
#[derive(Debug, Error)]
pub enum DeployCheckError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An external tool could not be spawned because it is not on PATH.
    #[error("{tool} is not installed or not on PATH")]
    ToolNotFound { tool: String },

    /// External command exited with a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        /// Combined stdout and stderr of the failed command.
        output: String,
    },

    /// Source directory for the orphan scan does not exist.
    #[error("Source directory not found: {path}")]
    SourceDirNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for deploy-check operations.
pub type Result<T> = std::result::Result<T, DeployCheckError>;
