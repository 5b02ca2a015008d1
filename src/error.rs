//! Error types for plugin health checks.
//!
//! This module defines [`CheckError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - [`CheckError::PluginsUnavailable`] is the one failure the health check
//!   itself produces; its message is the collaborator's report, verbatim
//! - Config and IO variants cover loading the probe's configuration
//! - Use `anyhow::Error` (via `CheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for plugin health checks.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The availability collaborator reported that required plugins are missing.
    #[error("{report}")]
    PluginsUnavailable { report: String },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for health check operations.
pub type Result<T> = std::result::Result<T, CheckError>;
