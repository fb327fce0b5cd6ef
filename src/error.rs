//! Error types for emits operations.
//!
//! This module defines [`EmitsError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `EmitsError` for failures that stop an operation (reading, parsing
//!   or writing the document)
//! - Validation problems are not errors of this type; they are collected as
//!   [`ValidationError`](crate::config::ValidationError) values
//! - Use `anyhow::Error` (via `EmitsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for emits operations.
#[derive(Debug, Error)]
pub enum EmitsError {
    /// Build document not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the build document.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to render the build document.
    #[error("Failed to serialize config: {message}")]
    ConfigSerializeError { message: String },

    /// The build document failed validation.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Refused to replace an existing build document.
    #[error("Configuration already exists: {path}")]
    ConfigExists { path: PathBuf },

    /// Referenced script does not exist.
    #[error("Unknown script: {name}")]
    UnknownScript { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for emits operations.
pub type Result<T> = std::result::Result<T, EmitsError>;
