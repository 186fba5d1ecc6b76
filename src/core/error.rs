//! Error types for orrery
//!
//! This module provides structured error handling using thiserror.
//! Only catalog loading and configuration can fail; intent resolution and the
//! shell report "no match" or "not found" as ordinary values.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog and configuration operations
pub type Result<T> = std::result::Result<T, OrreryError>;

/// Errors that can occur while building the solar system model
#[derive(Error, Debug)]
pub enum OrreryError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog source file does not exist
    #[error("Catalog source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// A catalog source could be read but its records are malformed
    #[error("Invalid data structure in {source_name}: {message}")]
    InvalidSource {
        source_name: String,
        message: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<OrreryError>,
    },
}

impl OrreryError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        OrreryError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an invalid source error
    pub fn invalid_source(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        OrreryError::InvalidSource {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        OrreryError::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}
