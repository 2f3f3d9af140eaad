//! Error types and error handling for the Sonar engine.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes)
//! is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for Sonar operations
pub type Result<T> = std::result::Result<T, SonarError>;

/// Main error type for the Sonar engine
#[derive(Error, Debug)]
pub enum SonarError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Unreadable file: {0}")]
    UnreadableFile(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SonarError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Stable identifier for serialized error descriptors
    pub fn kind(&self) -> &'static str {
        match self {
            SonarError::InvalidPattern(_) => "invalid_pattern",
            SonarError::AccessDenied(_) => "access_denied",
            SonarError::NotFound(_) => "not_found",
            SonarError::InvalidTarget(_) => "invalid_target",
            SonarError::UnreadableFile(_) => "unreadable_file",
            SonarError::InvalidParameter(_) => "invalid_parameter",
            SonarError::ConfigError(_) => "config_error",
            SonarError::IoError(_) | SonarError::SerdeError(_) | SonarError::TomlError(_) => {
                "internal"
            }
        }
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SonarError::NotFound(_))
    }

    /// Check if the request tried to leave the project root
    pub fn is_forbidden(&self) -> bool {
        matches!(self, SonarError::AccessDenied(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SonarError::InvalidPattern(_)
                | SonarError::InvalidTarget(_)
                | SonarError::InvalidParameter(_)
                | SonarError::ConfigError(_)
        )
    }
}
