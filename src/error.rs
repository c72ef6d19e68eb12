//! Error types for Skiff operations.
//!
//! This module defines [`SkiffError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SkiffError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SkiffError::Other`) for unexpected errors
//! - Malformed placeholder syntax is never an error: it degrades to literal
//!   text (see [`crate::config::placeholder`])

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Skiff operations.
#[derive(Debug, Error)]
pub enum SkiffError {
    /// Deployment file not found at the given location.
    #[error("Deployment file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a deployment file.
    #[error("Failed to parse deployment file at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Deployment file extension is neither JSON nor YAML.
    #[error("Unsupported deployment file format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    /// Structurally invalid deployment content (e.g. root is not a mapping).
    #[error("Invalid deployment config: {message}")]
    ConfigValidationError { message: String },

    /// Requested environment is absent from the deployment config.
    #[error("Environment not found: {name}")]
    EnvironmentNotFound { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Skiff operations.
pub type Result<T> = std::result::Result<T, SkiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = SkiffError::ConfigNotFound {
            path: PathBuf::from("/conf/deployment.json"),
        };
        assert!(err.to_string().contains("/conf/deployment.json"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = SkiffError::ConfigParseError {
            path: PathBuf::from("/conf/deployment.yaml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/conf/deployment.yaml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unsupported_format_displays_path() {
        let err = SkiffError::UnsupportedFormat {
            path: PathBuf::from("/conf/deployment.toml"),
        };
        assert!(err.to_string().contains("/conf/deployment.toml"));
    }

    #[test]
    fn environment_not_found_displays_name() {
        let err = SkiffError::EnvironmentNotFound {
            name: "staging".into(),
        };
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SkiffError = io_err.into();
        assert!(matches!(err, SkiffError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(SkiffError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
