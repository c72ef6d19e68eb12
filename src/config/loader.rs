//! Deployment file discovery and loading.
//!
//! Loads a deployment file in either supported serialization into the shared
//! tree representation. YAML content is transcoded to [`serde_json::Value`]
//! after parsing so the resolver and queries are format-agnostic.

use crate::config::deployment::DeploymentConfig;
use crate::config::placeholder::VarContext;
use crate::error::{Result, SkiffError};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Supported deployment file serializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for anything other than `.json`,
    /// `.yaml` or `.yml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(SkiffError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load a deployment file as a raw, unresolved tree.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the content is invalid for its format.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let format = ConfigFormat::from_path(path)?;

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SkiffError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SkiffError::Io(e)
        }
    })?;

    parse_config_value(&content, format, path)
}

/// Parse deployment content into a raw tree.
///
/// # Arguments
///
/// * `content` - The JSON or YAML content to parse
/// * `format` - The serialization the content is written in
/// * `source_path` - Path for error reporting
pub fn parse_config_value(content: &str, format: ConfigFormat, source_path: &Path) -> Result<Value> {
    let parse_error = |message: String| SkiffError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    };

    match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        ConfigFormat::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            // Transcode to the shared tree type; non-string keys are the
            // main way this can fail.
            serde_json::to_value(yaml).map_err(|e| parse_error(e.to_string()))
        }
    }
}

/// Load and resolve a deployment file against the process environment.
///
/// # Errors
///
/// Propagates `ConfigNotFound`, `UnsupportedFormat`, `ConfigParseError` and
/// `ConfigValidationError` from loading and construction.
pub fn load_deployment_config(path: &Path) -> Result<DeploymentConfig> {
    load_deployment_config_with_vars(path, &VarContext::from_process_env())
}

/// Load and resolve a deployment file against an explicit variable context.
///
/// Used by tests and by callers that need a deterministic variable snapshot.
pub fn load_deployment_config_with_vars(
    path: &Path,
    vars: &VarContext,
) -> Result<DeploymentConfig> {
    tracing::debug!("loading deployment config from {}", path.display());
    let root = load_config_value(path)?;
    DeploymentConfig::from_value(root, vars)
}
