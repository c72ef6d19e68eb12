//! Deployment configuration loading and resolution.
//!
//! This module handles all aspects of deployment configs:
//! - File loading and format detection in [`loader`]
//! - Placeholder parsing and substitution in [`placeholder`]
//! - Tree resolution and environment queries in [`deployment`]
//!
//! # Example
//!
//! ```
//! use skiff::config::{DeploymentConfig, VarContext};
//! use serde_json::json;
//!
//! let mut vars = VarContext::new();
//! vars.set("TIMEOUT", "100");
//!
//! let tree = json!({"default": {"jobs": [{"timeout_seconds": "${TIMEOUT}"}]}});
//! let config = DeploymentConfig::from_value(tree, &vars).unwrap();
//!
//! assert_eq!(config.environment_names(), vec!["default"]);
//! let env = config.environment("default").unwrap();
//! assert_eq!(env["jobs"][0]["timeout_seconds"], "100");
//! ```
//!
//! For file-based loading, see [`loader::load_deployment_config`].

pub mod deployment;
pub mod loader;
pub mod placeholder;

// Deployment re-exports
pub use deployment::{referenced_variables, resolve_tree, DeploymentConfig};

// Loader re-exports
pub use loader::{
    load_config_value, load_deployment_config, load_deployment_config_with_vars,
    parse_config_value, ConfigFormat,
};

// Placeholder re-exports
pub use placeholder::{
    extract_variables, has_placeholders, parse_placeholders, resolve_placeholders, Segment,
    VarContext,
};
