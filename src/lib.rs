//! Skiff - Deployment configuration resolver.
//!
//! Skiff loads declarative job-deployment files (JSON or YAML) describing
//! named environments, resolves embedded environment-variable placeholders
//! (`$NAME`, `${NAME:default}`) against the process environment, and exposes
//! the resolved environments for inspection.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Deployment file loading, placeholder resolution, queries
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use skiff::config::{resolve_placeholders, VarContext};
//!
//! // Resolve variables in a config value
//! let mut vars = VarContext::new();
//! vars.set("AVAILABILITY", "ON_DEMAND");
//! assert_eq!(resolve_placeholders("$AVAILABILITY:SPOT", &vars), "ON_DEMAND");
//!
//! // Defaults apply when the variable is unset
//! let unset = VarContext::new();
//! assert_eq!(resolve_placeholders("${MAX_RETRY:3}", &unset), "3");
//! ```
//!
//! For file-based loading, see [`config::load_deployment_config`] and the
//! integration tests.

pub mod cli;
pub mod config;
pub mod error;

pub use error::{Result, SkiffError};
