//! Deployment configuration tree and environment queries.
//!
//! A deployment file is a mapping from environment name to environment
//! content, each environment carrying a `jobs` sequence of arbitrary nested
//! job definitions. Both supported serializations (JSON and YAML) are loaded
//! into the same [`serde_json::Value`] tree, so two files with the same
//! logical content resolve to structurally equal trees regardless of format.
//!
//! Key order follows source file order (`serde_json`'s `preserve_order`
//! feature). Parsed trees are acyclic by construction; cyclic input is
//! unsupported and not guarded against.

use crate::config::placeholder::{
    extract_variables, has_placeholders, resolve_placeholders, VarContext,
};
use crate::error::{Result, SkiffError};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Resolve every string scalar in a tree against a variable context.
///
/// Depth-first walk: mapping values and sequence elements recurse, string
/// scalars pass through the placeholder resolver, mapping keys and all other
/// scalar types are left untouched. The tree's shape never changes - only
/// string leaf contents do - so resolving an already resolved tree is a
/// no-op.
pub fn resolve_tree(value: Value, vars: &VarContext) -> Value {
    match value {
        // Strings without placeholders pass through without reallocating
        Value::String(s) if !has_placeholders(&s) => Value::String(s),
        Value::String(s) => Value::String(resolve_placeholders(&s, vars)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| resolve_tree(item, vars))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, resolve_tree(value, vars)))
                .collect(),
        ),
        other => other,
    }
}

/// Collect the names of all variables referenced anywhere in a tree.
///
/// Returned sorted and deduplicated.
pub fn referenced_variables(value: &Value) -> BTreeSet<String> {
    fn walk(value: &Value, names: &mut BTreeSet<String>) {
        match value {
            Value::String(s) => names.extend(extract_variables(s)),
            Value::Array(items) => {
                for item in items {
                    walk(item, names);
                }
            }
            Value::Object(map) => {
                for value in map.values() {
                    walk(value, names);
                }
            }
            _ => {}
        }
    }

    let mut names = BTreeSet::new();
    walk(value, &mut names);
    names
}

/// A fully resolved deployment configuration.
///
/// Constructed once per invocation, then queried read-only; there is no
/// mutation API and no persisted state beyond the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentConfig {
    environments: Map<String, Value>,
}

impl DeploymentConfig {
    /// Build a resolved config from a parsed tree root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if the root is not a mapping, or if
    /// any environment's content is not a mapping.
    pub fn from_value(root: Value, vars: &VarContext) -> Result<Self> {
        let environments = match resolve_tree(root, vars) {
            Value::Object(map) => map,
            _ => {
                return Err(SkiffError::ConfigValidationError {
                    message: "deployment root must be a mapping of environment names".into(),
                })
            }
        };

        for (name, content) in &environments {
            let Value::Object(content) = content else {
                return Err(SkiffError::ConfigValidationError {
                    message: format!("environment '{name}' must be a mapping"),
                });
            };
            if !content.contains_key("jobs") {
                tracing::warn!("environment '{}' has no 'jobs' key", name);
            }
        }

        Ok(Self { environments })
    }

    /// All environment names, in source file order.
    pub fn environment_names(&self) -> Vec<&str> {
        self.environments.keys().map(String::as_str).collect()
    }

    /// The resolved content of one environment.
    ///
    /// # Errors
    ///
    /// Returns `EnvironmentNotFound` if no environment has the given name
    /// (names are case-sensitive).
    pub fn environment(&self, name: &str) -> Result<&Map<String, Value>> {
        match self.environments.get(name) {
            // Non-mapping content is rejected in from_value
            Some(Value::Object(map)) => Ok(map),
            Some(_) => Err(SkiffError::ConfigValidationError {
                message: format!("environment '{name}' must be a mapping"),
            }),
            None => Err(SkiffError::EnvironmentNotFound {
                name: name.to_string(),
            }),
        }
    }
}
