//! Integration tests for the config module public API.
//!
//! Fixtures mirror a realistic job-deployment file, written in both
//! supported serializations, to exercise the cross-format equivalence
//! contract: resolving logically identical JSON and YAML must produce
//! identical environment names and content.

use skiff::config::{
    load_deployment_config_with_vars, DeploymentConfig, VarContext,
};
use skiff::SkiffError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DEPLOYMENT_JSON: &str = r#"
{
  "default": {
    "jobs": [
      {
        "name": "nightly-etl",
        "timeout_seconds": "${TIMEOUT}",
        "max_retries": "${MAX_RETRY:3}",
        "email_notifications": {
          "on_failure": ["${ALERT_EMAIL}", "presetEmail@test.com"]
        },
        "new_cluster": {
          "node_count": 2,
          "aws_attributes": {
            "availability": "$AVAILABILITY:SPOT"
          }
        }
      }
    ]
  },
  "staging": {
    "jobs": []
  }
}
"#;

const DEPLOYMENT_YAML: &str = r#"
default:
  jobs:
    - name: nightly-etl
      timeout_seconds: "${TIMEOUT}"
      max_retries: "${MAX_RETRY:3}"
      email_notifications:
        on_failure:
          - "${ALERT_EMAIL}"
          - "presetEmail@test.com"
      new_cluster:
        node_count: 2
        aws_attributes:
          availability: "$AVAILABILITY:SPOT"
staging:
  jobs: []
"#;

fn write_fixtures(temp: &TempDir) -> (PathBuf, PathBuf) {
    let json = temp.path().join("deployment.json");
    let yaml = temp.path().join("deployment.yaml");
    fs::write(&json, DEPLOYMENT_JSON).unwrap();
    fs::write(&yaml, DEPLOYMENT_YAML).unwrap();
    (json, yaml)
}

fn vars(pairs: &[(&str, &str)]) -> VarContext {
    let mut ctx = VarContext::new();
    for (name, value) in pairs {
        ctx.set(*name, *value);
    }
    ctx
}

#[test]
fn json_and_yaml_list_the_same_environment_names() {
    let temp = TempDir::new().unwrap();
    let (json, yaml) = write_fixtures(&temp);
    let ctx = VarContext::new();

    let from_json = load_deployment_config_with_vars(&json, &ctx).unwrap();
    let from_yaml = load_deployment_config_with_vars(&yaml, &ctx).unwrap();

    assert_eq!(from_json.environment_names(), from_yaml.environment_names());
    assert_eq!(from_json.environment_names(), vec!["default", "staging"]);
}

#[test]
fn json_and_yaml_resolve_to_equal_environments() {
    let temp = TempDir::new().unwrap();
    let (json, yaml) = write_fixtures(&temp);
    let ctx = vars(&[
        ("TIMEOUT", "100"),
        ("ALERT_EMAIL", "test@test.com"),
    ]);

    let from_json = load_deployment_config_with_vars(&json, &ctx).unwrap();
    let from_yaml = load_deployment_config_with_vars(&yaml, &ctx).unwrap();

    assert_eq!(
        from_json.environment("default").unwrap(),
        from_yaml.environment("default").unwrap()
    );
}

#[test]
fn scalar_substitution_from_variable() {
    let temp = TempDir::new().unwrap();
    let (json, _) = write_fixtures(&temp);

    let config = load_deployment_config_with_vars(&json, &vars(&[("TIMEOUT", "100")])).unwrap();
    let env = config.environment("default").unwrap();

    assert_eq!(env["jobs"][0]["timeout_seconds"], "100");
}

#[test]
fn array_element_substitution_leaves_preset_elements_alone() {
    let temp = TempDir::new().unwrap();
    let (_, yaml) = write_fixtures(&temp);

    let config =
        load_deployment_config_with_vars(&yaml, &vars(&[("ALERT_EMAIL", "test@test.com")]))
            .unwrap();
    let env = config.environment("default").unwrap();
    let emails = env["jobs"][0]["email_notifications"]["on_failure"]
        .as_array()
        .unwrap();

    assert_eq!(emails[0], "test@test.com");
    assert_eq!(emails[1], "presetEmail@test.com");
}

#[test]
fn braced_default_applies_when_variable_unset() {
    let temp = TempDir::new().unwrap();
    let (json, _) = write_fixtures(&temp);

    // MAX_RETRY not set
    let config = load_deployment_config_with_vars(&json, &VarContext::new()).unwrap();
    let env = config.environment("default").unwrap();

    assert_eq!(env["jobs"][0]["max_retries"], "3");
}

#[test]
fn unbraced_default_applies_when_variable_unset() {
    let temp = TempDir::new().unwrap();
    let (_, yaml) = write_fixtures(&temp);

    // AVAILABILITY not set
    let config = load_deployment_config_with_vars(&yaml, &VarContext::new()).unwrap();
    let env = config.environment("default").unwrap();

    assert_eq!(
        env["jobs"][0]["new_cluster"]["aws_attributes"]["availability"],
        "SPOT"
    );
}

#[test]
fn missing_variable_without_default_is_left_unresolved() {
    let temp = TempDir::new().unwrap();
    let (json, _) = write_fixtures(&temp);

    // TIMEOUT has no default in the fixture
    let config = load_deployment_config_with_vars(&json, &VarContext::new()).unwrap();
    let env = config.environment("default").unwrap();

    assert_eq!(env["jobs"][0]["timeout_seconds"], "${TIMEOUT}");
}

#[test]
fn unknown_environment_name_fails() {
    let temp = TempDir::new().unwrap();
    let (json, _) = write_fixtures(&temp);

    let config = load_deployment_config_with_vars(&json, &VarContext::new()).unwrap();
    let result = config.environment("does-not-exist");

    assert!(matches!(
        result,
        Err(SkiffError::EnvironmentNotFound { name }) if name == "does-not-exist"
    ));
}

#[test]
fn non_string_scalars_keep_their_types_across_resolution() {
    let temp = TempDir::new().unwrap();
    let (json, _) = write_fixtures(&temp);

    let config = load_deployment_config_with_vars(&json, &VarContext::new()).unwrap();
    let env = config.environment("default").unwrap();

    // node_count stays a number even though sibling strings were resolved
    assert_eq!(env["jobs"][0]["new_cluster"]["node_count"], 2);
}

#[test]
fn resolution_is_idempotent_at_the_tree_level() {
    let temp = TempDir::new().unwrap();
    let (json, _) = write_fixtures(&temp);
    let ctx = vars(&[
        ("TIMEOUT", "100"),
        ("ALERT_EMAIL", "test@test.com"),
        ("AVAILABILITY", "ON_DEMAND"),
    ]);

    let config = load_deployment_config_with_vars(&json, &ctx).unwrap();

    // Re-resolving the resolved content must change nothing
    let resolved = serde_json::Value::Object(config.environment("default").unwrap().clone());
    let again = skiff::config::resolve_tree(resolved.clone(), &ctx);
    assert_eq!(resolved, again);
}

#[test]
fn public_api_is_accessible() {
    // Verify types are exported correctly
    let _ctx = VarContext::new();
    let tree = serde_json::json!({"default": {"jobs": []}});
    let _config = DeploymentConfig::from_value(tree, &VarContext::new()).unwrap();
}
