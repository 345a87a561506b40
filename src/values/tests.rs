//! Tests for values file functionality.

use super::*;
use crate::error::FixtureError;
use crate::record::ConfigRecord;
use crate::render::RenderMode;
use crate::test_support::{SAMPLE_VALUES_YAML, sample_values, write_temp_file};
use serde_json::json;

#[test]
fn parse_empty_yaml() {
    let file = ValuesFile::from_yaml("").unwrap();
    assert!(file.variables.is_empty());
    assert!(file.profiles.is_empty());
    assert_eq!(file.format, None);
    assert_eq!(file.indent, None);
}

#[test]
fn parse_sample_values_file() {
    let file = ValuesFile::from_yaml(SAMPLE_VALUES_YAML).unwrap();
    assert_eq!(file.profile_names(), vec!["node", "python"]);

    let values = file.resolve(None, &[]).unwrap();
    assert_eq!(values, sample_values());
}

#[test]
fn unknown_fields_are_ignored() {
    let yaml = r#"
variables:
  config_interpolation: z
future_setting: true
"#;
    let file = ValuesFile::from_yaml(yaml).unwrap();
    assert_eq!(file.variables.len(), 1);
}

#[test]
fn format_and_indent_are_read() {
    let yaml = "format: pretty\nindent: 2\n";
    let file = ValuesFile::from_yaml(yaml).unwrap();
    assert_eq!(file.format, Some(RenderMode::Pretty));
    assert_eq!(file.indent, Some(2));
}

#[test]
fn invalid_format_is_a_user_error() {
    let err = ValuesFile::from_yaml("format: fancy\n").unwrap_err();
    assert!(matches!(err, FixtureError::UserError(_)));
    assert!(err.to_string().contains("failed to parse values YAML"));
}

#[test]
fn oversized_indent_is_rejected() {
    let err = ValuesFile::from_yaml("indent: 40\n").unwrap_err();
    assert!(err.to_string().contains("indent must be at most 16"));
}

#[test]
fn blank_profile_name_is_rejected() {
    let err = ValuesFile::from_yaml("profiles:\n  ' ':\n    config.a: x\n").unwrap_err();
    assert!(err.to_string().contains("profile names must be non-empty"));
}

#[test]
fn malformed_yaml_is_a_user_error() {
    let err = ValuesFile::from_yaml("variables: [unclosed").unwrap_err();
    assert!(matches!(err, FixtureError::UserError(_)));
}

#[test]
fn load_from_disk() {
    let (_dir, path) = write_temp_file("values.yaml", SAMPLE_VALUES_YAML);
    let file = ValuesFile::load(&path).unwrap();
    assert_eq!(file.resolve(None, &[]).unwrap(), sample_values());
}

#[test]
fn load_missing_file_names_the_path() {
    let err = ValuesFile::load("/nonexistent/values.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read values file '/nonexistent/values.yaml'"));
}

#[test]
fn profile_overlays_base_variables() {
    let file = ValuesFile::from_yaml(SAMPLE_VALUES_YAML).unwrap();
    let values = file.resolve(Some("node"), &[]).unwrap();

    assert_eq!(
        values.get("config_interpolation"),
        Some(&json!("boilermaker:{project.name}:{project.version}"))
    );
    assert_eq!(values.get("config.a"), Some(&json!("x")));
}

#[test]
fn profile_with_dotted_keys_overlays_nested_base() {
    let file = ValuesFile::from_yaml(SAMPLE_VALUES_YAML).unwrap();
    let values = file.resolve(Some("python"), &[]).unwrap();
    assert_eq!(values.get("config.c"), Some(&json!(10)));
}

#[test]
fn unknown_profile_lists_available_ones() {
    let file = ValuesFile::from_yaml(SAMPLE_VALUES_YAML).unwrap();
    let err = file.resolve(Some("ruby"), &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown profile 'ruby' (available: node, python)"
    );
}

#[test]
fn unknown_profile_without_profiles() {
    let file = ValuesFile::default();
    let err = file.resolve(Some("node"), &[]).unwrap_err();
    assert!(err.to_string().contains("available: none defined"));
}

#[test]
fn overrides_win_over_profile() {
    let file = ValuesFile::from_yaml(SAMPLE_VALUES_YAML).unwrap();
    let overrides = vec![
        parse_var("config_interpolation=cli").unwrap(),
        parse_var("config.nested.path.fullpath[1]=middle").unwrap(),
    ];
    let values = file.resolve(Some("node"), &overrides).unwrap();

    assert_eq!(values.get("config_interpolation"), Some(&json!("cli")));
    assert_eq!(
        values.get("config.nested.path.fullpath"),
        Some(&json!(["p0", "middle", "p2"]))
    );
}

#[test]
fn resolved_values_build_a_record() {
    let file = ValuesFile::from_yaml(SAMPLE_VALUES_YAML).unwrap();
    let values = file.resolve(Some("node"), &[]).unwrap();
    let record = ConfigRecord::build(&values).unwrap();
    assert_eq!(
        record.config().interpolation(),
        &json!("boilermaker:{project.name}:{project.version}")
    );
}

#[test]
fn values_file_with_indexed_placeholder_keys() {
    let yaml = r#"
variables:
  config.a: x
  config.b: y
  config.c: 1
  config.d: 2
  config.e: 3
  config.f: 4
  config.nested.path.fullpath[0]: p0
  config.nested.path.fullpath[1]: p1
  config.nested.path.fullpath[2]: p2
  config_interpolation: z
"#;
    let values = ValuesFile::from_yaml(yaml).unwrap().resolve(None, &[]).unwrap();
    let record = ConfigRecord::build(&values).unwrap();
    assert_eq!(record, ConfigRecord::build(&sample_values()).unwrap());
}

#[test]
fn relative_var_overrides_full_path_base() {
    let file = ValuesFile::from_yaml(SAMPLE_VALUES_YAML).unwrap();
    let overrides = vec![parse_var("a=from_cli").unwrap()];
    let values = file.resolve(None, &overrides).unwrap();

    let record = ConfigRecord::build(&values).unwrap();
    assert_eq!(record.config().scalars()[0].1, &json!("from_cli"));
}

#[test]
fn relative_profile_key_overrides_full_path_base() {
    let yaml = format!("{}  rel:\n    a: from_profile\n", SAMPLE_VALUES_YAML);
    let file = ValuesFile::from_yaml(&yaml).unwrap();
    let values = file.resolve(Some("rel"), &[]).unwrap();

    let record = ConfigRecord::build(&values).unwrap();
    assert_eq!(record.config().scalars()[0].1, &json!("from_profile"));
}

#[test]
fn relative_indexed_var_overrides_one_element() {
    let file = ValuesFile::from_yaml(SAMPLE_VALUES_YAML).unwrap();
    let overrides = vec![parse_var("nested.path.fullpath[1]=mid").unwrap()];
    let values = file.resolve(None, &overrides).unwrap();

    let record = ConfigRecord::build(&values).unwrap();
    assert_eq!(
        record.config().fullpath(),
        &[json!("p0"), json!("mid"), json!("p2")]
    );
}
