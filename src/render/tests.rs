//! Tests for rendering.

use super::*;
use crate::record::ConfigRecord;
use crate::test_support::{SAMPLE_FLAT, sample_values, sample_values_with};
use serde_json::json;

fn sample_record() -> ConfigRecord {
    ConfigRecord::build(&sample_values()).unwrap()
}

const SAMPLE_PRETTY: &str = r#"{
   "config": {
      "a": "x",
      "b": "y",
      "c": 1,
      "d": 2,
      "e": 3,
      "f": 4,
      "nested": {
         "path": {
            "fullpath": [
               "p0",
               "p1",
               "p2"
            ]
         }
      },
      "config_interpolation": "z"
   }
}
"#;

#[test]
fn flat_render_of_reference_values() {
    assert_eq!(render(&sample_record()), SAMPLE_FLAT);
}

#[test]
fn flat_render_is_a_single_line() {
    let text = render(&sample_record());
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("config: {"));
    assert!(text.ends_with("}\n"));
}

#[test]
fn pretty_render_of_reference_values() {
    assert_eq!(render_pretty(&sample_record(), 3).unwrap(), SAMPLE_PRETTY);
}

#[test]
fn pretty_render_honours_indent() {
    let text = render_pretty(&sample_record(), 2).unwrap();
    assert!(text.starts_with("{\n  \"config\": {\n    \"a\": \"x\",\n"));
}

#[test]
fn render_with_dispatches_on_mode() {
    let record = sample_record();
    let flat = render_with(&record, &RenderOptions::default()).unwrap();
    assert_eq!(flat, SAMPLE_FLAT);

    let pretty = render_with(
        &record,
        &RenderOptions {
            mode: RenderMode::Pretty,
            indent: DEFAULT_INDENT,
        },
    )
    .unwrap();
    assert_eq!(pretty, SAMPLE_PRETTY);
}

#[test]
fn rendering_is_deterministic() {
    let values = sample_values_with("config.a", json!({ "z": 1, "m": [true, null], "a": 0.5 }));
    for mode in [RenderMode::Flat, RenderMode::Pretty] {
        let options = RenderOptions {
            mode,
            indent: DEFAULT_INDENT,
        };
        let first = render_with(&ConfigRecord::build(&values).unwrap(), &options).unwrap();
        let second = render_with(&ConfigRecord::build(&values).unwrap(), &options).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn nested_mapping_values_render_with_sorted_keys() {
    let values = sample_values_with("config.a", json!({ "z": 1, "a": 2 }));
    let text = render(&ConfigRecord::build(&values).unwrap());
    assert!(text.starts_with("config: {'a': {'a': 2, 'z': 1}, 'b': 'y'"));
}

#[test]
fn flat_render_uses_python_literals() {
    let mut values = sample_values_with("config.a", json!(true));
    values.insert("config.b", json!(null)).unwrap();
    values.insert("config.c", json!(1.0)).unwrap();
    values.insert("config_interpolation", json!("it's")).unwrap();

    let text = render(&ConfigRecord::build(&values).unwrap());
    assert!(text.contains("'a': True, 'b': None, 'c': 1.0,"));
    assert!(text.ends_with("'config_interpolation': \"it's\"}\n"));
}

#[test]
fn modes_differ_in_text_but_agree_in_data() {
    let values = sample_values_with(
        "config.e",
        json!({ "list": [1, 2.5, "s"], "flag": false, "none": null }),
    );
    let record = ConfigRecord::build(&values).unwrap();

    let flat = render(&record);
    let pretty = render_pretty(&record, DEFAULT_INDENT).unwrap();
    assert_ne!(flat, pretty);

    let from_flat = parse_rendered(&flat).unwrap();
    let from_pretty = parse_rendered(&pretty).unwrap();
    assert_eq!(from_flat, from_pretty);
    assert_eq!(from_flat, serde_json::to_value(&record).unwrap());
}

#[test]
fn reference_render_parses_to_expected_data() {
    let data = parse_rendered(SAMPLE_FLAT).unwrap();
    assert_eq!(
        data,
        json!({
            "config": {
                "a": "x", "b": "y", "c": 1, "d": 2, "e": 3, "f": 4,
                "nested": { "path": { "fullpath": ["p0", "p1", "p2"] } },
                "config_interpolation": "z"
            }
        })
    );
}

#[test]
fn render_mode_parses_from_yaml_names() {
    let mode: RenderMode = serde_yaml::from_str("pretty").unwrap();
    assert_eq!(mode, RenderMode::Pretty);
    let mode: RenderMode = serde_yaml::from_str("flat").unwrap();
    assert_eq!(mode, RenderMode::Flat);
}
