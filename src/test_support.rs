use crate::values::ValueMap;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The values from the reference fixture, keyed by full dotted path.
pub(crate) fn sample_values() -> ValueMap {
    [
        ("config.a", json!("x")),
        ("config.b", json!("y")),
        ("config.c", json!(1)),
        ("config.d", json!(2)),
        ("config.e", json!(3)),
        ("config.f", json!(4)),
        ("config.nested.path.fullpath", json!(["p0", "p1", "p2"])),
        ("config_interpolation", json!("z")),
    ]
    .into_iter()
    .collect()
}

/// `sample_values` with one key removed.
pub(crate) fn sample_values_without(key: &str) -> ValueMap {
    sample_values()
        .iter()
        .filter(|(k, _)| *k != key)
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// `sample_values` with one key replaced or added.
pub(crate) fn sample_values_with(key: &str, value: Value) -> ValueMap {
    let mut values = sample_values();
    values.insert(key, value).unwrap();
    values
}

/// Flat rendering of `sample_values`.
pub(crate) const SAMPLE_FLAT: &str = "config: {'a': 'x', 'b': 'y', 'c': 1, 'd': 2, 'e': 3, 'f': 4, \
'nested': {'path': {'fullpath': ['p0', 'p1', 'p2']}}, 'config_interpolation': 'z'}\n";

/// A values file equivalent to `sample_values`, with a `node` profile.
pub(crate) const SAMPLE_VALUES_YAML: &str = r#"
variables:
  config:
    a: x
    b: y
    c: 1
    d: 2
    e: 3
    f: 4
    nested:
      path:
        fullpath: [p0, p1, p2]
  config_interpolation: z
profiles:
  node:
    config_interpolation: "boilermaker:{project.name}:{project.version}"
  python:
    config.c: 10
"#;

/// Write `content` to `name` inside a fresh temp dir.
pub(crate) fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    write_file(&path, content);
    (dir, path)
}

pub(crate) fn write_file(path: &Path, content: &str) {
    std::fs::write(path, content)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
}
