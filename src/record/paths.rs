//! Dotted-path syntax and the fixed set of paths a record is built from.

use regex::Regex;
use std::sync::LazyLock;

/// Top-level key holding the lettered fields and the nested sequence.
pub const CONFIG_KEY: &str = "config";

/// Lettered scalar fields under `config`, in record order.
pub const SCALAR_FIELDS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

/// Path of the ordered sequence, relative to `config`.
pub const FULLPATH_RELATIVE: &str = "nested.path.fullpath";

/// Full dotted path of the ordered sequence.
pub const FULLPATH: &str = "config.nested.path.fullpath";

/// Number of elements `fullpath` must hold.
pub const FULLPATH_LEN: usize = 3;

/// Scalar field that sits beside `config` in the placeholder namespace.
pub const INTERPOLATION: &str = "config_interpolation";

static PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*(\.[A-Za-z_][A-Za-z0-9_-]*)*(\[([0-9]+)\])?$")
        .expect("dotted path regex is valid")
});

/// Full dotted path of a lettered field, e.g. `config.a`.
pub fn scalar_path(field: &str) -> String {
    format!("{}.{}", CONFIG_KEY, field)
}

/// Every path `build` requires, in record order.
pub fn required_paths() -> Vec<String> {
    let mut paths: Vec<String> = SCALAR_FIELDS.iter().map(|f| scalar_path(f)).collect();
    paths.push(FULLPATH.to_string());
    paths.push(INTERPOLATION.to_string());
    paths
}

/// The placeholder tokens a template author writes for this record.
///
/// The sequence is addressed element by element, matching how fixture
/// templates spell it out.
pub fn placeholder_tokens() -> Vec<String> {
    let mut tokens: Vec<String> = SCALAR_FIELDS
        .iter()
        .map(|f| format!("{{{{{}}}}}", scalar_path(f)))
        .collect();
    for i in 0..FULLPATH_LEN {
        tokens.push(format!("{{{{{}[{}]}}}}", FULLPATH, i));
    }
    tokens.push(format!("{{{{{}}}}}", INTERPOLATION));
    tokens
}

/// Whether `key` is a well-formed dotted path, optionally ending in `[N]`.
pub fn is_valid_path(key: &str) -> bool {
    PATH_RE.is_match(key)
}

/// Split `base[N]` into `(base, N)`. Returns `None` for unindexed or malformed keys.
pub fn split_index(key: &str) -> Option<(&str, usize)> {
    let caps = PATH_RE.captures(key)?;
    let index = caps.get(3)?;
    let bracket = caps.get(2)?;
    let n = index.as_str().parse().ok()?;
    Some((&key[..bracket.start()], n))
}

/// Canonical spelling of a dotted path.
///
/// The record's fields may be written relative to `config` (`a`,
/// `nested.path.fullpath[1]`), and `config_interpolation` may be written as
/// `config.config_interpolation`. All of these map to the paths listed by
/// [`required_paths`] so two spellings of one field are one key. Other keys
/// come back unchanged.
pub fn canonical_path(key: &str) -> String {
    if SCALAR_FIELDS.contains(&key) {
        return scalar_path(key);
    }
    if key == scalar_path(INTERPOLATION) {
        return INTERPOLATION.to_string();
    }
    if let Some(rest) = key.strip_prefix(FULLPATH_RELATIVE) {
        if rest.is_empty() || rest.starts_with('[') {
            return format!("{}.{}", CONFIG_KEY, key);
        }
    }
    key.to_string()
}

/// Paths whose values are taken whole, even when they are mappings.
pub(crate) fn is_leaf_path(key: &str) -> bool {
    let key = canonical_path(key);
    key == FULLPATH
        || key == INTERPOLATION
        || key
            .strip_prefix(CONFIG_KEY)
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|field| SCALAR_FIELDS.contains(&field))
}
