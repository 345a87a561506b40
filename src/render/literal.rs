//! Python literal notation for rendered values.
//!
//! The flat render mode prints the record the way a Python `print` of a dict
//! would: single-quoted strings, `True`/`False`/`None`, and `{'k': v}`
//! mappings. [`Literal`] is the ordered tree behind that text, shared with the
//! parser in [`super::parse`].

use serde_json::{Map, Number, Value};
use std::fmt::{self, Write};
use unicode_general_category::{GeneralCategory, get_general_category};

/// An ordered literal value.
///
/// Unlike `serde_json::Value`, dict entries keep the order they were built
/// or parsed in.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
    List(Vec<Literal>),
    Dict(Vec<(String, Literal)>),
}

impl Literal {
    /// Convert to the JSON data model. Dict order is not preserved.
    pub fn to_json(&self) -> Value {
        match self {
            Literal::None => Value::Null,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Int(n) => int_to_json(*n),
            Literal::Float(x) => Number::from_f64(*x).map_or(Value::Null, Value::Number),
            Literal::Str(s) => Value::String(s.clone()),
            Literal::List(items) => Value::Array(items.iter().map(Literal::to_json).collect()),
            Literal::Dict(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

fn int_to_json(n: i128) -> Value {
    if let Ok(v) = i64::try_from(n) {
        Value::from(v)
    } else if let Ok(v) = u64::try_from(n) {
        Value::from(v)
    } else {
        Number::from_f64(n as f64).map_or(Value::Null, Value::Number)
    }
}

impl From<&Value> for Literal {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Literal::None,
            Value::Bool(b) => Literal::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Literal::Int(i as i128)
                } else if let Some(u) = n.as_u64() {
                    Literal::Int(u as i128)
                } else {
                    Literal::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Literal::Str(s.clone()),
            Value::Array(items) => Literal::List(items.iter().map(Literal::from).collect()),
            Value::Object(map) => Literal::Dict(
                map.iter()
                    .map(|(k, v)| (k.clone(), Literal::from(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("None"),
            Literal::Bool(true) => f.write_str("True"),
            Literal::Bool(false) => f.write_str("False"),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(x) => f.write_str(&format_float(*x)),
            Literal::Str(s) => write_str_literal(f, s),
            Literal::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_char(']')
            }
            Literal::Dict(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_str_literal(f, key)?;
                    write!(f, ": {}", value)?;
                }
                f.write_char('}')
            }
        }
    }
}

/// Quote a string: single quotes unless it contains `'` and no `"`.
fn write_str_literal(f: &mut impl Write, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for ch in s.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if !is_printable(c) => {
                let code = c as u32;
                if code <= 0xff {
                    write!(f, "\\x{:02x}", code)?;
                } else if code <= 0xffff {
                    write!(f, "\\u{:04x}", code)?;
                } else {
                    write!(f, "\\U{:08x}", code)?;
                }
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

/// Printable in the sense of Python's `str.isprintable`: everything except
/// the "Other" and "Separator" categories, with ASCII space allowed.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Shortest round-trip float text: `1.0`, `0.25`, `1e+16`, `1.5e-05`.
///
/// Positional between `1e-4` and `1e16`, scientific outside.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e-5".
    let sci = format!("{:e}", x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (-4..16).contains(&exp) {
        positional(&digits, exp)
    } else {
        let (first, rest) = digits.split_at(1);
        let frac = if rest.is_empty() {
            String::new()
        } else {
            format!(".{}", rest)
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{}{}e{}{:02}", first, frac, exp_sign, exp.abs())
    };
    format!("{}{}", sign, body)
}

fn positional(digits: &str, exp: i32) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{}{}", zeros, digits);
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}
