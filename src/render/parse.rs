//! Reading rendered output back into structured data.
//!
//! Handles both render modes: a JSON document (pretty mode) or
//! `<key>: <python literal>` lines (flat mode).

use super::literal::Literal;
use serde_json::{Map, Value};
use thiserror::Error;

/// Failure while reading a Python literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at position {position}")]
pub struct ReprError {
    pub message: String,
    /// Byte offset into the parsed text.
    pub position: usize,
}

/// Parse rendered text of either mode into the JSON data model.
pub fn parse_rendered(text: &str) -> Result<Value, ReprError> {
    if text.trim_start().starts_with('{') {
        return serde_json::from_str(text).map_err(|e| ReprError {
            message: format!("invalid JSON document: {}", e),
            position: 0,
        });
    }

    let mut object = Map::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        let content = line.trim_end_matches(['\n', '\r']);
        if content.trim().is_empty() {
            continue;
        }
        let (key, literal) = match content.split_once(": ") {
            Some((key, literal)) if !key.is_empty() && !key.contains(char::is_whitespace) => {
                (key, literal)
            }
            _ => {
                return Err(ReprError {
                    message: "expected '<key>: <value>' line".to_string(),
                    position: start,
                });
            }
        };
        let value = parse_literal(literal).map_err(|e| ReprError {
            message: e.message,
            position: start + key.len() + 2 + e.position,
        })?;
        if object.insert(key.to_string(), value.to_json()).is_some() {
            return Err(ReprError {
                message: format!("duplicate key '{}'", key),
                position: start,
            });
        }
    }
    Ok(Value::Object(object))
}

/// Parse a single Python literal, e.g. `{'a': [1, None]}`.
pub fn parse_literal(text: &str) -> Result<Literal, ReprError> {
    let mut parser = Parser {
        text,
        bytes: text.as_bytes(),
        pos: 0,
    };
    let value = parser.value()?;
    parser.skip_ws();
    if parser.pos != text.len() {
        return Err(parser.error("unexpected trailing characters"));
    }
    Ok(value)
}

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, message: &str) -> ReprError {
        ReprError {
            message: message.to_string(),
            position: self.pos,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), ReprError> {
        self.skip_ws();
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", byte as char)))
        }
    }

    fn value(&mut self) -> Result<Literal, ReprError> {
        self.skip_ws();
        match self.peek() {
            Some(b'[') => self.list(),
            Some(b'{') => self.dict(),
            Some(b'\'' | b'"') => self.string().map(Literal::Str),
            Some(b'-' | b'+' | b'.' | b'0'..=b'9') => self.number(),
            Some(c) if c.is_ascii_alphabetic() => self.word(),
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    /// Comma-separated items up to `close`, allowing a trailing comma.
    fn items<T>(
        &mut self,
        close: u8,
        mut item: impl FnMut(&mut Self) -> Result<T, ReprError>,
    ) -> Result<Vec<T>, ReprError> {
        let mut out = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok(out);
            }
            out.push(item(self)?);
            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(c) if c == close => {}
                _ => return Err(self.error(&format!("expected ',' or '{}'", close as char))),
            }
        }
    }

    fn list(&mut self) -> Result<Literal, ReprError> {
        self.pos += 1;
        self.items(b']', Self::value).map(Literal::List)
    }

    fn dict(&mut self) -> Result<Literal, ReprError> {
        self.pos += 1;
        self.items(b'}', |p| {
            p.skip_ws();
            if !matches!(p.peek(), Some(b'\'' | b'"')) {
                return Err(p.error("dict keys must be strings"));
            }
            let key = p.string()?;
            p.expect(b':')?;
            let value = p.value()?;
            Ok((key, value))
        })
        .map(Literal::Dict)
    }

    fn string(&mut self) -> Result<String, ReprError> {
        let quote = self.bytes[self.pos] as char;
        let start = self.pos;
        self.pos += 1;
        let text = self.text;
        let mut out = String::new();
        let mut chars = text[self.pos..].char_indices();

        while let Some((i, ch)) = chars.next() {
            match ch {
                c if c == quote => {
                    self.pos += i + 1;
                    return Ok(out);
                }
                '\\' => {
                    let Some((j, esc)) = chars.next() else {
                        break;
                    };
                    match esc {
                        '\\' | '\'' | '"' => out.push(esc),
                        'n' => out.push('\n'),
                        'r' => out.push('\r'),
                        't' => out.push('\t'),
                        'x' | 'u' | 'U' => {
                            let width = match esc {
                                'x' => 2,
                                'u' => 4,
                                _ => 8,
                            };
                            let hex_start = self.pos + j + 1;
                            let hex = text.get(hex_start..hex_start + width).ok_or_else(
                                || ReprError {
                                    message: "truncated escape sequence".to_string(),
                                    position: hex_start,
                                },
                            )?;
                            let decoded = Some(hex)
                                .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
                                .and_then(|h| u32::from_str_radix(h, 16).ok())
                                .and_then(char::from_u32)
                                .ok_or_else(|| ReprError {
                                    message: format!("invalid escape sequence '\\{}{}'", esc, hex),
                                    position: hex_start,
                                })?;
                            out.push(decoded);
                            for _ in 0..width {
                                chars.next();
                            }
                        }
                        other => {
                            out.push('\\');
                            out.push(other);
                        }
                    }
                }
                c => out.push(c),
            }
        }

        Err(ReprError {
            message: "unterminated string".to_string(),
            position: start,
        })
    }

    fn number(&mut self) -> Result<Literal, ReprError> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E' | b'_')
        ) {
            self.pos += 1;
        }
        let token: String = self.text[start..self.pos]
            .chars()
            .filter(|c| *c != '_')
            .collect();
        let is_float = token.contains(['.', 'e', 'E']);

        let parsed = if is_float {
            token.parse::<f64>().ok().map(Literal::Float)
        } else {
            token.parse::<i128>().ok().map(Literal::Int)
        };
        parsed.ok_or_else(|| ReprError {
            message: format!("invalid number '{}'", token),
            position: start,
        })
    }

    fn word(&mut self) -> Result<Literal, ReprError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        match &self.text[start..self.pos] {
            "None" => Ok(Literal::None),
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            "nan" => Ok(Literal::Float(f64::NAN)),
            "inf" => Ok(Literal::Float(f64::INFINITY)),
            other => Err(ReprError {
                message: format!("unknown name '{}'", other),
                position: start,
            }),
        }
    }
}
