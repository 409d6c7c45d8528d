#![deny(missing_docs)]

//! # Document Loading
//!
//! Normalizes the three supported input shapes (already-parsed value, raw
//! byte buffer, text) into a parsed JSON document. Text is tried as JSON
//! first and as YAML second; a YAML result is only accepted when it is a
//! mapping, since almost any text parses as a YAML scalar.

use crate::error::{CompileError, CompileResult};
use serde_json::Value;

/// A Swagger document in one of the accepted input shapes.
#[derive(Debug, Clone)]
pub enum SwaggerSpec {
    /// An already-parsed document.
    Parsed(Value),
    /// A raw UTF-8 byte buffer of JSON or YAML text.
    Bytes(Vec<u8>),
    /// JSON or YAML text.
    Text(String),
}

impl From<Value> for SwaggerSpec {
    fn from(value: Value) -> Self {
        SwaggerSpec::Parsed(value)
    }
}

impl From<Vec<u8>> for SwaggerSpec {
    fn from(bytes: Vec<u8>) -> Self {
        SwaggerSpec::Bytes(bytes)
    }
}

impl From<&[u8]> for SwaggerSpec {
    fn from(bytes: &[u8]) -> Self {
        SwaggerSpec::Bytes(bytes.to_vec())
    }
}

impl From<String> for SwaggerSpec {
    fn from(text: String) -> Self {
        SwaggerSpec::Text(text)
    }
}

impl From<&str> for SwaggerSpec {
    fn from(text: &str) -> Self {
        SwaggerSpec::Text(text.to_string())
    }
}

impl SwaggerSpec {
    /// Whether this input counts as "no document supplied".
    ///
    /// Covers empty text/buffers and parsed scalars that carry no document
    /// (`null`, `false`, `0`, `""`).
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            SwaggerSpec::Parsed(value) => match value {
                Value::Null => true,
                Value::Bool(b) => !b,
                Value::Number(n) => n.as_f64() == Some(0.0),
                Value::String(s) => s.is_empty(),
                _ => false,
            },
            SwaggerSpec::Bytes(bytes) => bytes.is_empty(),
            SwaggerSpec::Text(text) => text.is_empty(),
        }
    }

    /// Consumes the input and produces the parsed document.
    ///
    /// The result is always a JSON object; anything else fails with
    /// `InvalidDocument`.
    pub(crate) fn into_document(self) -> CompileResult<Value> {
        let value = match self {
            SwaggerSpec::Parsed(value) => value,
            SwaggerSpec::Text(text) => parse_text(&text)?,
            SwaggerSpec::Bytes(bytes) => {
                let text = std::str::from_utf8(&bytes)
                    .map_err(|_| CompileError::InvalidDocument)?;
                parse_text(text)?
            }
        };

        if value.is_object() {
            Ok(value)
        } else {
            Err(CompileError::InvalidDocument)
        }
    }
}

/// Parses document text as JSON, falling back to YAML mappings.
fn parse_text(text: &str) -> CompileResult<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    match serde_yaml::from_str::<Value>(text) {
        Ok(value) if value.is_object() => Ok(value),
        _ => Err(CompileError::InvalidDocument),
    }
}
