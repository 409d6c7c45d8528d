#![deny(missing_docs)]

//! # Reference Detection
//!
//! Classifies raw property declarations into the four shapes the builder
//! dispatches over, and extracts definition names from `$ref` strings.
//! Only local `#/definitions/<Name>` references are supported; external and
//! JSON-pointer-style references are malformed here.

use crate::error::{CompileError, CompileResult};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// The shape of one raw property declaration.
///
/// `Opaque` covers declarations with neither a `$ref` nor a `type`,
/// including the non-object values seen when a bare scalar definition is
/// iterated as if it were a property bag.
pub(crate) enum PropertyShape<'a> {
    /// Declaration with a `$ref` field (the raw `$ref` value).
    Reference(&'a Value),
    /// `type: array` whose `items` carry a `$ref` (the raw `$ref` value).
    ArrayOfReference(&'a Value),
    /// Declaration with a `type` field.
    Typed(&'a Value),
    /// Neither reference nor typed.
    Opaque,
}

/// Classifies a property declaration.
///
/// A declaration "has a reference" iff it has a `$ref` field, or it has
/// `type == "array"` and its `items` has a `$ref` field.
pub(crate) fn classify(decl: &Value) -> PropertyShape<'_> {
    if let Some(reference) = decl.get("$ref") {
        return PropertyShape::Reference(reference);
    }

    if decl.get("type").and_then(Value::as_str) == Some("array") {
        if let Some(reference) = decl.get("items").and_then(|items| items.get("$ref")) {
            return PropertyShape::ArrayOfReference(reference);
        }
    }

    if decl.get("type").is_some() {
        PropertyShape::Typed(decl)
    } else {
        PropertyShape::Opaque
    }
}

/// Extracts the referenced definition name from a raw `$ref` value.
///
/// The value must be a string matching `^#/definitions/(\w+)$`; the captured
/// group is the name. Anything else fails with `MalformedReference`.
pub(crate) fn extract_ref_name(reference: &Value) -> CompileResult<&str> {
    static REF_RE: OnceLock<Regex> = OnceLock::new();
    let re = REF_RE
        .get_or_init(|| Regex::new(r"^#/definitions/(\w+)$").expect("Invalid regex"));

    let Some(raw) = reference.as_str() else {
        return Err(CompileError::MalformedReference {
            reference: reference.to_string(),
        });
    };

    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str())
        .ok_or_else(|| CompileError::MalformedReference {
            reference: raw.to_string(),
        })
}
