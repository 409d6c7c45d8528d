#![deny(missing_docs)]

//! # Type Mapping
//!
//! Maps a declared primitive type tag onto the target value kinds, with
//! `array`/`object` wrapping the mapped item type in a sequence. Pure
//! function of the declaration and the fixed allowed-type table.

use crate::error::{CompileError, CompileResult};
use crate::schema::{FieldKind, SchemaNode};
use serde_json::Value;

/// Maps a property declaration to its schema node.
///
/// An absent declaration, or one carrying no `type` at all, maps to a
/// `string` leaf rather than failing. A present `type` outside the allowed
/// set (`integer`, `long`, `float`, `double`, `string`, `password`,
/// `boolean`, `date`, `dateTime`, `array`, `object`) fails with
/// `UnrecognizedType`.
pub fn map_property(decl: Option<&Value>) -> CompileResult<SchemaNode> {
    let Some(decl) = decl else {
        return Ok(SchemaNode::Leaf(FieldKind::String));
    };

    let tag = match decl.get("type") {
        None => return Ok(SchemaNode::Leaf(FieldKind::String)),
        Some(tag) => tag.as_str().ok_or_else(|| CompileError::UnrecognizedType {
            type_tag: tag.to_string(),
        })?,
    };

    match tag {
        "integer" | "long" | "float" | "double" => Ok(SchemaNode::Leaf(FieldKind::Number)),
        "string" | "password" => Ok(SchemaNode::Leaf(FieldKind::String)),
        "boolean" => Ok(SchemaNode::Leaf(FieldKind::Boolean)),
        "date" | "dateTime" => Ok(SchemaNode::Leaf(FieldKind::Date)),
        // Absent `items` recurses with `None`, yielding sequence<string>.
        "array" | "object" => Ok(SchemaNode::sequence(map_property(decl.get("items"))?)),
        other => Err(CompileError::UnrecognizedType {
            type_tag: other.to_string(),
        }),
    }
}
