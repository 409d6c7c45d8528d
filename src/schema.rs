#![deny(missing_docs)]

//! # Schema Trees
//!
//! The storage-agnostic output model: every compiled definition becomes a
//! tree of `SchemaNode`s terminating in `FieldKind` leaves. No unresolved
//! references survive in a finished tree.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Display;

/// The target value kinds a leaf field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Textual values (`string`, `password`, and the conservative fallback).
    String,
    /// Numeric values (`integer`, `long`, `float`, `double`).
    Number,
    /// Boolean values.
    Boolean,
    /// Calendar values (`date`, `dateTime`).
    Date,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Date => write!(f, "date"),
        }
    }
}

/// A resolved schema tree node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaNode {
    /// A single typed value.
    Leaf(FieldKind),
    /// An ordered collection of exactly one child shape.
    Sequence(Box<SchemaNode>),
    /// A mapping from field name to child node, in declaration order.
    Object(IndexMap<String, SchemaNode>),
}

impl SchemaNode {
    /// Wraps `inner` in a one-element sequence.
    pub fn sequence(inner: SchemaNode) -> SchemaNode {
        SchemaNode::Sequence(Box::new(inner))
    }

    /// Returns the leaf kind if this node is a leaf.
    pub fn as_leaf(&self) -> Option<FieldKind> {
        match self {
            SchemaNode::Leaf(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl Display for SchemaNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaNode::Leaf(kind) => write!(f, "{}", kind),
            SchemaNode::Sequence(inner) => write!(f, "sequence<{}>", inner),
            SchemaNode::Object(fields) => write!(f, "object<{} fields>", fields.len()),
        }
    }
}
