#![deny(missing_docs)]

//! # Schema Building
//!
//! Assembles the resolved schema tree for one definition: per-field dispatch
//! over the declaration shape, recursion through referenced definitions, and
//! the bare-definition collapse for scalar/array definitions that carry no
//! property bag.

use crate::defs::mapper::map_property;
use crate::defs::refs::{classify, extract_ref_name, PropertyShape};
use crate::defs::registry::Definitions;
use crate::error::{CompileError, CompileResult};
use crate::schema::SchemaNode;
use indexmap::IndexMap;
use serde_json::Value;

/// Builds the schema node for one named definition's body.
///
/// Uses the definition's `properties` bag when present, otherwise the body
/// itself (bare scalar/array definitions).
pub(crate) fn build_definition(
    definition: &Value,
    definitions: &Definitions<'_>,
    trail: &mut Vec<String>,
) -> CompileResult<SchemaNode> {
    let bag = definition.get("properties").unwrap_or(definition);
    build_bag(bag, definitions, trail)
}

/// Builds the schema node for a property bag.
///
/// Per field, in declaration order:
/// - falsy declarations are skipped;
/// - references resolve their target definition and wrap its tree in a
///   one-element sequence (a direct ref and an array-of-ref produce the
///   identical wrapper, never compounded);
/// - typed declarations map through the type mapper;
/// - an opaque declaration means the enclosing value is itself a bare
///   scalar/array rather than a bag: the whole build collapses to the type
///   mapper applied to the enclosing value, discarding partial fields.
///
/// `trail` holds the definition names currently being resolved; re-entering
/// one fails with `CyclicReference` instead of recursing without bound.
pub(crate) fn build_bag(
    bag: &Value,
    definitions: &Definitions<'_>,
    trail: &mut Vec<String>,
) -> CompileResult<SchemaNode> {
    let Some(entries) = bag.as_object() else {
        // A non-object body has no fields to iterate.
        return map_property(Some(bag));
    };

    let mut fields = IndexMap::new();
    for (key, decl) in entries {
        if is_falsy(decl) {
            continue;
        }

        match classify(decl) {
            PropertyShape::Reference(reference) | PropertyShape::ArrayOfReference(reference) => {
                let name = extract_ref_name(reference)?;
                let target = definitions.get(name)?;

                if trail.iter().any(|seen| seen == name) {
                    return Err(CompileError::CyclicReference {
                        name: name.to_string(),
                    });
                }
                trail.push(name.to_string());
                let node = build_definition(target, definitions, trail)?;
                trail.pop();

                fields.insert(key.clone(), SchemaNode::sequence(node));
            }
            PropertyShape::Typed(decl) => {
                fields.insert(key.clone(), map_property(Some(decl))?);
            }
            PropertyShape::Opaque => {
                return map_property(Some(bag));
            }
        }
    }

    Ok(SchemaNode::Object(fields))
}

/// JSON rendition of a falsy declaration: `null`, `false`, `0`, `""`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use serde_json::json;

    fn build(doc: &Value, name: &str) -> CompileResult<SchemaNode> {
        let definitions = Definitions::from_document(doc);
        let mut trail = vec![name.to_string()];
        build_definition(definitions.get(name)?, &definitions, &mut trail)
    }

    #[test]
    fn test_typed_fields() {
        let doc = json!({
            "definitions": {
                "Pet": {
                    "properties": {
                        "name": {"type": "string"},
                        "age": {"type": "integer"},
                        "alive": {"type": "boolean"},
                    }
                }
            }
        });

        let SchemaNode::Object(fields) = build(&doc, "Pet").unwrap() else {
            panic!("expected object node")
        };
        assert_eq!(fields["name"], SchemaNode::Leaf(FieldKind::String));
        assert_eq!(fields["age"], SchemaNode::Leaf(FieldKind::Number));
        assert_eq!(fields["alive"], SchemaNode::Leaf(FieldKind::Boolean));
    }

    #[test]
    fn test_direct_and_array_refs_build_identical_nodes() {
        let doc = json!({
            "definitions": {
                "Owner": {"properties": {"name": {"type": "string"}}},
                "Pet": {
                    "properties": {
                        "owner": {"$ref": "#/definitions/Owner"},
                        "owners": {"type": "array", "items": {"$ref": "#/definitions/Owner"}},
                    }
                }
            }
        });

        let SchemaNode::Object(fields) = build(&doc, "Pet").unwrap() else {
            panic!("expected object node")
        };
        // Both forms resolve to one sequence around Owner's tree; the array
        // wrapper and the reference wrapper are not compounded.
        assert_eq!(fields["owner"], fields["owners"]);

        let SchemaNode::Sequence(inner) = &fields["owner"] else {
            panic!("resolved refs are sequence-wrapped")
        };
        let SchemaNode::Object(owner_fields) = inner.as_ref() else {
            panic!("Owner resolves to an object")
        };
        assert_eq!(owner_fields["name"], SchemaNode::Leaf(FieldKind::String));
    }

    #[test]
    fn test_reference_matches_direct_compile_of_target() {
        let doc = json!({
            "definitions": {
                "Owner": {"properties": {"name": {"type": "string"}}},
                "Pet": {"properties": {"owner": {"$ref": "#/definitions/Owner"}}},
            }
        });

        let owner = build(&doc, "Owner").unwrap();
        let SchemaNode::Object(pet_fields) = build(&doc, "Pet").unwrap() else {
            panic!("expected object node")
        };
        assert_eq!(pet_fields["owner"], SchemaNode::sequence(owner));
    }

    #[test]
    fn test_ref_to_bare_definition() {
        let doc = json!({
            "definitions": {
                "Tag": {"type": "string"},
                "Pet": {"properties": {"tag": {"$ref": "#/definitions/Tag"}}},
            }
        });

        let SchemaNode::Object(fields) = build(&doc, "Pet").unwrap() else {
            panic!("expected object node")
        };
        assert_eq!(
            fields["tag"],
            SchemaNode::sequence(SchemaNode::Leaf(FieldKind::String))
        );
    }

    #[test]
    fn test_bare_definition_collapses() {
        let doc = json!({
            "definitions": {
                "Tag": {"type": "string"},
                "Scores": {"type": "array", "items": {"type": "integer"}},
            }
        });

        assert_eq!(
            build(&doc, "Tag").unwrap(),
            SchemaNode::Leaf(FieldKind::String)
        );
        assert_eq!(
            build(&doc, "Scores").unwrap(),
            SchemaNode::sequence(SchemaNode::Leaf(FieldKind::Number))
        );
    }

    #[test]
    fn test_falsy_fields_skipped() {
        let doc = json!({
            "definitions": {
                "Pet": {
                    "properties": {
                        "name": {"type": "string"},
                        "ghost": null,
                    }
                }
            }
        });

        let SchemaNode::Object(fields) = build(&doc, "Pet").unwrap() else {
            panic!("expected object node")
        };
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("name"));
    }

    #[test]
    fn test_unknown_reference() {
        let doc = json!({
            "definitions": {
                "Pet": {"properties": {"owner": {"$ref": "#/definitions/Owner"}}},
            }
        });

        assert_eq!(
            build(&doc, "Pet").unwrap_err(),
            CompileError::UnknownReference {
                name: "Owner".into()
            }
        );
    }

    #[test]
    fn test_self_reference_is_cyclic() {
        let doc = json!({
            "definitions": {
                "Node": {"properties": {"next": {"$ref": "#/definitions/Node"}}},
            }
        });

        assert_eq!(
            build(&doc, "Node").unwrap_err(),
            CompileError::CyclicReference {
                name: "Node".into()
            }
        );
    }

    #[test]
    fn test_transitive_cycle() {
        let doc = json!({
            "definitions": {
                "A": {"properties": {"b": {"$ref": "#/definitions/B"}}},
                "B": {"properties": {"a": {"$ref": "#/definitions/A"}}},
            }
        });

        assert_eq!(
            build(&doc, "A").unwrap_err(),
            CompileError::CyclicReference { name: "A".into() }
        );
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // Two fields referencing the same definition is re-use, not a loop.
        let doc = json!({
            "definitions": {
                "Leaf": {"properties": {"v": {"type": "integer"}}},
                "Root": {
                    "properties": {
                        "left": {"$ref": "#/definitions/Leaf"},
                        "right": {"$ref": "#/definitions/Leaf"},
                    }
                }
            }
        });

        let SchemaNode::Object(fields) = build(&doc, "Root").unwrap() else {
            panic!("expected object node")
        };
        assert_eq!(fields["left"], fields["right"]);
    }
}
