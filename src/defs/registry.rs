#![deny(missing_docs)]

//! # Definitions Registry
//!
//! A read-only view over the document's `definitions` object, scoped to one
//! compile call and passed explicitly through the builder and resolver.
//! Concurrent compiles against different documents never share state.

use crate::error::{CompileError, CompileResult};
use serde_json::{Map, Value};

/// The definitions registry for a single compile invocation.
pub(crate) struct Definitions<'a> {
    entries: Option<&'a Map<String, Value>>,
}

impl<'a> Definitions<'a> {
    /// Builds the registry from a loaded document.
    ///
    /// A document without a `definitions` object yields an empty registry;
    /// the compile then produces an empty result rather than erroring.
    pub(crate) fn from_document(document: &'a Value) -> Self {
        Definitions {
            entries: document.get("definitions").and_then(Value::as_object),
        }
    }

    /// Iterates the registered definitions in document order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.entries.into_iter().flatten()
    }

    /// Looks up a definition by name.
    pub(crate) fn get(&self, name: &str) -> CompileResult<&'a Value> {
        self.entries
            .and_then(|entries| entries.get(name))
            .ok_or_else(|| CompileError::UnknownReference {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup() {
        let doc = json!({"definitions": {"Pet": {"properties": {}}}});
        let defs = Definitions::from_document(&doc);
        assert!(defs.get("Pet").is_ok());
        assert_eq!(
            defs.get("Owner").unwrap_err(),
            CompileError::UnknownReference {
                name: "Owner".into()
            }
        );
    }

    #[test]
    fn test_missing_section_is_empty() {
        let doc = json!({"swagger": "2.0"});
        let defs = Definitions::from_document(&doc);
        assert_eq!(defs.iter().count(), 0);
        assert!(defs.get("Pet").is_err());
    }

    #[test]
    fn test_iteration_order() {
        let doc: Value =
            serde_json::from_str(r#"{"definitions": {"B": {}, "A": {}, "C": {}}}"#).unwrap();
        let defs = Definitions::from_document(&doc);
        let names: Vec<&String> = defs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }
}
