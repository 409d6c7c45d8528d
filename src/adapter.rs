#![deny(missing_docs)]

//! # Persistence Adapter Seam
//!
//! Decouples the compiled schema trees from whatever storage engine ends up
//! owning them. The core never depends on a concrete backend; callers
//! implement [`PersistenceAdapter`] and receive each definition's tree.

use crate::defs::CompiledSchemas;
use crate::schema::SchemaNode;

/// A strategy trait for registering compiled schemas with a storage backend.
///
/// Implementors turn each schema tree into a concrete, queryable model type
/// under the definition's name.
pub trait PersistenceAdapter {
    /// Registers one definition's schema.
    ///
    /// # Arguments
    ///
    /// * `name` - The definition name.
    /// * `schema` - The definition's tree, wrapped in the one-element outer
    ///   sequence every model schema is constructed from.
    fn register(&mut self, name: &str, schema: SchemaNode);
}

/// Hands every compiled definition to the adapter, in document order.
///
/// Each root node is wrapped in a one-element sequence before registration.
pub fn register_schemas<A: PersistenceAdapter>(schemas: &CompiledSchemas, adapter: &mut A) {
    for (name, node) in schemas {
        adapter.register(name, SchemaNode::sequence(node.clone()));
    }
}
