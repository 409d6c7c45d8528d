#![deny(missing_docs)]

//! # Definition Compilation
//!
//! - **registry**: per-compile view over the document's `definitions`.
//! - **refs**: reference detection and `$ref` name extraction.
//! - **mapper**: primitive type tags to schema nodes.
//! - **builder**: property bags to resolved schema trees.

pub mod builder;
pub mod mapper;
pub mod refs;
pub mod registry;

use crate::document::SwaggerSpec;
use crate::error::{CompileError, CompileResult};
use crate::schema::SchemaNode;
use indexmap::IndexMap;
use log::debug;
use registry::Definitions;

/// The compiled result: definition name to root schema node, in document
/// order. Definitions named `*Response` are excluded by convention.
pub type CompiledSchemas = IndexMap<String, SchemaNode>;

/// Compiles a Swagger document's `definitions` into schema trees.
///
/// Fails with `MissingSpec` when no document (or an empty one) is supplied,
/// and with `InvalidDocument` when the input cannot be loaded. Resolution
/// errors abort the whole compile; there are no partial results.
pub fn compile(spec: Option<SwaggerSpec>) -> CompileResult<CompiledSchemas> {
    let spec = match spec {
        Some(spec) if !spec.is_empty() => spec,
        _ => return Err(CompileError::MissingSpec),
    };

    let document = spec.into_document()?;
    let definitions = Definitions::from_document(&document);

    let mut schemas = CompiledSchemas::new();
    for (name, definition) in definitions.iter() {
        // Definitions named `*Response` are wrapper/envelope types, not
        // persisted entities.
        if name.ends_with("Response") {
            continue;
        }
        debug!("compiling definition {}", name);

        let mut trail = vec![name.clone()];
        let node = builder::build_definition(definition, &definitions, &mut trail)?;
        schemas.insert(name.clone(), node);
    }

    Ok(schemas)
}

/// Callback-style variant of [`compile`].
///
/// Performs the same work synchronously and reports through the two-slot
/// completion signal instead of returning: `(None, Some(schemas))` on
/// success, `(Some(error), None)` on failure. Never panics.
pub fn compile_with<F>(spec: Option<SwaggerSpec>, callback: F)
where
    F: FnOnce(Option<CompileError>, Option<CompiledSchemas>),
{
    match compile(spec) {
        Ok(schemas) => callback(None, Some(schemas)),
        Err(err) => callback(Some(err), None),
    }
}
