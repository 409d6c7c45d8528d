#![deny(missing_docs)]

//! # Swagger Defs
//!
//! Compiles the `definitions` section of a Swagger/OpenAPI 2.0 document into
//! storage-agnostic schema trees: field names mapped to a small set of value
//! kinds, with `#/definitions/<Name>` references resolved recursively.
//!
//! The output is a [`SchemaNode`] tree per definition; turning those trees
//! into concrete storage models is left to a [`PersistenceAdapter`]
//! implementation supplied by the caller.

/// Shared error types.
pub mod error;

/// Document loading: input normalization into a parsed JSON value.
pub mod document;

/// The resolved schema tree data model.
pub mod schema;

/// Definition compilation: registry, reference resolution, type mapping.
pub mod defs;

/// Persistence adapter seam.
pub mod adapter;

pub use adapter::{register_schemas, PersistenceAdapter};
pub use defs::{compile, compile_with, CompiledSchemas};
pub use document::SwaggerSpec;
pub use error::{CompileError, CompileResult};
pub use schema::{FieldKind, SchemaNode};
