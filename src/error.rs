#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `CompileError` enum used across the crate.

use derive_more::Display;

/// The compile error enum.
///
/// Every variant is terminal: the whole compile call aborts with no partial
/// result. We use `derive_more` for the `Display` boilerplate.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// No input document was supplied.
    #[display("Swagger spec not supplied")]
    MissingSpec,

    /// The input was neither parseable text/bytes nor a JSON object.
    #[display("Unknown or invalid spec object")]
    InvalidDocument,

    /// A declared `type` tag falls outside the allowed set.
    #[display("Unrecognized schema type: {type_tag}")]
    UnrecognizedType {
        /// The offending type tag.
        type_tag: String,
    },

    /// A `$ref` string does not match `#/definitions/<Name>`.
    #[display("Malformed reference: {reference}")]
    MalformedReference {
        /// The `$ref` string as it appeared in the document.
        reference: String,
    },

    /// A reference names a definition absent from the registry.
    #[display("Unknown definition reference: {name}")]
    UnknownReference {
        /// The missing definition name.
        name: String,
    },

    /// A definition re-entered while it was still being resolved.
    #[display("Cyclic definition reference: {name}")]
    CyclicReference {
        /// The definition whose resolution looped back on itself.
        name: String,
    },
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CompileError {}

/// Helper type alias for Result using CompileError.
pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_offending_input() {
        let err = CompileError::UnrecognizedType {
            type_tag: "uuid".into(),
        };
        assert_eq!(format!("{}", err), "Unrecognized schema type: uuid");

        let err = CompileError::MalformedReference {
            reference: "#/parameters/Limit".into(),
        };
        assert_eq!(format!("{}", err), "Malformed reference: #/parameters/Limit");
    }

    #[test]
    fn test_error_trait_object() {
        // All variants must be usable behind `dyn Error`.
        let err: Box<dyn std::error::Error> = Box::new(CompileError::MissingSpec);
        assert_eq!(err.to_string(), "Swagger spec not supplied");
    }
}
