//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Rule DSL parsing error.
    #[error("rule parse error: {0}")]
    Parse(#[from] slicegen_schema::ParseError),

    /// Host-package introspection error.
    #[error("introspection error: {0}")]
    Introspect(#[from] slicegen_schema::IntrospectError),

    /// A rule named an entity absent from the introspected package.
    #[error("unknown entity '{entity}'")]
    UnknownEntity {
        /// Entity name.
        entity: String,
    },

    /// A rule name not present in the registry.
    #[error("unknown rule '{rule}' for entity '{entity}'")]
    UnknownRule {
        /// Entity name.
        entity: String,
        /// Rule name.
        rule: String,
    },

    /// An expected struct field is missing.
    #[error("entity '{entity}' has no field '{field}'")]
    MissingField {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
    },

    /// A field's type cannot be used as a map key.
    #[error("field '{field}' of entity '{entity}' has non-comparable type '{type_name}'")]
    NotComparable {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
        /// Rendered field type.
        type_name: String,
    },

    /// A rule argument could not be interpreted.
    #[error("invalid argument '{arg}' for rule '{rule}' on entity '{entity}'")]
    InvalidArgument {
        /// Entity name.
        entity: String,
        /// Rule name.
        rule: String,
        /// Offending argument.
        arg: String,
    },

    /// A caller-supplied base import is not a valid import path.
    #[error("invalid base import '{import}'")]
    InvalidImport {
        /// Offending import path.
        import: String,
    },

    /// The assembled buffer was rejected by the formatter. This indicates a
    /// generator defect, not a problem with the caller's input.
    #[error("internal generation error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an internal generation error with the given message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
