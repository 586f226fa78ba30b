//! Error types for rule parsing and package introspection.

use thiserror::Error;

/// Error type for rule DSL parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A rule line named no entity before the separator.
    #[error("empty entity name in rule line '{line}'")]
    EmptyEntity {
        /// Offending line, verbatim.
        line: String,
    },

    /// A token had unbalanced or misplaced parentheses.
    #[error("unbalanced token '{token}' for entity '{entity}'")]
    UnbalancedToken {
        /// Entity the token was attached to.
        entity: String,
        /// Offending token, verbatim.
        token: String,
    },

    /// A token was empty where a rule or field name was expected.
    #[error("empty rule token for entity '{entity}'")]
    EmptyToken {
        /// Entity the token was attached to.
        entity: String,
    },
}

impl ParseError {
    /// Creates an unbalanced-token error.
    pub fn unbalanced(entity: impl Into<String>, token: impl Into<String>) -> Self {
        Self::UnbalancedToken {
            entity: entity.into(),
            token: token.into(),
        }
    }
}

/// Error type for host-package introspection.
#[derive(Debug, Error)]
pub enum IntrospectError {
    /// The package directory could not be read.
    #[error("cannot read package directory '{path}': {source}")]
    Directory {
        /// Directory path.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A source file could not be read.
    #[error("cannot read source file '{path}': {source}")]
    File {
        /// File path.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A source file failed to parse.
    #[error("cannot parse source file '{path}': {message}")]
    Syntax {
        /// File path.
        path: String,
        /// Parser diagnostic.
        message: String,
    },
}
