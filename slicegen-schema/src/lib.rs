//! # SliceGen Schema
//!
//! Rule DSL parsing and host-package introspection.
//!
//! This crate provides:
//! - Rule and custom-rule types for generation directives
//! - The line-oriented rule DSL parser
//! - Struct introspection over a host package directory
//! - Naming helpers shared with the code generator

pub mod error;
pub mod introspect;
pub mod naming;
pub mod parser;
pub mod rules;

pub use error::{IntrospectError, ParseError};
pub use introspect::{FieldInfo, StructIndex};
pub use naming::{collection_name, pluralize, to_pascal_case, to_snake_case};
pub use parser::parse_rules;
pub use rules::{CustomRule, Rule};
