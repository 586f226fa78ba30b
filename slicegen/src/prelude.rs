//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use slicegen::prelude::*;
//! ```

// Schema types
pub use slicegen_schema::{CustomRule, FieldInfo, Rule, StructIndex, parse_rules};
pub use slicegen_schema::{IntrospectError, ParseError};

// Codegen types
pub use slicegen_codegen::{CodegenError, Generator, Settings, generate_from_lines};

// Assistant types
pub use slicegen_assistant::{AssistantError, TestPrompt, test_filename, user_prompt_for_tests};
