//! # SliceGen
//!
//! Boilerplate collection types and accessors for Rust structs.
//!
//! SliceGen turns a compact rule DSL plus knowledge of a host package's
//! struct declarations into deterministic, formatted Rust source: a named
//! collection newtype per entity with `ids()`/`index()` accessors, plus
//! field projections, field indexes, deduplicated projections and
//! slice-mapping constructors selected by the rules.
//!
//! ## Quick Start
//!
//! ```no_run
//! use slicegen::prelude::*;
//!
//! let settings = Settings::new("newsportal", "crate::db", "devel");
//! let lines = ["News,Tag,Category", "Tag:Index(OrderNumber),OrderNumber"];
//! let code = generate_from_lines(lines, false, settings, "src/models")?;
//! # Ok::<(), slicegen::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Rule DSL parsing and host-package introspection
//! - [`codegen`] - Rule registry, code assembly and formatting
//! - [`assistant`] - Test-prompt assembly for generated files

pub mod prelude;

/// Rule DSL parsing and host-package introspection.
pub mod schema {
    pub use slicegen_schema::*;
}

/// Code generation from rules and introspected structs.
pub mod codegen {
    pub use slicegen_codegen::*;
}

/// Test-prompt assembly.
pub mod assistant {
    pub use slicegen_assistant::*;
}
