//! # SliceGen Codegen
//!
//! Collection-type code generation for structs in a host package.
//!
//! This crate provides:
//! - The rule registry and its generation strategies
//! - The code assembler combining rules, introspected fields and handlers
//! - Canonical formatting of the assembled buffer

pub mod error;
pub mod generator;
pub mod registry;
pub mod rust;

pub use error::CodegenError;
pub use generator::{Generator, Settings};
pub use registry::{Emitted, EntityContext, Handler};

/// Generates formatted collection code from DSL lines and a host package
/// directory.
///
/// # Arguments
/// * `lines` - Rule DSL lines
/// * `use_list_suffix` - Force the `List` suffix on collection type names
/// * `settings` - Package name, base imports and version marker
/// * `package_dir` - Directory holding the host package's source files
///
/// # Returns
/// Formatted source bytes.
///
/// # Errors
/// Returns `CodegenError` if parsing, introspection, generation or
/// formatting fails; no partial output is produced.
pub fn generate_from_lines<'a, I>(
    lines: I,
    use_list_suffix: bool,
    settings: Settings,
    package_dir: impl AsRef<std::path::Path>,
) -> Result<Vec<u8>, CodegenError>
where
    I: IntoIterator<Item = &'a str>,
{
    let rules = slicegen_schema::parse_rules(lines, use_list_suffix)?;
    let mut generator = Generator::new(settings);
    generator.use_package_dir(package_dir)?;
    generator.generate(&rules)?;
    generator.format()
}
