//! The code assembler and formatter.
//!
//! [`Generator`] combines parsed rules, the introspected host package and
//! the rule registry into one source buffer, then canonicalizes it with
//! `prettyplease`. Configuration is an explicit [`Settings`] value; nothing
//! is read from ambient state.

use crate::error::CodegenError;
use crate::registry::{self, EntityContext};
use crate::rust::base;
use proc_macro2::TokenStream;
use slicegen_schema::{Rule, StructIndex, collection_name};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Generation settings, supplied by the caller and threaded through every
/// call.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Target package name, named in the generated header.
    pub package: String,
    /// Comma-separated base import list, merged with handler imports.
    pub base_imports: String,
    /// Version string embedded verbatim in the generated-file marker.
    pub version: String,
}

impl Settings {
    /// Creates settings for one generation target.
    #[must_use]
    pub fn new(
        package: impl Into<String>,
        base_imports: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            base_imports: base_imports.into(),
            version: version.into(),
        }
    }
}

/// Assembles generated collection code for one host package.
///
/// The introspected index is built once by [`Generator::use_package_dir`]
/// and reused read-only across generate calls. The output buffer is scoped
/// to one generate call; concurrent `generate` calls on a shared instance
/// must be serialized by the caller.
#[derive(Debug)]
pub struct Generator {
    settings: Settings,
    index: StructIndex,
    buffer: Vec<u8>,
}

impl Generator {
    /// Creates a generator with no host package loaded.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            index: StructIndex::default(),
            buffer: Vec::new(),
        }
    }

    /// Loads the host package directory to introspect.
    ///
    /// # Errors
    /// Returns an introspection error if the directory cannot be read or a
    /// source file fails to parse. The previous index is replaced only on
    /// success.
    pub fn use_package_dir(&mut self, dir: impl AsRef<Path>) -> Result<(), CodegenError> {
        self.index = StructIndex::load(dir)?;
        Ok(())
    }

    /// Generates the source buffer for `rules`.
    ///
    /// Rules are expected in entity-name order, as produced by
    /// `parse_rules`. Output is fully deterministic: entity blocks follow
    /// rule order, custom-rule output follows input order within each
    /// entity, and the import block is deduplicated and sorted.
    ///
    /// # Errors
    /// Returns the first reference, unknown-rule or field-contract error
    /// encountered; no partial buffer is kept on failure.
    pub fn generate(&mut self, rules: &[Rule]) -> Result<Vec<u8>, CodegenError> {
        self.buffer.clear();

        let mut imports: BTreeSet<String> = BTreeSet::new();
        for import in self.settings.base_imports.split(',') {
            let import = import.trim();
            if import.is_empty() {
                continue;
            }
            if syn::parse_str::<syn::Path>(import).is_err() {
                return Err(CodegenError::InvalidImport {
                    import: import.to_string(),
                });
            }
            imports.insert(import.to_string());
        }

        let mut blocks: Vec<TokenStream> = Vec::new();
        for rule in rules {
            let fields = self.index.fields(&rule.entity_name).ok_or_else(|| {
                CodegenError::UnknownEntity {
                    entity: rule.entity_name.clone(),
                }
            })?;
            let collection = collection_name(&rule.entity_name, rule.use_list_suffix);
            let ctx = EntityContext::new(&rule.entity_name, &collection, fields);

            if rule.base_gen {
                let emitted = base::collection_block(&ctx)?;
                imports.extend(emitted.imports.iter().map(ToString::to_string));
                blocks.push(emitted.tokens);
            }

            for custom in &rule.custom_rules {
                let handler = registry::lookup(&custom.name).ok_or_else(|| {
                    CodegenError::UnknownRule {
                        entity: rule.entity_name.clone(),
                        rule: custom.name.clone(),
                    }
                })?;
                let emitted = handler(&ctx, custom)?;
                imports.extend(emitted.imports.iter().map(ToString::to_string));
                blocks.push(emitted.tokens);
            }

            debug!(entity = %rule.entity_name, collection = %collection, "assembled entity block");
        }

        let mut out = String::new();
        out.push_str(&format!(
            "//! Code generated by slicegen {}. DO NOT EDIT.\n",
            self.settings.version
        ));
        out.push_str(&format!(
            "//! Collection accessors for `{}`.\n\n",
            self.settings.package
        ));
        for import in &imports {
            out.push_str(&format!("use {import};\n"));
        }
        for block in blocks {
            out.push('\n');
            out.push_str(&block.to_string());
            out.push('\n');
        }

        self.buffer = out.into_bytes();
        Ok(self.buffer.clone())
    }

    /// Canonicalizes the buffer produced by the last [`Generator::generate`]
    /// call.
    ///
    /// # Errors
    /// Returns `CodegenError::Internal` if the buffer does not parse as a
    /// Rust source file; that indicates an assembler defect, not bad caller
    /// input.
    pub fn format(&self) -> Result<Vec<u8>, CodegenError> {
        let text = std::str::from_utf8(&self.buffer)
            .map_err(|err| CodegenError::internal(format!("buffer is not UTF-8: {err}")))?;
        let file = syn::parse_file(text).map_err(|err| {
            CodegenError::internal(format!("assembled source does not parse: {err}"))
        })?;
        Ok(prettyplease::unparse(&file).into_bytes())
    }
}
