//! Host-package introspection.
//!
//! Builds a read-only lookup from struct name to ordered field list by
//! parsing every `.rs` file in a package directory with `syn`. The load is
//! all-or-nothing: a directory that cannot be read or a file that fails to
//! parse aborts the load, since downstream rule handlers depend on accurate
//! field typing.

use crate::error::IntrospectError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use syn::Item;
use tracing::debug;

/// One named struct field with its declared type.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Field name as declared.
    pub name: String,
    /// Declared field type.
    pub ty: syn::Type,
}

/// Immutable lookup from struct name to its ordered fields.
///
/// Built once by [`StructIndex::load`]; never mutated afterwards, so shared
/// reads need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct StructIndex {
    structs: HashMap<String, Vec<FieldInfo>>,
}

impl StructIndex {
    /// Loads every `*.rs` file in `dir` and indexes its struct declarations.
    ///
    /// Structs with named fields are indexed, including those declared in
    /// inline `mod` blocks. Files are visited in path order so repeated
    /// loads observe the same declarations.
    ///
    /// # Errors
    /// Returns `IntrospectError` if the directory or any source file cannot
    /// be read, or any source file fails to parse. No partial index is
    /// produced.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, IntrospectError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|source| IntrospectError::Directory {
            path: dir.display().to_string(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| IntrospectError::Directory {
                path: dir.display().to_string(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "rs") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut index = Self::default();
        for path in paths {
            let text =
                std::fs::read_to_string(&path).map_err(|source| IntrospectError::File {
                    path: path.display().to_string(),
                    source,
                })?;
            let file = syn::parse_file(&text).map_err(|err| IntrospectError::Syntax {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
            index.collect_items(&file.items);
            debug!(file = %path.display(), "indexed host source file");
        }

        debug!(structs = index.structs.len(), "host package loaded");
        Ok(index)
    }

    fn collect_items(&mut self, items: &[Item]) {
        for item in items {
            match item {
                Item::Struct(s) => {
                    if let syn::Fields::Named(named) = &s.fields {
                        let fields = named
                            .named
                            .iter()
                            .filter_map(|f| {
                                f.ident.as_ref().map(|ident| FieldInfo {
                                    name: ident.to_string(),
                                    ty: f.ty.clone(),
                                })
                            })
                            .collect();
                        self.structs.insert(s.ident.to_string(), fields);
                    }
                }
                Item::Mod(m) => {
                    if let Some((_, nested)) = &m.content {
                        self.collect_items(nested);
                    }
                }
                _ => {}
            }
        }
    }

    /// Returns the ordered fields of `name`, if the struct was indexed.
    #[must_use]
    pub fn fields(&self, name: &str) -> Option<&[FieldInfo]> {
        self.structs.get(name).map(Vec::as_slice)
    }

    /// Whether `name` was indexed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.structs.contains_key(name)
    }

    /// Number of indexed structs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structs.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_host_file(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).expect("write fixture");
    }

    #[test]
    fn test_load_indexes_structs_in_order() {
        let dir = TempDir::new().expect("tempdir");
        write_host_file(
            &dir,
            "models.rs",
            r"
            pub struct Tag {
                pub id: i32,
                pub order_number: i64,
            }

            pub struct News {
                pub id: i32,
                pub title: String,
            }
            ",
        );

        let index = StructIndex::load(dir.path()).expect("load failed");
        assert_eq!(index.len(), 2);

        let tag = index.fields("Tag").expect("Tag not indexed");
        let names: Vec<&str> = tag.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "order_number"]);
    }

    #[test]
    fn test_load_walks_inline_modules_and_skips_tuple_structs() {
        let dir = TempDir::new().expect("tempdir");
        write_host_file(
            &dir,
            "lib.rs",
            r"
            pub struct Meters(pub f64);

            mod inner {
                pub struct Category {
                    pub id: i32,
                }
            }
            ",
        );

        let index = StructIndex::load(dir.path()).expect("load failed");
        assert!(index.contains("Category"));
        assert!(!index.contains("Meters"));
    }

    #[test]
    fn test_load_rejects_unparsable_file() {
        let dir = TempDir::new().expect("tempdir");
        write_host_file(&dir, "ok.rs", "pub struct A { pub id: i32 }");
        write_host_file(&dir, "broken.rs", "pub struct {");

        let err = StructIndex::load(dir.path()).unwrap_err();
        assert!(matches!(err, IntrospectError::Syntax { .. }));
        assert!(err.to_string().contains("broken.rs"));
    }

    #[test]
    fn test_load_rejects_missing_directory() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("no-such-dir");
        let err = StructIndex::load(&missing).unwrap_err();
        assert!(matches!(err, IntrospectError::Directory { .. }));
    }
}
