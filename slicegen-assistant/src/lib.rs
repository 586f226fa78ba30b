//! # SliceGen Assistant
//!
//! Assembles prompts asking an external assistant to write or extend the
//! companion test file of a source file. The directive depends on whether
//! the companion file already exists: absent means a create prompt holding
//! only the source, present means an append prompt holding the source plus
//! the existing tests.

pub mod error;

pub use error::AssistantError;

use std::path::{Path, PathBuf};

/// Suffix inserted before the file extension to name the companion file.
const TEST_SUFFIX: &str = "_test";

/// Extension assumed when the source path carries none.
const DEFAULT_EXTENSION: &str = "rs";

/// A prompt directive for the external assistant.
#[derive(Debug, Clone)]
pub struct TestPrompt {
    /// Full prompt text to send.
    pub test_prompt: String,
    /// Companion test file the response should land in.
    pub test_filename: PathBuf,
    /// Whether the response must be appended to an existing file rather
    /// than written as a new one.
    pub append_to_file: bool,
}

/// Derives the companion test-file path for `path`.
///
/// The `_test` suffix is inserted before the extension (`file.rs` becomes
/// `file_test.rs`); an empty path stays empty and a path without an
/// extension gets `.rs`. The derivation is not idempotent: applying it to
/// `file_test.rs` yields `file_test_test.rs`.
#[must_use]
pub fn test_filename(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return PathBuf::new();
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map_or_else(|| DEFAULT_EXTENSION.to_string(), |e| e.to_string_lossy().into_owned());

    let mut out = path.to_path_buf();
    out.set_file_name(format!("{stem}{TEST_SUFFIX}.{extension}"));
    out
}

/// Builds the test prompt for `source`, originating from `filename`.
///
/// # Errors
/// Returns `AssistantError` if the companion test file exists but cannot be
/// read; there is no silent fallback to a create prompt.
pub fn user_prompt_for_tests(
    source: &[u8],
    filename: impl AsRef<Path>,
) -> Result<TestPrompt, AssistantError> {
    let companion = test_filename(filename.as_ref());
    let source = String::from_utf8_lossy(source);

    match std::fs::read_to_string(&companion) {
        Ok(existing) => Ok(TestPrompt {
            test_prompt: format!(
                "Write tests for the following Rust source file.\n\n\
                 {source}\n\n\
                 The companion test file already contains:\n\n\
                 {existing}\n\n\
                 Add only new test functions; do not repeat existing ones.\n"
            ),
            test_filename: companion,
            append_to_file: true,
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(TestPrompt {
            test_prompt: format!(
                "Write tests for the following Rust source file.\n\
                 Return full test file as Rust code.\n\n\
                 {source}\n"
            ),
            test_filename: companion,
            append_to_file: false,
        }),
        Err(err) => Err(AssistantError::ReadTests {
            path: companion.display().to_string(),
            source: err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_test_filename() {
        let cases = [
            ("file.rs", "file_test.rs"),
            ("path/to/file.rs", "path/to/file_test.rs"),
            ("file_test.rs", "file_test_test.rs"),
            ("file", "file_test.rs"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(
                test_filename(Path::new(input)),
                PathBuf::from(expected),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_create_prompt_when_no_companion_exists() {
        let dir = TempDir::new().expect("tempdir");
        let filename = dir.path().join("models.rs");
        let source = b"pub struct News { pub id: i32 }";

        let prompt = user_prompt_for_tests(source, &filename).expect("prompt failed");
        assert!(!prompt.append_to_file);
        assert!(prompt.test_prompt.contains("pub struct News"));
        assert!(prompt.test_prompt.contains("Return full test file"));
        assert_eq!(prompt.test_filename, dir.path().join("models_test.rs"));
    }

    #[test]
    fn test_append_prompt_when_companion_exists() {
        let dir = TempDir::new().expect("tempdir");
        let filename = dir.path().join("models.rs");
        let existing = "#[test]\nfn test_ids() {}\n";
        std::fs::write(dir.path().join("models_test.rs"), existing).expect("write fixture");

        let prompt =
            user_prompt_for_tests(b"pub struct News {}", &filename).expect("prompt failed");
        assert!(prompt.append_to_file);
        assert!(prompt.test_prompt.contains("pub struct News"));
        assert!(prompt.test_prompt.contains("test_ids"));
        assert!(prompt.test_prompt.contains("Add only new test functions"));
    }

    #[test]
    fn test_unreadable_companion_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let filename = dir.path().join("models.rs");
        // A directory at the companion path exists but cannot be read as a
        // file, regardless of the user the tests run as.
        std::fs::create_dir(dir.path().join("models_test.rs")).expect("create dir fixture");

        let err = user_prompt_for_tests(b"pub struct News {}", &filename).unwrap_err();
        assert!(err.to_string().contains("models_test.rs"));
    }
}
