//! Error types for prompt assembly.

use thiserror::Error;

/// Error type for test-prompt assembly.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The companion test file exists but could not be read.
    #[error("cannot read existing test file '{path}': {source}")]
    ReadTests {
        /// Companion file path.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
}
