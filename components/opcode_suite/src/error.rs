//! Error types for test-suite loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a test-case file
#[derive(Debug, Error)]
pub enum SuiteError {
    /// The test file could not be read
    #[error("could not read test file '{}': {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type for suite operations
pub type SuiteResult<T> = Result<T, SuiteError>;
