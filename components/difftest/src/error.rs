//! Error types for the difftest runner

use opcode_suite::SuiteError;
use thiserror::Error;

/// Errors that abort a difftest run
///
/// Subprocess failures are not represented here: a tool that cannot be
/// spawned or exits non-zero still produces a (possibly empty) output.
#[derive(Debug, Error)]
pub enum DifftestError {
    /// Test file could not be loaded
    #[error(transparent)]
    Suite(#[from] SuiteError),

    /// Writing comparison output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed
    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for difftest operations
pub type DifftestResult<T> = Result<T, DifftestError>;
