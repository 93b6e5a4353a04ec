//! Disassembler differential-test runner
//!
//! Runs every opcode of a test file through a reference disassembler
//! (radare2) and the libarch CLI, printing both outputs side by side for
//! manual comparison.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;
pub mod tool;

pub use app::{execute, DifftestConfig};
pub use cli::Cli;
pub use error::{DifftestError, DifftestResult};
pub use report::{Comparison, RunReport};
pub use runner::{format_comparison, ComparisonRunner};
pub use tool::{Disassembler, ExternalTool, ToolOutput, REFERENCE_ARGS};
