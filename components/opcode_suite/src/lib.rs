//! Opcode test-suite loader
//!
//! Reads the plain-text test-case files used to drive disassembler
//! differential runs and turns them into an ordered list of opcodes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod test_file;

pub use error::{SuiteError, SuiteResult};
pub use test_file::{parse_test_file, OpcodeSuite, TestCase, HEADER_LINES};
