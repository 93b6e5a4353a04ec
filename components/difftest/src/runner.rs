//! Comparison runner
//!
//! Drives both disassemblers over an opcode list, strictly in order and one
//! invocation at a time, writing a block per opcode as it goes.

use crate::error::DifftestResult;
use crate::report::{Comparison, RunReport};
use crate::tool::Disassembler;
use std::io::Write;

/// Render the human-readable block for one comparison
///
/// ```text
/// ** TEST: d503201f **
/// r2: <reference output>
/// la: <candidate output>
/// ```
/// followed by an empty line.
pub fn format_comparison(comparison: &Comparison) -> String {
    format!(
        "** TEST: {} **\nr2: {}\nla: {}\n\n",
        comparison.opcode, comparison.reference.stdout, comparison.candidate.stdout
    )
}

/// Runs a reference and a candidate disassembler side by side
pub struct ComparisonRunner<R, C> {
    /// Trusted disassembler
    reference: R,
    /// Disassembler under test
    candidate: C,
}

impl<R: Disassembler, C: Disassembler> ComparisonRunner<R, C> {
    /// Create a runner from the two tools
    pub fn new(reference: R, candidate: C) -> Self {
        Self {
            reference,
            candidate,
        }
    }

    /// Reference tool
    pub fn reference(&self) -> &R {
        &self.reference
    }

    /// Candidate tool
    pub fn candidate(&self) -> &C {
        &self.candidate
    }

    /// Run one opcode through the reference tool, then the candidate
    pub fn compare(&mut self, opcode: &str) -> Comparison {
        let reference = self.reference.disassemble(opcode);
        let candidate = self.candidate.disassemble(opcode);

        Comparison {
            opcode: opcode.to_string(),
            reference,
            candidate,
        }
    }

    /// Run every opcode in order, writing each block to `out` as soon as
    /// it is available
    ///
    /// # Errors
    /// Returns `DifftestError::Io` if writing to `out` fails
    pub fn run<I, S, W>(&mut self, opcodes: I, out: &mut W) -> DifftestResult<RunReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let mut report = RunReport::new();

        for opcode in opcodes {
            let comparison = self.compare(opcode.as_ref());
            out.write_all(format_comparison(&comparison).as_bytes())?;
            out.flush()?;
            report.add(comparison);
        }

        tracing::info!(
            reference = self.reference.name(),
            candidate = self.candidate.name(),
            "{}",
            report.summary()
        );
        Ok(report)
    }
}
