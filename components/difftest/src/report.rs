use crate::tool::ToolOutput;
use serde::{Deserialize, Serialize};

/// Both disassemblers' output for one opcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Opcode under test
    pub opcode: String,
    /// Reference (radare2) output
    pub reference: ToolOutput,
    /// Candidate (libarch) output
    pub candidate: ToolOutput,
}

/// Record of a difftest run
///
/// The failure counters only track tools that could not be started or
/// exited non-zero; they say nothing about whether the outputs agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Number of opcodes run
    pub total: usize,
    /// Reference invocations that failed to start or exited non-zero
    pub reference_failures: usize,
    /// Candidate invocations that failed to start or exited non-zero
    pub candidate_failures: usize,
    /// Every comparison, in run order
    pub comparisons: Vec<Comparison>,
}

impl RunReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one comparison
    pub fn add(&mut self, comparison: Comparison) {
        self.total += 1;
        if !comparison.reference.is_success() {
            self.reference_failures += 1;
        }
        if !comparison.candidate.is_success() {
            self.candidate_failures += 1;
        }
        self.comparisons.push(comparison);
    }

    /// Opcodes in the order they were run
    pub fn opcodes(&self) -> Vec<&str> {
        self.comparisons.iter().map(|c| c.opcode.as_str()).collect()
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} opcodes run, {} reference failures, {} candidate failures",
            self.total, self.reference_failures, self.candidate_failures
        )
    }

    /// Export report as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import report from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
