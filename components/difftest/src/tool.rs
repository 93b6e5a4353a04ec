//! External disassembler invocation
//!
//! Every tool is run with an explicit argument vector; opcode text is
//! never interpreted by a shell.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Fixed radare2 arguments: ARM, 64-bit, auto-analysis, disassemble
pub const REFERENCE_ARGS: &[&str] = &["-a", "arm", "-b", "64", "-A", "-d"];

/// Captured result of one tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Standard output with trailing whitespace removed
    pub stdout: String,
    /// Exit code, if the process ran and exited normally
    pub exit_code: Option<i32>,
    /// Whether the process could be started at all
    pub spawned: bool,
}

impl ToolOutput {
    /// Build an output from captured stdout, trimming trailing whitespace
    pub fn new(stdout: &str, exit_code: Option<i32>) -> Self {
        Self {
            stdout: stdout.trim_end().to_string(),
            exit_code,
            spawned: true,
        }
    }

    /// Output for a process that could not be started
    pub fn not_spawned() -> Self {
        Self {
            stdout: String::new(),
            exit_code: None,
            spawned: false,
        }
    }

    /// Check if the tool ran and exited with status 0
    pub fn is_success(&self) -> bool {
        self.spawned && self.exit_code == Some(0)
    }
}

/// A disassembler that can be asked to decode one opcode
pub trait Disassembler {
    /// Short label used in logs
    fn name(&self) -> &str;

    /// Disassemble a single opcode, blocking until the tool finishes
    fn disassemble(&mut self, opcode: &str) -> ToolOutput;
}

/// A disassembler backed by an external command-line program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTool {
    name: String,
    program: PathBuf,
    args: Vec<String>,
}

impl ExternalTool {
    /// Create a tool that runs `program <args..> <opcode>`
    pub fn new<P: Into<PathBuf>>(name: &str, program: P, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The radare2 reference tool: `<program> -a arm -b 64 -A -d <opcode>`
    pub fn reference<P: Into<PathBuf>>(program: P) -> Self {
        Self::new("r2", program, REFERENCE_ARGS)
    }

    /// The libarch candidate tool: `<program> <opcode>`
    pub fn candidate<P: Into<PathBuf>>(program: P) -> Self {
        Self::new("la", program, &[])
    }

    /// Program that will be executed
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Argument vector passed for `opcode`, excluding the program itself
    pub fn arguments<'a>(&'a self, opcode: &'a str) -> Vec<&'a OsStr> {
        self.args
            .iter()
            .map(OsStr::new)
            .chain(std::iter::once(OsStr::new(opcode)))
            .collect()
    }

    /// Build the command for `opcode`
    pub fn command(&self, opcode: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(self.arguments(opcode))
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());
        command
    }
}

impl Disassembler for ExternalTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn disassemble(&mut self, opcode: &str) -> ToolOutput {
        tracing::debug!(
            tool = %self.name,
            program = %self.program.display(),
            args = ?self.arguments(opcode),
            "invoking disassembler"
        );

        match self.command(opcode).output() {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let result = ToolOutput::new(&stdout, output.status.code());
                if !output.status.success() {
                    tracing::warn!(
                        tool = %self.name,
                        opcode,
                        status = %output.status,
                        "disassembler exited unsuccessfully"
                    );
                }
                result
            }
            Err(e) => {
                tracing::warn!(
                    tool = %self.name,
                    program = %self.program.display(),
                    opcode,
                    error = %e,
                    "failed to start disassembler"
                );
                ToolOutput::not_spawned()
            }
        }
    }
}
