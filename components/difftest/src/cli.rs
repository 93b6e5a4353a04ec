//! Command-line arguments

use crate::app::DifftestConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Compare libarch disassembly against radare2, opcode by opcode
#[derive(Parser, Debug)]
#[command(name = "libarch-difftest")]
#[command(about = "Run a test file through radare2 and libarch and print both outputs", long_about = None)]
pub struct Cli {
    /// Path to the libarch CLI (candidate)
    #[arg(short = 'l', long, env = "LIBARCH", value_name = "PATH")]
    pub libarch: PathBuf,

    /// Path to the radare2 binary (reference)
    #[arg(short = 'r', long, env = "RADARE2", value_name = "PATH")]
    pub radare2: PathBuf,

    /// Test-case file: two header lines, then `<opcode> - <description>` per line
    #[arg(short = 't', long, env = "TEST_FILE", value_name = "FILE")]
    pub testfile: PathBuf,

    /// Write comparison blocks to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the run report as JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Turn parsed arguments into a run configuration
    pub fn into_config(self) -> DifftestConfig {
        DifftestConfig {
            libarch: self.libarch,
            radare2: self.radare2,
            testfile: self.testfile,
            output: self.output,
            json: self.json,
        }
    }
}
