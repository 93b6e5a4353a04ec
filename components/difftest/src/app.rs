//! Top-level run orchestration
//!
//! Loads the test file, wires up both external tools and sends the
//! comparison blocks to stdout or the requested output file.

use crate::error::DifftestResult;
use crate::report::RunReport;
use crate::runner::ComparisonRunner;
use crate::tool::ExternalTool;
use opcode_suite::OpcodeSuite;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Everything a run needs, passed explicitly rather than held globally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifftestConfig {
    /// libarch CLI (candidate)
    pub libarch: PathBuf,
    /// radare2 binary (reference)
    pub radare2: PathBuf,
    /// Test-case file
    pub testfile: PathBuf,
    /// Destination for comparison blocks; stdout when `None`
    pub output: Option<PathBuf>,
    /// Destination for the JSON run report
    pub json: Option<PathBuf>,
}

/// Execute a full difftest run
///
/// # Errors
/// Returns an error if the test file cannot be read or an output file
/// cannot be written. Tool failures never abort the run.
pub fn execute(config: &DifftestConfig) -> DifftestResult<RunReport> {
    tracing::debug!(?config, "starting difftest run");

    let suite = OpcodeSuite::load(&config.testfile)?;

    let mut runner = ComparisonRunner::new(
        ExternalTool::reference(&config.radare2),
        ExternalTool::candidate(&config.libarch),
    );

    let report = match &config.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            let report = runner.run(suite.opcodes(), &mut out)?;
            out.flush()?;
            report
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            runner.run(suite.opcodes(), &mut out)?
        }
    };

    if let Some(path) = &config.json {
        std::fs::write(path, report.to_json()?)?;
        tracing::info!(path = %path.display(), "wrote JSON report");
    }

    Ok(report)
}
