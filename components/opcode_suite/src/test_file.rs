use crate::error::{SuiteError, SuiteResult};
use std::path::{Path, PathBuf};

/// Number of leading lines (title and column header) skipped in every test file
pub const HEADER_LINES: usize = 2;

/// Separator between the opcode text and its commentary
const COMMENT_SEPARATOR: char = '-';

/// A single record from a test file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based line number in the source file
    pub line: usize,
    /// Opcode text handed to both disassemblers
    pub opcode: String,
    /// Free-text commentary following the separator (empty when absent)
    pub description: String,
}

impl TestCase {
    /// Parse one data line into a test case
    ///
    /// Returns `None` when nothing is left of the opcode once surrounding
    /// spaces are stripped (blank lines, lines starting with `-`).
    pub fn parse_line(line_number: usize, line: &str) -> Option<Self> {
        let (opcode, description) = match line.split_once(COMMENT_SEPARATOR) {
            Some((opcode, rest)) => (opcode, rest),
            None => (line, ""),
        };

        let opcode = opcode.trim_matches(' ');
        if opcode.is_empty() {
            return None;
        }

        Some(Self {
            line: line_number,
            opcode: opcode.to_string(),
            description: description.trim_matches(' ').to_string(),
        })
    }
}

/// An ordered collection of test cases loaded from a test file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpcodeSuite {
    path: Option<PathBuf>,
    cases: Vec<TestCase>,
}

impl OpcodeSuite {
    /// Parse test-file contents held in memory
    ///
    /// The first [`HEADER_LINES`] lines are discarded without looking at
    /// them. File order is preserved and duplicates are kept.
    pub fn parse(source: &str) -> Self {
        let cases = source
            .lines()
            .enumerate()
            .skip(HEADER_LINES)
            .filter_map(|(index, line)| {
                let case = TestCase::parse_line(index + 1, line);
                if case.is_none() {
                    tracing::trace!(line = index + 1, "skipping empty record");
                }
                case
            })
            .collect();

        Self { path: None, cases }
    }

    /// Load a test file from disk
    ///
    /// # Errors
    /// Returns `SuiteError::Io` if the file does not exist or cannot be read
    pub fn load<P: AsRef<Path>>(path: P) -> SuiteResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SuiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut suite = Self::parse(&source);
        suite.path = Some(path.to_path_buf());

        tracing::info!(path = %path.display(), cases = suite.len(), "loaded test file");
        Ok(suite)
    }

    /// Path the suite was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All parsed test cases in file order
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// The opcode strings in file order
    pub fn opcodes(&self) -> Vec<String> {
        self.cases.iter().map(|c| c.opcode.clone()).collect()
    }

    /// Number of test cases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the suite has no test cases
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Read a test file and return its opcodes in file order
///
/// # Example
/// ```no_run
/// use opcode_suite::parse_test_file;
///
/// let opcodes = parse_test_file("tests/arm64-data-processing.txt").unwrap();
/// for op in &opcodes {
///     println!("{}", op);
/// }
/// ```
pub fn parse_test_file<P: AsRef<Path>>(path: P) -> SuiteResult<Vec<String>> {
    Ok(OpcodeSuite::load(path)?.opcodes())
}
