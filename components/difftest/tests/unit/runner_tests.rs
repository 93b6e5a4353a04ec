//! Unit tests for the comparison runner

use difftest::{format_comparison, ComparisonRunner, Disassembler, ToolOutput};
use std::cell::RefCell;
use std::rc::Rc;

type CallLog = Rc<RefCell<Vec<(String, String)>>>;

/// Disassembler that records every call into a shared log
struct RecordingTool {
    name: &'static str,
    log: CallLog,
    exit_code: Option<i32>,
}

impl RecordingTool {
    fn new(name: &'static str, log: &CallLog) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            exit_code: Some(0),
        }
    }

    fn failing(name: &'static str, log: &CallLog) -> Self {
        Self {
            exit_code: Some(1),
            ..Self::new(name, log)
        }
    }
}

impl Disassembler for RecordingTool {
    fn name(&self) -> &str {
        self.name
    }

    fn disassemble(&mut self, opcode: &str) -> ToolOutput {
        self.log
            .borrow_mut()
            .push((self.name.to_string(), opcode.to_string()));
        ToolOutput::new(&format!("{} {}\n", self.name, opcode), self.exit_code)
    }
}

fn calls_for(log: &CallLog, name: &str) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|(tool, _)| tool == name)
        .map(|(_, op)| op.clone())
        .collect()
}

#[test]
fn test_each_tool_invoked_once_per_opcode_in_order() {
    let log = CallLog::default();
    let mut runner =
        ComparisonRunner::new(RecordingTool::new("r2", &log), RecordingTool::new("la", &log));
    let opcodes = vec!["d503201f", "8b020020", "d503201f"];

    let mut out: Vec<u8> = Vec::new();
    let report = runner.run(&opcodes, &mut out).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(calls_for(&log, "r2"), opcodes);
    assert_eq!(calls_for(&log, "la"), opcodes);
}

#[test]
fn test_reference_runs_before_candidate() {
    let log = CallLog::default();
    let mut runner =
        ComparisonRunner::new(RecordingTool::new("r2", &log), RecordingTool::new("la", &log));

    runner.run(["a", "b"], &mut std::io::sink()).unwrap();

    let order: Vec<(String, String)> = log.borrow().clone();
    let expected = vec![
        ("r2".to_string(), "a".to_string()),
        ("la".to_string(), "a".to_string()),
        ("r2".to_string(), "b".to_string()),
        ("la".to_string(), "b".to_string()),
    ];
    assert_eq!(order, expected);
}

#[test]
fn test_output_blocks() {
    let log = CallLog::default();
    let mut runner =
        ComparisonRunner::new(RecordingTool::new("r2", &log), RecordingTool::new("la", &log));

    let mut out: Vec<u8> = Vec::new();
    runner.run(["d503201f"], &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "** TEST: d503201f **\nr2: r2 d503201f\nla: la d503201f\n\n"
    );
}

#[test]
fn test_empty_opcode_list() {
    let log = CallLog::default();
    let mut runner =
        ComparisonRunner::new(RecordingTool::new("r2", &log), RecordingTool::new("la", &log));

    let mut out: Vec<u8> = Vec::new();
    let report = runner.run(Vec::<String>::new(), &mut out).unwrap();

    assert_eq!(report.total, 0);
    assert!(out.is_empty());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_failing_tool_does_not_stop_run() {
    let log = CallLog::default();
    let mut runner = ComparisonRunner::new(
        RecordingTool::new("r2", &log),
        RecordingTool::failing("la", &log),
    );

    let report = runner.run(["a", "b"], &mut std::io::sink()).unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.reference_failures, 0);
    assert_eq!(report.candidate_failures, 2);
    assert_eq!(report.opcodes(), vec!["a", "b"]);
}

#[test]
fn test_compare_single() {
    let log = CallLog::default();
    let mut runner =
        ComparisonRunner::new(RecordingTool::new("r2", &log), RecordingTool::new("la", &log));

    let comparison = runner.compare("f9400020");
    assert_eq!(comparison.opcode, "f9400020");
    assert_eq!(comparison.reference.stdout, "r2 f9400020");
    assert_eq!(comparison.candidate.stdout, "la f9400020");
    assert_eq!(runner.reference().name(), "r2");
    assert_eq!(runner.candidate().name(), "la");
}

#[test]
fn test_format_empty_outputs() {
    let comparison = difftest::Comparison {
        opcode: "00000000".to_string(),
        reference: ToolOutput::not_spawned(),
        candidate: ToolOutput::new("", Some(0)),
    };
    assert_eq!(
        format_comparison(&comparison),
        "** TEST: 00000000 **\nr2: \nla: \n\n"
    );
}
