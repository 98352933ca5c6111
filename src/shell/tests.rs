use crate::ast::{Expression, Literal, Statement};
use crate::render::DisplayNode;
use crate::session::run_service::{RunService, RunServiceError};
use crate::session::ExecutionResult;
use crate::shell::Shell;
use crate::shell::display::write_tree;
use crate::shell::editor::BufferEditor;

struct FakeRunService {
    outcome: fn(&str) -> Result<ExecutionResult, RunServiceError>,
}

impl RunService for FakeRunService {
    fn run(&self, code: &str) -> Result<ExecutionResult, RunServiceError> {
        (self.outcome)(code)
    }
}

#[test]
fn test_write_tree_keeps_nesting_and_order() -> anyhow::Result<()> {
    yansi::disable();

    let tree = DisplayNode::branch(
        "+",
        vec![
            DisplayNode::leaf("c"),
            DisplayNode::branch("*", vec![DisplayNode::leaf("1"), DisplayNode::leaf("2")]),
        ],
    );

    let mut out = Vec::new();
    write_tree(&mut out, &tree)?;

    assert_eq!(
        String::from_utf8(out)?,
        [
            "+",
            "├── c",
            "└── *",
            "    ├── 1",
            "    └── 2",
            "",
        ]
        .join("\n")
    );

    Ok(())
}

#[test]
fn test_run_once_presents_tree_and_output() -> anyhow::Result<()> {
    yansi::disable();

    let service = FakeRunService {
        outcome: |_| {
            Ok(ExecutionResult {
                output: "5\n".to_string(),
                ast: vec![Statement::Print(Expression::Literal(Literal::Number(5.0)))],
            })
        },
    };

    let mut shell = Shell::new(service, true);
    let mut out = Vec::new();
    shell.run_once(&BufferEditor::new("print(5)"), &mut out)?;

    let text = String::from_utf8(out)?;
    assert!(text.contains("Syntax tree"));
    assert!(text.contains("print"));
    assert!(text.contains("└── 5"));
    assert!(text.contains("Output\n5\n"));

    Ok(())
}

#[test]
fn test_run_once_presents_failure_reason() -> anyhow::Result<()> {
    yansi::disable();

    let service = FakeRunService {
        outcome: |_| Err(RunServiceError::Network("connection refused".to_string())),
    };

    let mut shell = Shell::new(service, true);
    let mut out = Vec::new();
    shell.run_once(&BufferEditor::new("print(5)"), &mut out)?;

    let text = String::from_utf8(out)?;
    assert!(text.contains("error: could not reach the run service: connection refused"));
    assert!(!text.contains("Syntax tree"));

    Ok(())
}

#[test]
fn test_no_tree_mode_prints_output_only() -> anyhow::Result<()> {
    yansi::disable();

    let service = FakeRunService {
        outcome: |_| {
            Ok(ExecutionResult {
                output: "hello".to_string(),
                ast: vec![Statement::Print(Expression::Literal(Literal::String(
                    "hello".to_string(),
                )))],
            })
        },
    };

    let mut shell = Shell::new(service, false);
    let mut out = Vec::new();
    shell.run_once(&BufferEditor::new("print(\"hello\")"), &mut out)?;

    let text = String::from_utf8(out)?;
    assert!(!text.contains("Syntax tree"));
    // Output without a trailing newline gets one added
    assert!(text.ends_with("Output\nhello\n"));

    Ok(())
}
