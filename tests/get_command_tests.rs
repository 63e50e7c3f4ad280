//! Integration tests for the get command

mod common;

use predicates::prelude::*;

use common::{TOOL_PY, TestWorkspace};

#[test]
fn test_get_text_to_stdout() {
    let workspace = TestWorkspace::new();
    workspace.write_file("tool.py", TOOL_PY);
    workspace
        .spyce()
        .args(["get", "tool.py", "notes.txt"])
        .assert()
        .success()
        .stdout("remember the milk\n");
}

#[test]
fn test_get_source_to_file() {
    let workspace = TestWorkspace::new();
    workspace.write_file("tool.py", TOOL_PY);
    workspace
        .spyce()
        .args(["get", "tool.py", "source/helper", "-o", "out/helper.py"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(
        workspace.read_file("out/helper.py"),
        "def helper():\n    return 1\n"
    );
}

#[test]
fn test_get_unknown_key() {
    let workspace = TestWorkspace::new();
    workspace.write_file("tool.py", TOOL_PY);
    workspace
        .spyce()
        .args(["get", "tool.py", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("spyce data/nope not found"));
}

#[test]
fn test_get_unset_key() {
    let workspace = TestWorkspace::new();
    workspace.write_file("tool.py", "print(1)\n# spyce: start data/pending\n");
    workspace
        .spyce()
        .args(["get", "tool.py", "pending"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not set"));
}

#[test]
fn test_get_output_conflicts_with_untar() {
    let workspace = TestWorkspace::new();
    workspace.write_file("tool.py", TOOL_PY);
    workspace
        .spyce()
        .args(["get", "tool.py", "notes.txt", "-o", "a", "--untar", "b"])
        .assert()
        .failure();
    assert!(!workspace.file_exists("a"));
    assert!(!workspace.file_exists("b"));
}
