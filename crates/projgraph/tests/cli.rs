//! Binary-level tests: argument parsing, rendering and exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use projgraph_tests::{FixtureTree, ProjectFixture};

fn projgraph(tree: &FixtureTree) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_projgraph"));
    cmd.current_dir(tree.root())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--workdir")
        .arg(tree.root());
    cmd
}

fn layered_tree() -> FixtureTree {
    let tree = FixtureTree::new().unwrap();
    tree.add_all(&[
        ProjectFixture::sibling("App", &["Core"]),
        ProjectFixture::sibling("Core", &[]),
    ])
    .unwrap();
    tree
}

#[test]
fn text_report_lists_levels() {
    let tree = layered_tree();

    projgraph(&tree)
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects:       2"))
        .stdout(predicate::str::contains("Level 0 (1 project)"))
        .stdout(predicate::str::contains("Core/Core.csproj [net8.0]"))
        .stdout(predicate::str::contains("Level 1 (1 project)"))
        .stdout(predicate::str::contains("App/App.csproj [net8.0]"));
}

#[test]
fn json_report_is_machine_readable() {
    let tree = layered_tree();

    let output = projgraph(&tree)
        .args(["analyze", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["projectCount"], 2);
    assert_eq!(value["levelCount"], 2);
    assert_eq!(value["circular"], serde_json::json!([]));
}

#[test]
fn yaml_report() {
    let tree = layered_tree();

    projgraph(&tree)
        .args(["analyze", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("projectCount: 2"));
}

#[test]
fn cycles_exit_with_one() {
    let tree = FixtureTree::new().unwrap();
    tree.add_all(&[
        ProjectFixture::sibling("A", &["B"]),
        ProjectFixture::sibling("B", &["A"]),
    ])
    .unwrap();

    projgraph(&tree)
        .arg("analyze")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Circular dependencies"))
        .stdout(predicate::str::contains("A/A.csproj <-> B/B.csproj"));
}

#[test]
fn empty_tree_exits_with_one() {
    let tree = FixtureTree::new().unwrap();

    projgraph(&tree)
        .arg("analyze")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No .csproj or .vbproj files found"));
}

#[test]
fn missing_root_exits_with_two() {
    let tree = FixtureTree::new().unwrap();

    projgraph(&tree)
        .args(["analyze", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn unresolved_references_are_reported() {
    let tree = FixtureTree::new().unwrap();
    tree.add(&ProjectFixture::sibling("App", &["Ghost"])).unwrap();

    projgraph(&tree)
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unresolved references (1)"))
        .stdout(predicate::str::contains(r"App/App.csproj -> ..\Ghost\Ghost.csproj"));
}

#[test]
fn version_command() {
    let tree = FixtureTree::new().unwrap();

    projgraph(&tree)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("projgraph "));
}

#[test]
fn no_command_prints_usage_hint() {
    let tree = FixtureTree::new().unwrap();

    projgraph(&tree)
        .assert()
        .success()
        .stdout(predicate::str::contains("projgraph --help"));
}

#[test]
fn invalid_format_is_rejected() {
    let tree = FixtureTree::new().unwrap();

    projgraph(&tree)
        .args(["analyze", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}
