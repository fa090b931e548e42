use crate::cli::support::{stdout_lines, stepsearch};
use predicates::prelude::*;

#[test]
fn test_session_resets_between_runs() {
    let output = stepsearch()
        .args(["session", "-a", "bfs"])
        .write_stdin("K\n\nk\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "== run 1: K (no goal) (bfs)",
            "frontier K",
            "visited  K",
            "visited: K",
            "== run 2: K (no goal) (bfs)",
            "reset",
            "frontier K",
            "visited  K",
            "visited: K",
        ]
    );
}

#[test]
fn test_session_continues_after_invalid_node() {
    stepsearch()
        .args(["session", "--algorithm", "bfs"])
        .write_stdin("Z\nA E\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid start node: 'Z'"))
        .stdout(predicate::str::contains("== run 1: A -> E (bfs)"))
        .stdout(predicate::str::contains("path: A -> B -> E"))
        .stdout(predicate::str::contains("reset").not());
}

#[test]
fn test_session_rejects_extra_tokens() {
    stepsearch()
        .arg("session")
        .write_stdin("A B C\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("expected `START [GOAL]`"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_session_json_one_document_per_run() {
    let output = stepsearch()
        .args(["--format", "json", "session"])
        .write_stdin("A N\nB\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first["outcome"]["goal_reached"], true);
    assert_eq!(first["events"][0]["event"], "heuristics_changed");

    // Second run starts with the reset of all 14 nodes
    let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(second["events"][0]["state"], "unvisited");
    assert_eq!(second["events"][14]["node"], "B");
    assert_eq!(second["events"][14]["state"], "frontier");
}
