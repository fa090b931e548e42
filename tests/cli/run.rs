use crate::cli::support::{stdout_lines, stepsearch, stepsearch_in};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Streaming output
// ============================================================================

#[test]
fn test_bfs_run_human_output() {
    let output = stepsearch()
        .args(["run", "a", "e", "--algorithm", "bfs"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "frontier A");
    assert_eq!(lines[1], "visited  A");
    assert!(lines.contains(&"goal     E".to_string()));
    assert!(lines.contains(&"Goal node 'E' reached!".to_string()));
    assert!(lines.contains(&"visited: A B C D".to_string()));
    assert_eq!(lines.last().unwrap(), "path: A -> B -> E");
}

#[test]
fn test_default_algorithm_is_greedy() {
    stepsearch()
        .args(["--format", "records", "run", "A", "N"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S algorithm=gbfs start=A goal=N reached=true"))
        .stdout(predicate::str::contains("P A C F J N"));
}

#[test]
fn test_greedy_run_announces_heuristics() {
    stepsearch()
        .args(["run", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "heuristics: A=0 B=5 C=0 D=6 E=4 F=4 G=5 H=7 I=5 J=3 K=1 L=8 M=4 N=3\n",
        ));
}

#[test]
fn test_unreachable_goal_still_succeeds() {
    stepsearch()
        .args(["run", "B", "C", "-a", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visited: B D E H I L M"))
        .stdout(predicate::str::contains("goal C not reached"));
}

#[test]
fn test_quiet_omits_summary() {
    stepsearch()
        .args(["--quiet", "run", "K"])
        .assert()
        .success()
        .stdout("frontier K\nvisited  K\n");
}

#[test]
fn test_json_run_document() {
    let output = stepsearch()
        .args(["--format", "json", "run", "A", "E", "--algorithm", "bfs"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["outcome"]["algorithm"], "bfs");
    assert_eq!(document["outcome"]["goal_reached"], true);
    assert_eq!(document["outcome"]["path"], serde_json::json!(["A", "B", "E"]));
    let events = document["events"].as_array().unwrap();
    assert_eq!(events.last().unwrap()["event"], "goal_reached");
    assert_eq!(events.last().unwrap()["node"], "E");
}

// ============================================================================
// Invalid input
// ============================================================================

#[test]
fn test_invalid_start_exit_code_2() {
    stepsearch()
        .args(["run", "Z"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid start node: 'Z'"));
}

#[test]
fn test_invalid_goal_json_error() {
    stepsearch()
        .args(["--format", "json", "run", "A", "Q"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"type\":\"invalid_node\""));
}

// ============================================================================
// Graph files and config
// ============================================================================

#[test]
fn test_run_with_graph_file() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("line.toml");
    fs::write(
        &graph,
        "nodes = [\"x\", \"y\", \"z\"]\nedges = [[\"x\", \"y\"], [\"y\", \"z\"]]\n\n[heuristics]\nx = 2\ny = 1\nz = 0\n",
    )
    .unwrap();

    stepsearch()
        .args(["--graph", graph.to_str().unwrap(), "run", "X", "z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: X -> Y -> Z"));
}

#[test]
fn test_missing_graph_file_exit_code_3() {
    stepsearch()
        .args(["--graph", "/nonexistent/tree.toml", "run", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_invalid_graph_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("bad.json");
    fs::write(&graph, r#"{"nodes": ["A"], "edges": [["A", "B"]]}"#).unwrap();

    stepsearch()
        .args(["--graph", graph.to_str().unwrap(), "run", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph definition"));
}

#[test]
fn test_config_sets_default_algorithm() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "algorithm = \"bfs\"\n").unwrap();

    stepsearch_in(dir.path())
        .args(["--format", "records", "run", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S algorithm=bfs"));

    stepsearch_in(dir.path())
        .args(["--format", "records", "run", "A", "--algorithm", "gbfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S algorithm=gbfs"));
}
