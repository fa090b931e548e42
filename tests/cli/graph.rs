use crate::cli::support::{stdout_lines, stepsearch};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_graph_human() {
    stepsearch()
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes: A B C D E F G H I J K L M N"))
        .stdout(predicate::str::contains("  J -> N"))
        .stdout(predicate::str::contains("  L = 8"));
}

#[test]
fn test_graph_records() {
    let output = stepsearch()
        .args(["--format", "records", "graph"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 27);
    assert_eq!(lines[2], "N C h=2");
    assert_eq!(lines[14], "L A B");
}

#[test]
fn test_graph_json_from_file() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("pair.json");
    fs::write(
        &graph,
        r#"{"nodes": ["p", "q"], "edges": [["p", "q"]], "heuristics": {"p": 1.5}}"#,
    )
    .unwrap();

    let output = stepsearch()
        .args(["--format", "json", "--graph", graph.to_str().unwrap(), "graph"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["nodes"], serde_json::json!(["P", "Q"]));
    assert_eq!(value["edges"][0]["from"], "P");
    assert_eq!(value["heuristics"][0]["estimate"], 1.5);
    assert!(value["heuristics"][1]["estimate"].is_null());
}
