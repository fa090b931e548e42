//! `stepsearch graph`: describe the graph searches run over

use serde_json::json;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::CommandContext;
use stepsearch_core::error::Result;
use stepsearch_core::format::format_estimate;
use stepsearch_core::graph::Graph;
use stepsearch_core::heuristic::HeuristicTable;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let settings = ctx.settings(&SearchArgs::default())?;
    let definition = ctx.graph_definition(&settings)?;
    let (graph, heuristics) = definition.build()?;

    match ctx.cli.format {
        OutputFormat::Human => print!("{}", render_human(&graph, &heuristics)),
        OutputFormat::Records => print!("{}", render_records(&graph, &heuristics)),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&render_json(&graph, &heuristics))?
            );
        }
    }
    Ok(())
}

fn render_human(graph: &Graph, heuristics: &HeuristicTable) -> String {
    let mut out = String::new();
    let nodes: Vec<&str> = graph.nodes().iter().map(|n| n.as_str()).collect();
    out.push_str(&format!("nodes: {}\n", nodes.join(" ")));

    out.push_str("edges:\n");
    for edge in graph.edges() {
        out.push_str(&format!("  {} -> {}\n", edge.from, edge.to));
    }

    out.push_str("heuristics:\n");
    for node in graph.nodes() {
        out.push_str(&format!("  {} = {}\n", node, format_estimate(heuristics.get(node))));
    }
    out
}

/// `N <node> h=<estimate>` per node, then `L <from> <to>` per edge
fn render_records(graph: &Graph, heuristics: &HeuristicTable) -> String {
    let mut out = String::new();
    for node in graph.nodes() {
        out.push_str(&format!("N {} h={}\n", node, format_estimate(heuristics.get(node))));
    }
    for edge in graph.edges() {
        out.push_str(&format!("L {} {}\n", edge.from, edge.to));
    }
    out
}

fn render_json(graph: &Graph, heuristics: &HeuristicTable) -> serde_json::Value {
    // Missing estimates serialize as null
    let estimates: Vec<serde_json::Value> = graph
        .nodes()
        .iter()
        .map(|node| json!({ "node": node, "estimate": heuristics.entry(node) }))
        .collect();

    json!({
        "nodes": graph.nodes(),
        "edges": graph.edges(),
        "heuristics": estimates,
    })
}
