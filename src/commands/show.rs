//! Show command

use std::time::Instant;

use arbo_core::error::Result;
use arbo_core::graph::{format_weight, Graph};

use crate::cli::{Cli, OutputFormat};
use crate::commands::resolve_graph;

/// Execute the show command
pub fn execute(cli: &Cli, start: Instant) -> Result<()> {
    let graph = resolve_graph(cli)?;
    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_graph");
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
        OutputFormat::Human => output_show_human(cli, &graph),
        OutputFormat::Records => output_show_records(&graph),
    }

    Ok(())
}

/// Output graph in human-readable format
fn output_show_human(cli: &Cli, graph: &Graph) {
    if graph.is_empty() {
        if !cli.quiet {
            println!("Graph is empty");
        }
        return;
    }

    println!(
        "Graph ({} vertices, {} edges):",
        graph.vertex_count(),
        graph.edge_count()
    );
    for u in graph.vertices() {
        let neighbors: Vec<String> = graph
            .neighbors(u)
            .map(|(v, w)| format!("{}({})", v, format_weight(w)))
            .collect();
        if neighbors.is_empty() {
            println!("  {} ->", u);
        } else {
            println!("  {} -> {}", u, neighbors.join(", "));
        }
    }
}

/// Output graph in records format
fn output_show_records(graph: &Graph) {
    println!(
        "H arbo=1 records=1 mode=show vertices={} edges={}",
        graph.vertex_count(),
        graph.edge_count()
    );
    for v in graph.vertices() {
        println!("V {}", v);
    }
    for (u, v, w) in graph.edges() {
        println!("E {} {} {}", u, v, format_weight(w));
    }
}
