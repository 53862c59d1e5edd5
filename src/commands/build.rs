//! Build command

use std::time::Instant;

use arbo_core::error::Result;
use arbo_core::graph::{format_weight, prim_traverse, MstResult};

use crate::cli::{Cli, OutputFormat};
use crate::commands::{resolve_graph, resolve_start};

/// Execute the build command
pub fn execute(
    cli: &Cli,
    requested_start: Option<&str>,
    no_trace: bool,
    start: Instant,
) -> Result<()> {
    let graph = resolve_graph(cli)?;
    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_graph");
    }

    let root = resolve_start(&graph, requested_start)?;
    let result = prim_traverse(&graph, root)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "prim_traverse");
    }

    match cli.format {
        OutputFormat::Json => output_build_json(&result, no_trace)?,
        OutputFormat::Human => output_build_human(cli, &result, no_trace),
        OutputFormat::Records => output_build_records(&result, no_trace),
    }

    Ok(())
}

/// Output build result in JSON format
fn output_build_json(result: &MstResult, no_trace: bool) -> Result<()> {
    let mut json_result = serde_json::to_value(result)?;
    if no_trace {
        if let Some(obj) = json_result.as_object_mut() {
            obj.remove("trace");
        }
    }
    println!("{}", serde_json::to_string_pretty(&json_result)?);
    Ok(())
}

/// Output build result in human-readable format
fn output_build_human(cli: &Cli, result: &MstResult, no_trace: bool) {
    if !no_trace {
        for step in &result.trace {
            println!("step {}:", step.step);
            println!(
                "  edge: {} -- {} (weight {})",
                step.edge.from,
                step.edge.to,
                format_weight(step.edge.weight)
            );
            println!("  admitted: {}", step.edge.to);
            println!("  in tree: {}", step.visited.join(", "));
            println!("  running cost: {}", format_weight(step.running_cost));
        }
        if !result.trace.is_empty() {
            println!();
        }
    }

    if result.edges.is_empty() {
        if !cli.quiet {
            println!("No tree edges");
        }
    } else {
        println!("Minimum spanning tree from {}:", result.start);
        for edge in &result.edges {
            println!(
                "  {} -- {} (weight {})",
                edge.from,
                edge.to,
                format_weight(edge.weight)
            );
        }
    }
    println!("Total cost: {}", format_weight(result.total_cost));

    if !result.complete {
        println!();
        println!("[partial: graph is not connected from {}]", result.start);
    }
}

/// Output build result in records format
fn output_build_records(result: &MstResult, no_trace: bool) {
    println!(
        "H arbo=1 records=1 mode=build start={} complete={} total_cost={} edges={}",
        result.start,
        result.complete,
        format_weight(result.total_cost),
        result.edges.len()
    );
    if !no_trace {
        for step in &result.trace {
            println!(
                "S {} {} {} {} cost={} visited={}",
                step.step,
                step.edge.from,
                step.edge.to,
                format_weight(step.edge.weight),
                format_weight(step.running_cost),
                step.visited.join(",")
            );
        }
    }
    for edge in &result.edges {
        println!(
            "E {} {} {}",
            edge.from,
            edge.to,
            format_weight(edge.weight)
        );
    }
}
