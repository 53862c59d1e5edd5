//! Check command
//!
//! Doctor-style validation of a graph definition: reports every
//! structural violation rather than failing on the first.

use std::time::Instant;

use serde::Serialize;

use arbo_core::error::{ArboError, Result};

use crate::cli::{Cli, OutputFormat};
use crate::commands::resolve_graph_unchecked;

#[derive(Debug, Serialize)]
struct CheckFinding {
    kind: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    ok: bool,
    vertices: usize,
    edges: usize,
    findings: Vec<CheckFinding>,
}

/// Execute the check command
pub fn execute(cli: &Cli, start: Instant) -> Result<()> {
    let graph = resolve_graph_unchecked(cli)?;
    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_graph");
    }

    let violations = graph.violations();
    let report = CheckReport {
        ok: violations.is_empty(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        findings: violations
            .iter()
            .map(|v| CheckFinding {
                kind: v.error_type().to_string(),
                message: v.to_string(),
            })
            .collect(),
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => output_check_human(cli, &report),
        OutputFormat::Records => output_check_records(&report),
    }

    if report.ok {
        Ok(())
    } else {
        Err(ArboError::InvalidGraph {
            count: report.findings.len(),
        })
    }
}

/// Output check report in human-readable format
fn output_check_human(cli: &Cli, report: &CheckReport) {
    if report.ok {
        if !cli.quiet {
            println!(
                "Graph OK ({} vertices, {} edges)",
                report.vertices, report.edges
            );
        }
        return;
    }

    println!("Found {} violation(s):", report.findings.len());
    for finding in &report.findings {
        println!("  [{}] {}", finding.kind, finding.message);
    }
}

/// Output check report in records format
fn output_check_records(report: &CheckReport) {
    println!(
        "H arbo=1 records=1 mode=check ok={} vertices={} edges={}",
        report.ok, report.vertices, report.edges
    );
    for finding in &report.findings {
        println!("D {} {}", finding.kind, finding.message);
    }
}
