//! Command implementations for arbo

pub mod build;
pub mod check;
pub mod dispatch;
pub mod export;
pub mod show;

use arbo_core::error::{ArboError, Result};
use arbo_core::graph::{load_graph, load_graph_unchecked, Graph};

use crate::cli::Cli;

/// Load the graph named by --graph, or the built-in example graph.
pub fn resolve_graph(cli: &Cli) -> Result<Graph> {
    match &cli.graph {
        Some(path) => load_graph(path),
        None => Ok(Graph::example()),
    }
}

/// Load the graph named by --graph without structural validation.
pub fn resolve_graph_unchecked(cli: &Cli) -> Result<Graph> {
    match &cli.graph {
        Some(path) => load_graph_unchecked(path),
        None => Ok(Graph::example()),
    }
}

/// Resolve the start vertex.
///
/// An explicitly supplied label must name a vertex; it is never
/// silently replaced. When no label was supplied, the first vertex in
/// label order is used.
pub fn resolve_start<'a>(graph: &'a Graph, requested: Option<&'a str>) -> Result<&'a str> {
    match requested {
        Some(label) => {
            if graph.contains(label) {
                Ok(label)
            } else {
                Err(ArboError::StartNotFound {
                    vertex: label.to_string(),
                })
            }
        }
        None => {
            let start = graph.default_start().ok_or(ArboError::EmptyGraph)?;
            tracing::debug!(start = %start, "default_start");
            Ok(start)
        }
    }
}
