use std::collections::BTreeSet;

use crate::error::{ArboError, Result};
use crate::graph::types::{Graph, MstResult, TraceStep, TreeEdge};

/// Grow a minimum spanning tree from `start` using Prim's algorithm
/// (dense scan, no priority queue).
///
/// The candidate scan visits tree vertices in ascending label order and
/// each adjacency list likewise, so among equal-weight candidates the
/// first encountered in ascending `(from, to)` order wins. Repeated
/// calls on the same graph produce identical results.
///
/// Disconnection is not an error: when the component containing `start`
/// is exhausted before covering the whole graph, the partial tree is
/// returned with `complete = false`. An unknown `start` fails fast,
/// which also covers the empty graph.
#[tracing::instrument(skip(graph), fields(start = %start, vertices = graph.vertex_count()))]
pub fn prim_traverse(graph: &Graph, start: &str) -> Result<MstResult> {
    if !graph.contains(start) {
        return Err(ArboError::StartNotFound {
            vertex: start.to_string(),
        });
    }

    let mut visited: BTreeSet<String> = BTreeSet::new();
    visited.insert(start.to_string());

    let mut edges: Vec<TreeEdge> = Vec::new();
    let mut trace: Vec<TraceStep> = Vec::new();
    let mut total_cost = 0.0;

    while visited.len() < graph.vertex_count() {
        let mut best: Option<TreeEdge> = None;

        for u in &visited {
            for (v, w) in graph.neighbors(u) {
                if visited.contains(v) {
                    continue;
                }
                // Strict comparison keeps the first minimum in scan order.
                if best.as_ref().is_none_or(|b| w < b.weight) {
                    best = Some(TreeEdge {
                        from: u.clone(),
                        to: v.to_string(),
                        weight: w,
                    });
                }
            }
        }

        let Some(edge) = best else {
            // Reachable component exhausted: not connected from `start`.
            tracing::debug!(
                visited = visited.len(),
                vertices = graph.vertex_count(),
                "component_exhausted"
            );
            break;
        };

        visited.insert(edge.to.clone());
        total_cost += edge.weight;
        tracing::debug!(
            step = trace.len() + 1,
            from = %edge.from,
            to = %edge.to,
            weight = edge.weight,
            running_cost = total_cost,
            "admit_edge"
        );
        trace.push(TraceStep {
            step: (trace.len() + 1) as u32,
            edge: edge.clone(),
            visited: visited.iter().cloned().collect(),
            running_cost: total_cost,
        });
        edges.push(edge);
    }

    Ok(MstResult {
        start: start.to_string(),
        complete: visited.len() == graph.vertex_count(),
        total_cost,
        edges,
        trace,
    })
}
