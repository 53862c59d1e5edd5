use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ArboError, Result};

/// Weighted undirected graph stored as symmetric adjacency maps.
///
/// An undirected edge `u -- v` is held as two directed entries,
/// `adjacency[u][v]` and `adjacency[v][u]`, with equal weights.
/// `BTreeMap` keeps both the vertex set and each adjacency list in
/// ascending label order, which fixes the scan order used for
/// tie-breaking in [`prim_traverse`](crate::graph::algos::prim_traverse).
///
/// Deserialized graphs are not checked on construction; callers run
/// [`Graph::validate`] (or [`Graph::violations`]) before trusting the
/// symmetry invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: BTreeMap<String, BTreeMap<String, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed five-vertex teaching graph.
    pub fn example() -> Self {
        let mut adjacency: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for (u, v, w) in [
            ("A", "B", 2.0),
            ("A", "C", 3.0),
            ("B", "C", 1.0),
            ("B", "D", 4.0),
            ("B", "E", 5.0),
            ("C", "D", 3.0),
            ("D", "E", 1.0),
        ] {
            adjacency
                .entry(u.to_string())
                .or_default()
                .insert(v.to_string(), w);
            adjacency
                .entry(v.to_string())
                .or_default()
                .insert(u.to_string(), w);
        }
        Self { adjacency }
    }

    /// Insert an undirected edge, storing both directed entries.
    ///
    /// Self-loops and negative weights are rejected. Re-inserting an
    /// existing edge overwrites its weight in both directions.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> Result<()> {
        if u == v {
            return Err(ArboError::SelfLoop {
                vertex: u.to_string(),
            });
        }
        if weight < 0.0 {
            return Err(ArboError::NegativeWeight {
                from: u.to_string(),
                to: v.to_string(),
                weight,
            });
        }
        self.adjacency
            .entry(u.to_string())
            .or_default()
            .insert(v.to_string(), weight);
        self.adjacency
            .entry(v.to_string())
            .or_default()
            .insert(u.to_string(), weight);
        Ok(())
    }

    /// Add an isolated vertex. No-op if the vertex already exists.
    pub fn add_vertex(&mut self, v: &str) {
        self.adjacency.entry(v.to_string()).or_default();
    }

    pub fn contains(&self, v: &str) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Vertices in ascending label order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Neighbors of `v` with edge weights, in ascending label order.
    pub fn neighbors(&self, v: &str) -> impl Iterator<Item = (&str, f64)> {
        self.adjacency
            .get(v)
            .into_iter()
            .flatten()
            .map(|(n, w)| (n.as_str(), *w))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// First vertex in label order, used as the caller-side default start.
    pub fn default_start(&self) -> Option<&str> {
        self.adjacency.keys().next().map(String::as_str)
    }

    /// Undirected edges, each reported once, in ascending `(u, v)` order.
    pub fn edges(&self) -> Vec<(String, String, f64)> {
        let mut edges = Vec::new();
        for (u, neighbors) in &self.adjacency {
            for (v, w) in neighbors {
                if u < v {
                    edges.push((u.clone(), v.clone(), *w));
                }
            }
        }
        edges
    }

    /// Every structural violation, in deterministic order.
    ///
    /// Pair-level findings (negative weight, weight mismatch) are
    /// reported once per vertex pair, from the lexically smaller
    /// endpoint when both directions exist.
    pub fn violations(&self) -> Vec<ArboError> {
        let mut found = Vec::new();
        for (u, neighbors) in &self.adjacency {
            for (v, w) in neighbors {
                if u == v {
                    found.push(ArboError::SelfLoop { vertex: u.clone() });
                    continue;
                }
                let reverse = self.adjacency.get(v).and_then(|n| n.get(u));
                let reporter = reverse.is_none() || u < v;
                if *w < 0.0 && reporter {
                    found.push(ArboError::NegativeWeight {
                        from: u.clone(),
                        to: v.clone(),
                        weight: *w,
                    });
                }
                match reverse {
                    None => found.push(ArboError::AsymmetricEdge {
                        from: u.clone(),
                        to: v.clone(),
                        reason: format!("{} has no entry back to {}", v, u),
                    }),
                    Some(r) if r != w && u < v => found.push(ArboError::AsymmetricEdge {
                        from: u.clone(),
                        to: v.clone(),
                        reason: format!(
                            "{} -> {} = {} but {} -> {} = {}",
                            u,
                            v,
                            format_weight(*w),
                            v,
                            u,
                            format_weight(*r)
                        ),
                    }),
                    Some(_) => {}
                }
            }
        }
        found
    }

    /// Fail on the first structural violation.
    pub fn validate(&self) -> Result<()> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}

/// Accepted tree edge: `from` was already in the tree when `to` was
/// admitted through this edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Snapshot taken immediately after an edge is admitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceStep {
    /// 1-based step index
    pub step: u32,
    pub edge: TreeEdge,
    /// Visited set after admission, in ascending label order
    pub visited: Vec<String>,
    /// Accumulated cost after admission
    pub running_cost: f64,
}

/// Result of one MST construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResult {
    pub start: String,
    /// True iff the tree spans every vertex of the graph
    pub complete: bool,
    pub total_cost: f64,
    /// Tree edges in admission order
    pub edges: Vec<TreeEdge>,
    pub trace: Vec<TraceStep>,
}

/// Format a weight without a trailing `.0` when it is integral.
pub fn format_weight(w: f64) -> String {
    if w.fract() == 0.0 && w.abs() < 1e15 {
        format!("{}", w as i64)
    } else {
        format!("{}", w)
    }
}
