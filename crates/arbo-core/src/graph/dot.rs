//! Graphviz DOT rendering
//!
//! Renders the full graph with all edges and weights; tree edges are
//! drawn red and thick so the spanning tree stands out.

use std::fmt::Write;

use crate::graph::types::{format_weight, Graph, TreeEdge};

/// Render `graph` as a Graphviz `graph` document.
///
/// Each undirected edge appears once, in ascending `(u, v)` order, with
/// its weight as the edge label. Edges present in `highlight` (in
/// either orientation) are drawn red; an empty slice renders the plain
/// graph.
pub fn render_dot(graph: &Graph, highlight: &[TreeEdge]) -> String {
    let mut out = String::from("graph {\n");
    out.push_str("    node [shape=circle];\n");

    for vertex in graph.vertices() {
        let _ = writeln!(out, "    \"{}\";", vertex);
    }

    for (u, v, w) in graph.edges() {
        let highlighted = highlight
            .iter()
            .any(|e| (e.from == u && e.to == v) || (e.from == v && e.to == u));
        let style = if highlighted {
            "color=red, penwidth=3"
        } else {
            "color=lightgray, penwidth=2"
        };
        let _ = writeln!(
            out,
            "    \"{}\" -- \"{}\" [label=\"{}\", {}];",
            u,
            v,
            format_weight(w),
            style
        );
    }

    out.push_str("}\n");
    out
}
