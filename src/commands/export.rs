//! Export command

use std::fs;
use std::path::Path;
use std::time::Instant;

use arbo_core::error::Result;
use arbo_core::graph::{prim_traverse, render_dot};

use crate::cli::Cli;
use crate::commands::{resolve_graph, resolve_start};

/// Execute the export command
pub fn execute(
    cli: &Cli,
    requested_start: Option<&str>,
    plain: bool,
    output: Option<&Path>,
    start: Instant,
) -> Result<()> {
    let graph = resolve_graph(cli)?;
    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_graph");
    }

    let highlight = if plain {
        Vec::new()
    } else {
        let root = resolve_start(&graph, requested_start)?;
        let result = prim_traverse(&graph, root)?;
        if !result.complete && !cli.quiet {
            eprintln!(
                "warning: graph is not connected from {}; highlighting the partial tree",
                root
            );
        }
        result.edges
    };

    let dot = render_dot(&graph, &highlight);

    match output {
        Some(path) => {
            fs::write(path, dot)?;
            if !cli.quiet {
                println!("wrote {}", path.display());
            }
        }
        None => print!("{}", dot),
    }

    Ok(())
}
