//! Command dispatch logic for arbo

use std::time::Instant;

use arbo_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Build {
            start: vertex,
            no_trace,
        }) => commands::build::execute(cli, vertex.as_deref(), *no_trace, start),

        Some(Commands::Show) => commands::show::execute(cli, start),

        Some(Commands::Export {
            start: vertex,
            plain,
            output,
        }) => commands::export::execute(cli, vertex.as_deref(), *plain, output.as_deref(), start),

        Some(Commands::Check) => commands::check::execute(cli, start),
    }
}

fn handle_no_command() -> Result<()> {
    println!("arbo {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A minimum spanning tree CLI for scripts and teaching.");
    println!();
    println!("Run `arbo --help` for usage information.");
    Ok(())
}
