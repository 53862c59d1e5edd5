//! CLI argument parsing for arbo
//!
//! Uses clap for argument parsing. Global flags: --graph, --format,
//! --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use arbo_core::format::OutputFormat;
use parse::parse_format;

/// Arbo - minimum spanning tree CLI
#[derive(Parser, Debug)]
#[command(name = "arbo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph definition file (YAML, JSON, or TOML); built-in example graph when omitted
    #[arg(long, global = true)]
    pub graph: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a minimum spanning tree from a start vertex
    Build {
        /// Start vertex (default: first vertex in label order)
        start: Option<String>,

        /// Omit the step-by-step trace from output
        #[arg(long)]
        no_trace: bool,
    },

    /// Print the graph
    Show,

    /// Render the graph as Graphviz DOT with the tree highlighted
    Export {
        /// Start vertex for the highlighted tree (default: first vertex in label order)
        start: Option<String>,

        /// Render the plain graph without computing a tree
        #[arg(long)]
        plain: bool,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Validate a graph definition and report violations
    Check,
}
