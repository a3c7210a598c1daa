//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use scanboard_core::Severity;

use crate::output::OutputFormat;

/// Security findings dashboard.
///
/// Serve chart-ready aggregates over HTTP, or print a one-shot summary of
/// a findings source.
#[derive(Parser, Debug)]
#[command(name = "scanboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the dashboard server
    Serve(ServeArgs),

    /// Load findings once and print the aggregates
    Summary(SummaryArgs),
}

// ============================================================================
// Serve command
// ============================================================================

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to a TOML config file (defaults apply when absent)
    #[arg(short, long, default_value = "scanboard.toml")]
    pub config: PathBuf,

    /// Override the configured listen address
    #[arg(short, long)]
    pub listen: Option<SocketAddr>,
}

// ============================================================================
// Summary command
// ============================================================================

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Read findings from a JSON file (default: built-in sample data)
    #[arg(long, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Fetch findings from an HTTP feed
    #[arg(long)]
    pub url: Option<String>,

    /// Filter the charts down to one severity (low, medium, high)
    #[arg(short, long)]
    pub severity: Option<Severity>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}
