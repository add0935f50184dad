use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use commands::route::RouteArgs;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(version, about = "Navigation graph routing utilities")]
struct Cli {
    /// Path to the graph description file (JSON).
    #[arg(long)]
    graph: PathBuf,

    /// Output format for command results.
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two named nodes.
    Route(RouteArgs),
    /// Summarize the loaded graph.
    Inspect,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route(args) => commands::route::run(&cli.graph, cli.output, args),
        Command::Inspect => commands::inspect::run(&cli.graph, cli.output),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
