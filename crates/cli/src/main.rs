mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nwk", version, about = "Personal notes indexing and search")]
struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rebuild the search index from the notes on disk
    Reindex(ReindexArgs),

    /// Search indexed notes
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct ReindexArgs {
    /// Print every discovered note file
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Query text
    pub query: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Output matching paths only
    #[arg(long, short)]
    pub quiet: bool,

    /// Maximum number of results to print
    #[arg(long)]
    pub limit: Option<usize>,
}

/// How search results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Quiet,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Reindex(args) => cmd::reindex::run(cli.config.as_deref(), &args),
        Commands::Search(args) => cmd::search::run(cli.config.as_deref(), args),
    }
}
