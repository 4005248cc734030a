//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use smellpost::output::OutputMode;

/// smellpost - File code-smell reports as GitHub issues
#[derive(Parser, Debug)]
#[command(
    name = "smellpost",
    version,
    about = "File code-smell reports as GitHub issues",
    long_about = "Publish every CSV report in the smells directory as GitHub issues.\n\n\
                  Each report becomes a Markdown table, split into parts of at most\n\
                  --chunk-size rows, one issue per part, titled with the commit.\n\n\
                  Credentials come from PAT, GITHUB_REPOSITORY_OWNER and GITHUB_REPOSITORY."
)]
pub struct Cli {
    /// Commit identifier written into every issue title
    pub commit: String,

    /// Directory containing the smell reports
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Maximum data rows per issue
    #[arg(short = 'n', long)]
    pub chunk_size: Option<usize>,

    /// Config file (default: ./smellpost.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// GitHub API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Render issues without sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Keep publishing the remaining reports after a failure
    #[arg(long)]
    pub keep_going: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stdout)
        .init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::publish(&cli, output_mode)
}
