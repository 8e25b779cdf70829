use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "translens")]
#[command(about = "Migrate and fuse contact transcripts into the analysis format", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for synthetic identifiers; runs with the same seed and input
    /// produce identical output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transform raw chat transcript records into analysis artifacts
    Chat(ConvertArgs),

    /// Transform conversational-analytics exports into analysis artifacts
    Analytics(ConvertArgs),

    /// Fuse analysis artifacts with their time-correlated bot logs
    Stitch(StitchArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Store holding the raw source records
    #[arg(long)]
    pub source: PathBuf,

    /// Store the analysis artifacts are written to
    #[arg(long)]
    pub target: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args)]
pub struct StitchArgs {
    /// Store holding analysis artifacts under the Analysis/ prefix
    #[arg(long)]
    pub source: PathBuf,

    /// Log group to search for bot sessions
    #[arg(long)]
    pub log_group: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Connection flags shared by every run; each overrides its config-file
/// counterpart.
#[derive(Args)]
pub struct StoreArgs {
    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub access_key: Option<String>,

    #[arg(long)]
    pub secret_key: Option<String>,
}
