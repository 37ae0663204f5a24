//! CLI command definitions and argument parsing.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Signal Scout CLI - Rank candidate signals into a daily shortlist.
#[derive(Debug, Parser)]
#[command(name = "scout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SCOUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full pipeline and print the shortlist
    Run(RunArgs),

    /// Deduplicate a batch and print what was kept and dropped
    Dedup(DedupArgs),

    /// Classify a single item
    Classify(ClassifyArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Where to read the item batch from.
#[derive(Debug, Clone, Args)]
pub struct ItemSource {
    /// JSON file containing an array of items
    #[arg(short, long)]
    pub items: Option<PathBuf>,

    /// Read the JSON array from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: ItemSource,

    /// Reference time for recency (RFC 3339, defaults to now)
    #[arg(long)]
    pub now: Option<String>,

    /// Fallback judge for low-confidence verdicts
    #[arg(short, long, value_enum, default_value = "none")]
    pub judge: JudgeArg,

    /// Model name for the Ollama judge
    #[arg(short, long, default_value = "llama3.1", env = "SCOUT_MODEL")]
    pub model: String,

    /// Ollama endpoint
    #[arg(short, long, env = "SCOUT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Override the shortlist size
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// Arguments for the dedup command.
#[derive(Debug, Parser)]
pub struct DedupArgs {
    #[command(flatten)]
    pub source: ItemSource,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Item title
    #[arg(short, long)]
    pub title: String,

    /// Item summary
    #[arg(short = 'S', long, default_value = "")]
    pub summary: String,

    /// Publication name
    #[arg(short, long, default_value = "")]
    pub source: String,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

/// Judge argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum JudgeArg {
    /// Rules only; low-confidence verdicts keep the rule answer
    None,
    /// Ask a local Ollama model
    Ollama,
}
