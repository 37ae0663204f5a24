//! Signal Scout CLI - Command-line interface for the signal ranking pipeline.

use clap::Parser;
use scout_cli::commands;
use scout_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> scout_cli::Result<()> {
    let formatter = Formatter::new(cli.format, !cli.no_color);
    let explicit = cli.config.as_deref();

    match cli.command {
        Command::Config(args) => commands::execute_config(args, explicit, &formatter),
        Command::Run(args) => commands::execute_run(args, &Config::load(explicit)?, &formatter),
        Command::Dedup(args) => {
            commands::execute_dedup(args, &Config::load(explicit)?, &formatter)
        }
        Command::Classify(args) => {
            commands::execute_classify(args, &Config::load(explicit)?, &formatter)
        }
    }
}
