//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    explicit: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Init { force } => {
            let config = Config::init(explicit, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote {}", config.path.display()))
            );
        }
        ConfigAction::Show => {
            let config = Config::load(explicit)?;
            eprintln!(
                "{}",
                formatter.info(&format!("Config file: {}", config.path.display()))
            );
            println!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
