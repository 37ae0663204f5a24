//! Dedup command implementation.

use crate::cli::DedupArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::read_items;
use crate::output::Formatter;
use scout_dedup::Deduplicator;

/// Execute the dedup command.
pub fn execute_dedup(args: DedupArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let items = read_items(&args.source)?;
    let outcome = Deduplicator::new(config.scout.dedup_config()).dedupe_and_cap(items);

    println!("{}", formatter.format_dedup(&outcome)?);
    Ok(())
}
