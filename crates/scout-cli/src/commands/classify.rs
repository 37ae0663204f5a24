//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use scout_domain::CandidateItem;
use scout_judge::AbstainingJudge;
use scout_pipeline::Scout;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let scout = Scout::new(config.scout.clone(), AbstainingJudge)?;
    let item = CandidateItem::new(args.title, args.summary, "", args.source, "trade", "");
    let verdict = scout.classify(&item);

    println!("{}", formatter.format_verdict(&verdict)?);
    Ok(())
}
