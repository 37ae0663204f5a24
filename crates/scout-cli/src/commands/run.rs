//! Run command implementation.

use crate::cli::{JudgeArg, RunArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::read_items;
use crate::output::Formatter;
use chrono::{DateTime, Utc};
use scout_domain::CandidateItem;
use scout_judge::ollama::DEFAULT_ENDPOINT;
use scout_judge::{AbstainingJudge, OllamaProvider, PromptJudge};
use scout_pipeline::{RunReport, Scout, ScoutConfig};
use tracing::info;

/// Execute the run command.
pub fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let items = read_items(&args.source)?;
    let now = parse_now(args.now.as_deref())?;

    let mut scout_config = config.scout.clone();
    if let Some(top) = args.top {
        scout_config.shortlist.daily_top_n = top;
    }

    let report = run_pipeline(scout_config, &args, items, now)?;

    println!("{}", formatter.format_shortlist(&report.shortlist)?);
    eprintln!("{}", formatter.metrics(&report.metrics));

    Ok(())
}

fn run_pipeline(
    scout_config: ScoutConfig,
    args: &RunArgs,
    items: Vec<CandidateItem>,
    now: DateTime<Utc>,
) -> Result<RunReport> {
    let report = match args.judge {
        JudgeArg::None => Scout::new(scout_config, AbstainingJudge)?.run(items, now)?,
        JudgeArg::Ollama => {
            let endpoint = args
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
            info!(endpoint = %endpoint, model = %args.model, "Using Ollama judge");

            let provider = OllamaProvider::new(endpoint, args.model.clone())?;
            Scout::new(scout_config, PromptJudge::new(provider))?.run(items, now)?
        }
    };
    Ok(report)
}

/// Parse the `--now` override, defaulting to the current time.
pub fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        None => Ok(Utc::now()),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| CliError::InvalidInput(format!("Invalid --now '{}': {}", raw, e))),
    }
}
