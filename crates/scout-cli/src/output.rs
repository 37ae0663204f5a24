//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use scout_dedup::DedupOutcome;
use scout_domain::{ScoredRow, Verdict};
use scout_pipeline::RunMetrics;
use scout_shortlist::ShortlistEntry;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest title shown in a table cell.
const TITLE_WIDTH: usize = 60;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (URLs or labels only)
    Quiet,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a shortlist.
    pub fn format_shortlist(&self, entries: &[ShortlistEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = entries
                    .iter()
                    .enumerate()
                    .map(|(rank, entry)| {
                        let mut value = row_json(&entry.row);
                        value["rank"] = serde_json::json!(rank + 1);
                        value["phase"] = serde_json::json!(entry.phase.as_str());
                        value
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok(self.colorize("Nothing shortlisted.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Total", "Archetype", "Mission", "Phase", "Source", "Title"]);
                for (rank, entry) in entries.iter().enumerate() {
                    let row = &entry.row;
                    builder.push_record([
                        (rank + 1).to_string(),
                        format!("{:.2}", row.total),
                        row.archetype.to_string(),
                        row.mission.clone(),
                        entry.phase.to_string(),
                        row.item.source.clone(),
                        truncate(&row.item.title, TITLE_WIDTH),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|e| e.row.canonical_url.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the kept and dropped items of a dedup pass.
    pub fn format_dedup(&self, outcome: &DedupOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let kept: Vec<serde_json::Value> = outcome
                    .kept
                    .iter()
                    .map(|item| {
                        serde_json::json!({
                            "title": item.title,
                            "url": item.url,
                            "source": item.source,
                            "date": item.date,
                        })
                    })
                    .collect();
                let dropped: Vec<serde_json::Value> = outcome
                    .dropped
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "title": d.title,
                            "url": d.url,
                            "reason": d.reason.kind(),
                            "detail": d.reason.to_string(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(
                    &serde_json::json!({ "kept": kept, "dropped": dropped }),
                )?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Status", "Source", "Title", "Reason"]);
                for item in &outcome.kept {
                    builder.push_record([
                        "kept".to_string(),
                        item.source.clone(),
                        truncate(&item.title, TITLE_WIDTH),
                        String::new(),
                    ]);
                }
                for dropped in &outcome.dropped {
                    builder.push_record([
                        "dropped".to_string(),
                        String::new(),
                        truncate(&dropped.title, TITLE_WIDTH),
                        dropped.reason.to_string(),
                    ]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(outcome
                .kept
                .iter()
                .map(|item| item.url.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a single verdict.
    pub fn format_verdict(&self, verdict: &Verdict) -> Result<String> {
        let judge = verdict
            .judge
            .map(|(archetype, confidence)| format!("{} ({:.2})", archetype, confidence));

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "archetype": verdict.archetype.as_str(),
                "score": verdict.score,
                "source": verdict.source.as_str(),
                "rule_archetype": verdict.rule_archetype.as_str(),
                "rule_score": verdict.rule_score,
                "judge": verdict.judge.map(|(archetype, confidence)| serde_json::json!({
                    "archetype": archetype.as_str(),
                    "confidence": confidence,
                })),
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Archetype", "Score", "Via", "Rule", "Judge"]);
                builder.push_record([
                    verdict.archetype.to_string(),
                    format!("{:.2}", verdict.score),
                    verdict.source.to_string(),
                    format!("{} ({:.2})", verdict.rule_archetype, verdict.rule_score),
                    judge.unwrap_or_else(|| "-".to_string()),
                ]);
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(verdict.archetype.to_string()),
        }
    }

    /// Format run metrics for stderr.
    pub fn metrics(&self, metrics: &RunMetrics) -> String {
        self.colorize(&metrics.summary(), "cyan")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn row_json(row: &ScoredRow) -> serde_json::Value {
    serde_json::json!({
        "title": row.item.title,
        "url": row.item.url,
        "canonical_url": row.canonical_url,
        "source": row.item.source,
        "tier": row.item.tier,
        "date": row.display.display_date,
        "mission": row.mission,
        "archetype": row.archetype.as_str(),
        "verdict_source": row.verdict_source.as_str(),
        "scores": {
            "relevance": row.scores.relevance,
            "credibility": row.scores.credibility,
            "novelty": row.scores.novelty,
            "archetype_fit": row.scores.archetype_fit,
            "recency": row.scores.recency,
        },
        "total": row.total,
        "signal": row.display.signal,
        "brief_summary": row.display.brief_summary,
        "equity_consequence": row.display.equity_consequence,
        "focus": row.display.focus.as_str(),
        "brand": row.display.brand.as_str(),
        "mission_tags": row.display.mission_tags,
        "category_tags": row.display.category_tags,
    })
}

/// Cut text to `max` characters, marking the cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_dedup::{DropReason, DroppedItem};
    use scout_domain::{Archetype, CandidateItem, VerdictSource};

    fn outcome() -> DedupOutcome {
        DedupOutcome {
            kept: vec![CandidateItem::new(
                "Heat pump orders surge",
                "",
                "https://a.example/1",
                "Energy Weekly",
                "trade",
                "2025-03-01",
            )],
            dropped: vec![DroppedItem {
                url: "https://a.example/1?utm_source=x".to_string(),
                title: "Heat pump orders surge".to_string(),
                reason: DropReason::DuplicateUrl,
            }],
        }
    }

    #[test]
    fn test_dedup_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_dedup(&outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["kept"].as_array().unwrap().len(), 1);
        assert_eq!(value["dropped"][0]["reason"], "duplicate_url");
    }

    #[test]
    fn test_dedup_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_dedup(&outcome()).unwrap();
        assert_eq!(output, "https://a.example/1");
    }

    #[test]
    fn test_dedup_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_dedup(&outcome()).unwrap();
        assert!(output.contains("Status"));
        assert!(output.contains("dropped"));
    }

    #[test]
    fn test_verdict_formats() {
        let verdict = Verdict {
            archetype: Archetype::Outlier,
            score: 4.0,
            source: VerdictSource::Judge,
            rule_archetype: Archetype::ShapeOfThings,
            rule_score: 2.5,
            judge: Some((Archetype::Outlier, 0.8)),
        };

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.format_verdict(&verdict).unwrap(), Archetype::Outlier.to_string());

        let json = Formatter::new(OutputFormat::Json, false);
        let value: serde_json::Value =
            serde_json::from_str(&json.format_verdict(&verdict).unwrap()).unwrap();
        assert_eq!(value["source"], "judge");
        assert_eq!(value["judge"]["confidence"], 0.8);
    }

    #[test]
    fn test_empty_shortlist() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_shortlist(&[]).unwrap();
        assert!(output.contains("Nothing shortlisted"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer title", 10), "a much ...");
    }
}
