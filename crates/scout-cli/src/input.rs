//! Item batch input.

use crate::cli::ItemSource;
use crate::error::{CliError, Result};
use scout_domain::CandidateItem;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};

/// Item definition as it appears in the JSON input.
#[derive(Debug, Deserialize)]
pub struct ItemDefinition {
    title: String,
    #[serde(default)]
    summary: String,
    url: String,
    source: String,
    #[serde(default = "default_tier")]
    tier: String,
    date: String,
}

impl From<ItemDefinition> for CandidateItem {
    fn from(def: ItemDefinition) -> Self {
        CandidateItem::new(def.title, def.summary, def.url, def.source, def.tier, def.date)
    }
}

/// Read a batch from a file or stdin.
pub fn read_items(source: &ItemSource) -> Result<Vec<CandidateItem>> {
    let json_data = if source.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(path) = &source.items {
        fs::read_to_string(path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --items or --stdin".to_string(),
        ));
    };

    parse_items(&json_data)
}

/// Parse a JSON array of items.
pub fn parse_items(json_data: &str) -> Result<Vec<CandidateItem>> {
    let defs: Vec<ItemDefinition> = serde_json::from_str(json_data)?;
    Ok(defs.into_iter().map(CandidateItem::from).collect())
}

fn default_tier() -> String {
    "trade".to_string()
}
