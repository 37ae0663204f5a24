//! Three-phase shortlist selection

use crate::{ShortlistConfig, ShortlistError};
use scout_domain::{Archetype, ScoredRow};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// Phase that selected a shortlist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionPhase {
    /// Archetype diversity pass
    Diversity,
    /// Mission coverage pass
    Coverage,
    /// Score-order fill
    Fill,
}

impl SelectionPhase {
    /// Get the phase name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionPhase::Diversity => "diversity",
            SelectionPhase::Coverage => "coverage",
            SelectionPhase::Fill => "fill",
        }
    }
}

impl fmt::Display for SelectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected row and the phase that picked it
#[derive(Debug, Clone, PartialEq)]
pub struct ShortlistEntry {
    /// The selected row
    pub row: ScoredRow,
    /// Phase that selected it
    pub phase: SelectionPhase,
}

/// Accepted rows plus the sets the phases consult
struct Selection<'a> {
    limit: usize,
    picked: Vec<(&'a ScoredRow, SelectionPhase)>,
    urls: HashSet<&'a str>,
    archetypes: HashSet<Archetype>,
    missions: HashSet<&'a str>,
}

impl<'a> Selection<'a> {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            picked: Vec::with_capacity(limit),
            urls: HashSet::new(),
            archetypes: HashSet::new(),
            missions: HashSet::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.picked.len() >= self.limit
    }

    fn is_used(&self, row: &ScoredRow) -> bool {
        self.urls.contains(row.canonical_url.as_str())
    }

    fn accept(&mut self, row: &'a ScoredRow, phase: SelectionPhase) {
        debug!(url = %row.canonical_url, phase = %phase, total = row.total, "Shortlisted");
        self.urls.insert(&row.canonical_url);
        self.archetypes.insert(row.archetype);
        self.missions.insert(&row.mission);
        self.picked.push((row, phase));
    }
}

/// Selects the daily shortlist from scored rows
#[derive(Debug, Clone)]
pub struct ShortlistSelector {
    config: ShortlistConfig,
}

impl ShortlistSelector {
    /// Create a selector, rejecting an invalid configuration
    pub fn new(config: ShortlistConfig) -> Result<Self, ShortlistError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ShortlistConfig {
        &self.config
    }

    /// Select at most `daily_top_n` rows
    pub fn select(&self, rows: &[ScoredRow]) -> Vec<ShortlistEntry> {
        let mut sorted: Vec<&ScoredRow> = rows.iter().collect();
        sorted.sort_by(|a, b| b.total.total_cmp(&a.total));

        let mut selection = Selection::new(self.config.daily_top_n);
        self.diversity_phase(&sorted, &mut selection);
        if self.config.ensure_mission_coverage {
            self.coverage_phase(&sorted, &mut selection);
        }
        self.fill_phase(&sorted, &mut selection);

        info!(
            candidates = rows.len(),
            selected = selection.picked.len(),
            archetypes = selection.archetypes.len(),
            "Shortlist selected"
        );

        selection
            .picked
            .into_iter()
            .map(|(row, phase)| ShortlistEntry {
                row: row.clone(),
                phase,
            })
            .collect()
    }

    fn diversity_phase<'a>(&self, sorted: &[&'a ScoredRow], selection: &mut Selection<'a>) {
        let target = self.config.ensure_archetype_diversity;
        for &row in sorted {
            if selection.is_full() {
                break;
            }
            if selection.is_used(row) {
                continue;
            }
            if selection.archetypes.len() < target && selection.archetypes.contains(&row.archetype)
            {
                continue;
            }
            selection.accept(row, SelectionPhase::Diversity);
        }
    }

    fn coverage_phase<'a>(&self, sorted: &[&'a ScoredRow], selection: &mut Selection<'a>) {
        for mission in &self.config.mission_priority {
            if selection.is_full() {
                break;
            }
            if selection.missions.contains(mission.as_str()) {
                continue;
            }
            let candidate = sorted
                .iter()
                .find(|row| row.mission == *mission && !selection.is_used(row));
            if let Some(&row) = candidate {
                selection.accept(row, SelectionPhase::Coverage);
            }
        }
    }

    fn fill_phase<'a>(&self, sorted: &[&'a ScoredRow], selection: &mut Selection<'a>) {
        for &row in sorted {
            if selection.is_full() {
                break;
            }
            if !selection.is_used(row) {
                selection.accept(row, SelectionPhase::Fill);
            }
        }
    }
}
