//! Read-only view over one simulation result snapshot.
//!
//! The simulation engine owns result production; this module only models
//! the query surface the table controller needs: which subject entities the
//! current view filter selects, and the per-action records each entity (or
//! its opponents) contributed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::metrics::ActionRecord;

/// The currently selected subset of simulation subjects/targets.
///
/// `None` in a field means "all units of that kind".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFilter {
    pub player: Option<usize>,
    pub target: Option<usize>,
}

/// One simulated unit (player or target) with its contributed records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitResult {
    pub index: usize,
    pub name: String,
    pub actions: Vec<ActionRecord>,
}

impl UnitResult {
    /// Records for damaging actions this unit performed.
    pub fn damage_actions(&self) -> impl Iterator<Item = &ActionRecord> {
        self.actions.iter().filter(|a| a.damage > 0.0 || a.swings > 0.0)
    }
}

/// A complete result snapshot for one encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimResult {
    pub duration_secs: f64,
    pub players: Vec<UnitResult>,
    pub targets: Vec<UnitResult>,
}

impl SimResult {
    /// Players selected by the view filter, in raid-index order.
    pub fn filtered_players(&self, filter: &ViewFilter) -> Vec<&UnitResult> {
        match filter.player {
            Some(i) => self.players.iter().filter(|p| p.index == i).collect(),
            None => self.players.iter().collect(),
        }
    }

    /// Targets selected by the view filter.
    pub fn filtered_targets(&self, filter: &ViewFilter) -> Vec<&UnitResult> {
        match filter.target {
            Some(i) => self.targets.iter().filter(|t| t.index == i).collect(),
            None => self.targets.iter().collect(),
        }
    }
}

/// Payload delivered by the change feed: a result snapshot plus the view
/// filter it should be read through.
#[derive(Debug, Clone)]
pub struct SimResultData {
    pub result: Arc<SimResult>,
    pub filter: ViewFilter,
}

impl SimResultData {
    pub fn new(result: Arc<SimResult>, filter: ViewFilter) -> Self {
        Self { result, filter }
    }
}
