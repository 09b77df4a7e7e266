//! Diagnostics from the most recent AI move selection.

use serde::{Deserialize, Serialize};

use super::policy::Decision;
use super::tier::Tier;

/// What happened during the last selection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionStats {
    /// Tier the stage resolved to. `None` before the first selection.
    pub tier: Option<Tier>,

    /// Empty cells available.
    pub empty_slots: u32,

    /// Hand size.
    pub hand_size: u32,

    /// (card, slot) pairs scored.
    pub candidates: u32,

    /// Score of the best candidate, for scoring tiers.
    pub best_score: Option<f64>,

    /// Whether the best move was discarded for a random one.
    pub mistake: bool,

    /// Whether a move was returned at all.
    pub moved: bool,
}

impl SelectionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold a policy decision in.
    pub(crate) fn record(&mut self, decision: &Decision) {
        self.candidates = decision.candidates;
        self.best_score = decision.best_score;
        self.mistake = decision.mistake;
        self.moved = true;
    }
}
