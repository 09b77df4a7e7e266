//! Battle engine bindings for Python.

use pyo3::prelude::*;

use crate::ai::DEFAULT_STAGE;
use crate::cards::Card;
use crate::core::{AiConfig, EngineConfig};
use crate::rules::BattleEngine;

use super::py_core::{parse_side, to_py_err, PyCard, PyGrid};

/// Python wrapper for BattleEngine.
#[pyclass(name = "BattleEngine")]
pub struct PyBattleEngine {
    engine: BattleEngine,
}

#[pymethods]
impl PyBattleEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic AI moves
    /// - ai_side: side the AI plays ("enemy" by default)
    /// - mistake_chance: Normal-tier probability of a random move
    #[new]
    #[pyo3(signature = (seed = 42, ai_side = "enemy", mistake_chance = 0.3))]
    fn new(seed: u64, ai_side: &str, mistake_chance: f64) -> PyResult<Self> {
        let ai = AiConfig::default()
            .with_ai_side(parse_side(ai_side)?)
            .with_mistake_chance(mistake_chance);
        ai.validate().map_err(to_py_err)?;
        let config = EngineConfig::default().with_seed(seed).with_ai(ai);
        Ok(Self {
            engine: BattleEngine::new(config),
        })
    }

    /// Choose the AI's placement.
    ///
    /// Returns (target_slot, hand_idx), or None when the grid is full or
    /// the hand is empty.
    #[pyo3(signature = (grid, hand, stage = DEFAULT_STAGE))]
    fn select_ai_move(
        &mut self,
        grid: &PyGrid,
        hand: Vec<PyRef<'_, PyCard>>,
        stage: i64,
    ) -> Option<(usize, usize)> {
        let hand: Vec<Card> = hand.iter().map(|c| c.0.clone()).collect();
        self.engine
            .select_ai_move(&grid.0, &hand, stage)
            .map(|m| (m.target_slot, m.hand_idx))
    }

    /// Tier name the last selection resolved to, if any.
    #[getter]
    fn last_tier(&self) -> Option<String> {
        self.engine.last_selection().tier.map(|t| t.to_string())
    }

    fn __repr__(&self) -> String {
        format!("BattleEngine(seed={})", self.engine.rng().seed())
    }
}
