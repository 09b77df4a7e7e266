//! Card and grid bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::{self, Grid};
use crate::cards::{Card, StatValue, Stats};
use crate::core::{EngineError, Side};
use crate::rules::{self, Score};

pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

pub(crate) fn parse_side(tag: &str) -> PyResult<Side> {
    Side::from_tag(tag).ok_or_else(|| {
        PyErr::new::<PyValueError, _>(format!("unknown side {tag:?}, expected \"player\" or \"enemy\""))
    })
}

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card.
    ///
    /// # Arguments
    /// - owner: "player" or "enemy"
    /// - stats: [top, bottom, left, right]. Missing entries never win a
    ///   comparison, `None` counts as 0.
    #[new]
    #[pyo3(signature = (owner, stats = None))]
    fn new(owner: &str, stats: Option<Vec<Option<f64>>>) -> PyResult<Self> {
        let owner = parse_side(owner)?;
        let card = match stats {
            Some(values) => {
                let values: Vec<StatValue> = values
                    .into_iter()
                    .map(|v| v.map_or(StatValue::Null, StatValue::Number))
                    .collect();
                Card::with_stats(owner, Stats::from(values))
            }
            None => Card::malformed(owner),
        };
        Ok(Self(card))
    }

    #[getter]
    fn owner(&self) -> &'static str {
        self.0.owner.as_str()
    }

    /// Coerced stats, or None for a card without a stat list.
    #[getter]
    fn stats(&self) -> Option<[f64; 4]> {
        self.0.stats.as_ref().map(Stats::values)
    }

    fn __repr__(&self) -> String {
        match self.stats() {
            Some(s) => format!("Card(owner={}, stats={:?})", self.owner(), s),
            None => format!("Card(owner={}, stats=None)", self.owner()),
        }
    }
}

/// Python wrapper for Grid.
#[pyclass(name = "Grid")]
#[derive(Clone, Debug, Default)]
pub struct PyGrid(pub Grid);

#[pymethods]
impl PyGrid {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Place a card on an empty cell.
    fn place(&mut self, index: usize, card: &PyCard) -> PyResult<()> {
        self.0.place(index, card.0.clone()).map_err(to_py_err)
    }

    /// Owner of a cell as "player"/"enemy", or None if empty.
    fn owner_at(&self, index: usize) -> Option<&'static str> {
        self.0.owner_at(index).map(Side::as_str)
    }

    /// Card on a cell, if any.
    fn get(&self, index: usize) -> Option<PyCard> {
        self.0.get(index).cloned().map(PyCard)
    }

    /// Empty cell indices in ascending order.
    fn empty_slots(&self) -> Vec<usize> {
        self.0.empty_slots().to_vec()
    }

    fn is_full(&self) -> bool {
        self.0.is_full()
    }

    /// Capture weaker neighbors of the card at `placed`.
    ///
    /// Returns the captured cell indices.
    fn resolve_flips(&mut self, placed: usize) -> Vec<usize> {
        rules::resolve_flips(&mut self.0, placed).to_vec()
    }

    /// (player, enemy) cell counts.
    fn tally_score(&self) -> (u32, u32) {
        let Score { player, enemy } = rules::tally_score(&self.0);
        (player, enemy)
    }

    fn __repr__(&self) -> String {
        let (player, enemy) = self.tally_score();
        format!(
            "Grid(occupied={}, player={}, enemy={})",
            self.0.occupied_count(),
            player,
            enemy
        )
    }
}

/// Neighbors of a cell as (target_index, attacker_stat, defender_stat).
#[pyfunction]
pub fn neighbors_of(index: usize) -> Vec<(usize, usize, usize)> {
    board::neighbors_of(index)
        .iter()
        .map(|n| (n.target_index, n.attacker_stat_index(), n.defender_stat_index()))
        .collect()
}
