//! Python bindings for the triad-engine battle rules.
//!
//! # Quick Start
//!
//! ```python
//! import triad_engine as te
//!
//! grid = te.Grid()
//! grid.place(1, te.Card("enemy", [1, 1, 1, 1]))
//! grid.place(4, te.Card("player", [5, 1, 1, 1]))
//! assert grid.resolve_flips(4) == [1]
//!
//! engine = te.BattleEngine(seed=7)
//! move = engine.select_ai_move(grid, [te.Card("enemy", [2, 2, 2, 2])], stage=8)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// triad_engine: rules and AI for a 3×3 card battle.
#[pymodule]
fn triad_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyGrid>()?;
    m.add_class::<PyBattleEngine>()?;
    m.add_function(wrap_pyfunction!(neighbors_of, m)?)?;
    Ok(())
}
