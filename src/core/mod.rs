//! Core engine types: sides, RNG, configuration, errors.
//!
//! These are the building blocks every other module shares. Nothing here
//! knows about cards or the grid.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{AiConfig, EngineConfig, StagePolicy};
pub use error::{EngineError, EngineResult};
