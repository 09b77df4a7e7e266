//! # triad-engine
//!
//! Rules and AI for a 3×3 card battle in the style of Triple Triad.
//!
//! Each card has four numeric stats, one per face. Placing a card captures
//! every orthogonal neighbor owned by someone else whose touching face is
//! strictly weaker. The side owning more cells on a full board wins.
//!
//! ## Design Principles
//!
//! 1. **Host owns the state**: the engine never stores the grid or hands.
//!    Every call takes them as arguments.
//!
//! 2. **Injectable randomness**: AI selection draws from a `RandomSource`
//!    owned by the caller or the `BattleEngine`. Same seed, same moves.
//!
//! 3. **Garbage never captures**: stats are coerced to numbers, and
//!    anything non-numeric becomes NaN, which never compares greater.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `cards`: stat values, faces, cards
//! - `board`: the grid and its adjacency
//! - `rules`: capture resolution, scoring, the `BattleEngine` façade
//! - `ai`: difficulty tiers and move policies

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod ai;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    AiConfig, EngineConfig, EngineError, EngineResult, GameRng, GameRngState, RandomSource,
    Side, StagePolicy,
};

pub use crate::cards::{Card, CardMeta, Face, StatValue, Stats};

pub use crate::board::{neighbors_of, Grid, Neighbor, GRID_SIZE};

pub use crate::rules::{
    plan_flips, resolve_flips, tally_score, BattleEngine, BattleOutcome, OwnershipChange, Score,
};

pub use crate::ai::{select_ai_move, AiMoveSelector, Move, MovePolicy, SelectionStats, Tier};
