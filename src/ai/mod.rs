//! AI opponent for the non-human side.
//!
//! ## Overview
//!
//! Difficulty scales with the stage number through three tiers:
//!
//! | Stages | Tier   | Behaviour                                            |
//! |--------|--------|------------------------------------------------------|
//! | 1-3    | Easy   | random slot, random hand card                        |
//! | 4-7    | Normal | best capture count, 30% chance of a random move     |
//! | 8+     | Hard   | best capture count plus 0.2 for corners, never errs |
//!
//! Boundaries, weights and the mistake rate come from `AiConfig`.
//!
//! ## Usage
//!
//! ```rust
//! use triad_engine::ai::AiMoveSelector;
//! use triad_engine::board::Grid;
//! use triad_engine::cards::Card;
//! use triad_engine::core::{AiConfig, GameRng, Side};
//!
//! let mut selector = AiMoveSelector::new(AiConfig::default());
//! let mut rng = GameRng::new(7);
//!
//! let mut grid = Grid::new();
//! grid.place(4, Card::new(Side::Player, [2.0, 2.0, 2.0, 2.0])).unwrap();
//! let hand = vec![Card::new(Side::Enemy, [1.0, 5.0, 1.0, 1.0])];
//!
//! // Slot 1 sits above the player's card and attacks down with 5.
//! let chosen = selector.select(&grid, &hand, 10, &mut rng).unwrap();
//! assert_eq!(chosen.target_slot, 1);
//! ```

pub mod tier;
pub mod policy;
pub mod selector;
pub mod stats;

pub use tier::{Tier, DEFAULT_STAGE};
pub use policy::{
    best_move, random_move, score_candidate, Decision, GreedyPolicy, Move, MoveContext,
    MovePolicy, RandomPolicy,
};
pub use selector::{select_ai_move, AiMoveSelector};
pub use stats::SelectionStats;
