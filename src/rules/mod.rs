//! Battle rules: capture resolution and scoring.
//!
//! Placement itself belongs to the host (see `Grid::place`). After a card
//! lands, `resolve_flips` captures weaker orthogonal neighbors, and
//! `tally_score` counts cells per side at any point.

pub mod flip;
pub mod score;
pub mod engine;

pub use flip::{apply_flips, plan_flips, resolve_flips, FlipPlan, Flipped, OwnershipChange};
pub use score::{outcome, tally_score, BattleOutcome, Score};
pub use engine::BattleEngine;
