//! Move-selection policies.
//!
//! Each tier is backed by a `MovePolicy`:
//! - `RandomPolicy`: uniform slot and uniform hand card (Easy)
//! - `GreedyPolicy`: exhaustive capture scoring over every (card, slot)
//!   pair, with an optional corner bonus and an optional mistake roll
//!   (Normal and Hard)

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{is_corner, neighbors_of, Grid, GRID_SIZE};
use crate::cards::Card;
use crate::core::{EngineError, EngineResult, RandomSource, Side};

// =============================================================================
// Moves
// =============================================================================

/// A chosen placement: which hand card goes to which empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Grid cell to place on.
    pub target_slot: usize,
    /// Index into the AI's hand.
    pub hand_idx: usize,
}

impl Move {
    #[must_use]
    pub const fn new(target_slot: usize, hand_idx: usize) -> Self {
        Self { target_slot, hand_idx }
    }

    /// Check the move can be played on `grid` from a hand of `hand_len` cards.
    pub fn validate(&self, grid: &Grid, hand_len: usize) -> EngineResult<()> {
        if self.target_slot >= GRID_SIZE {
            return Err(EngineError::CellOutOfRange {
                index: self.target_slot,
            });
        }
        if !grid.is_empty_cell(self.target_slot) {
            return Err(EngineError::CellOccupied {
                index: self.target_slot,
            });
        }
        if self.hand_idx >= hand_len {
            return Err(EngineError::HandIndexOutOfRange {
                index: self.hand_idx,
                len: hand_len,
            });
        }
        Ok(())
    }
}

/// Everything a policy may look at when choosing a move.
#[derive(Clone, Copy, Debug)]
pub struct MoveContext<'a> {
    /// Current grid.
    pub grid: &'a Grid,
    /// The AI's hand. Never empty.
    pub hand: &'a [Card],
    /// Empty cells in ascending order. Never empty.
    pub empty_slots: &'a [usize],
    /// Side whose cards count as captures.
    pub opponent: Side,
    /// Score per captured card.
    pub capture_weight: f64,
}

/// What a policy decided, with the numbers behind it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    /// The move to play.
    pub chosen: Move,
    /// Best candidate score, for scoring policies.
    pub best_score: Option<f64>,
    /// Number of (card, slot) pairs scored.
    pub candidates: u32,
    /// Whether a scored best move was discarded for a random one.
    pub mistake: bool,
}

/// Policy for choosing the AI's placement.
pub trait MovePolicy: Send + Sync {
    /// Choose a move. The context always has at least one empty slot and
    /// one hand card.
    fn choose(&self, ctx: &MoveContext<'_>, rng: &mut dyn RandomSource) -> Decision;
}

// =============================================================================
// Random Policy
// =============================================================================

/// Uniformly random slot and hand card, ignoring the board.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, ctx: &MoveContext<'_>, rng: &mut dyn RandomSource) -> Decision {
        Decision {
            chosen: random_move(ctx, rng),
            best_score: None,
            candidates: 0,
            mistake: false,
        }
    }
}

/// Draw a slot, then a hand card.
pub fn random_move(ctx: &MoveContext<'_>, rng: &mut dyn RandomSource) -> Move {
    let target_slot = ctx.empty_slots[rng.pick_index(ctx.empty_slots.len())];
    let hand_idx = rng.pick_index(ctx.hand.len());
    Move { target_slot, hand_idx }
}

// =============================================================================
// Greedy Policy
// =============================================================================

/// Capture-maximising search.
///
/// Normal difficulty is `GreedyPolicy { corner_bonus: 0.0, mistake_chance: 0.3 }`,
/// Hard is `GreedyPolicy { corner_bonus: 0.2, mistake_chance: 0.0 }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GreedyPolicy {
    /// Added to candidates on a corner cell.
    pub corner_bonus: f64,
    /// Probability of discarding the best move for a random one.
    pub mistake_chance: f64,
}

impl GreedyPolicy {
    /// Scoring without corner bonus, with mistakes.
    #[must_use]
    pub const fn fallible(mistake_chance: f64) -> Self {
        Self {
            corner_bonus: 0.0,
            mistake_chance,
        }
    }

    /// Scoring with corner bonus, without mistakes.
    #[must_use]
    pub const fn precise(corner_bonus: f64) -> Self {
        Self {
            corner_bonus,
            mistake_chance: 0.0,
        }
    }
}

impl MovePolicy for GreedyPolicy {
    fn choose(&self, ctx: &MoveContext<'_>, rng: &mut dyn RandomSource) -> Decision {
        let search = best_move(ctx, self.corner_bonus);

        // Policies that never err draw nothing from the source.
        if self.mistake_chance > 0.0 && rng.chance(self.mistake_chance) {
            let chosen = random_move(ctx, rng);
            debug!(
                best_slot = search.chosen.target_slot,
                slot = chosen.target_slot,
                hand_idx = chosen.hand_idx,
                "mistake: discarding best move"
            );
            return Decision {
                chosen,
                mistake: true,
                ..search
            };
        }
        search
    }
}

/// Score of placing `card` on `slot`.
///
/// One `capture_weight` per neighbor owned by `opponent` whose facing stat
/// `card` strictly beats, plus `corner_bonus` when `slot` is a corner.
#[must_use]
pub fn score_candidate(
    grid: &Grid,
    card: &Card,
    slot: usize,
    opponent: Side,
    capture_weight: f64,
    corner_bonus: f64,
) -> f64 {
    let mut score = 0.0;
    for n in neighbors_of(slot) {
        if let Some(defender) = grid.get(n.target_index) {
            if defender.owner == opponent && card.beats(n.attacker_face, defender, n.defender_face) {
                score += capture_weight;
            }
        }
    }
    if is_corner(slot) {
        score += corner_bonus;
    }
    score
}

/// Best (card, slot) pair by `score_candidate`.
///
/// Hand cards form the outer loop and slots the inner one. Only a strictly
/// greater score replaces the running best, so the first pair to reach the
/// top score wins ties. The running best starts below any real score; if
/// nothing beats it (only possible with NaN weights) the first empty slot
/// and first hand card are played.
#[must_use]
pub fn best_move(ctx: &MoveContext<'_>, corner_bonus: f64) -> Decision {
    let mut best: Option<Move> = None;
    let mut max_score = -1.0;
    let mut candidates = 0u32;

    for (hand_idx, card) in ctx.hand.iter().enumerate() {
        for &slot in ctx.empty_slots {
            let score = score_candidate(
                ctx.grid,
                card,
                slot,
                ctx.opponent,
                ctx.capture_weight,
                corner_bonus,
            );
            candidates += 1;
            trace!(hand_idx, slot, score, "candidate");

            if score > max_score {
                max_score = score;
                best = Some(Move::new(slot, hand_idx));
            }
        }
    }

    let (chosen, best_score) = match best {
        Some(chosen) => (chosen, Some(max_score)),
        None => {
            let slot = ctx.empty_slots.first().copied().unwrap_or_default();
            (Move::new(slot, 0), None)
        }
    };

    Decision {
        chosen,
        best_score,
        candidates,
        mistake: false,
    }
}
