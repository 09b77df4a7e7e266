//! The battle engine façade.
//!
//! `BattleEngine` is what a host game loop holds on to: one object per
//! game, owning its configuration and its random source. Grids and hands
//! stay with the host and are passed in on every call.

use tracing::debug;

use crate::ai::{AiMoveSelector, Move, SelectionStats};
use crate::board::{self, Grid, Neighbors};
use crate::cards::Card;
use crate::core::{EngineConfig, EngineResult, GameRng, GameRngState, RandomSource};

use super::flip::{self, FlipPlan, Flipped};
use super::score::{self, BattleOutcome, Score};

/// Battle engine for one game.
///
/// ## Example
///
/// ```
/// use triad_engine::rules::BattleEngine;
/// use triad_engine::board::Grid;
/// use triad_engine::cards::Card;
/// use triad_engine::core::{EngineConfig, Side};
///
/// let mut engine = BattleEngine::new(EngineConfig::default().with_seed(9));
/// let mut grid = Grid::new();
///
/// grid.place(1, Card::new(Side::Enemy, [1.0, 1.0, 1.0, 1.0])).unwrap();
/// grid.place(4, Card::new(Side::Player, [5.0, 1.0, 1.0, 1.0])).unwrap();
/// assert_eq!(engine.resolve_flips(&mut grid, 4).as_slice(), &[1]);
///
/// let hand = vec![Card::new(Side::Enemy, [2.0, 2.0, 2.0, 2.0])];
/// let chosen = engine.select_ai_move(&grid, &hand, 8).unwrap();
/// assert!(grid.is_empty_cell(chosen.target_slot));
///
/// let score = engine.tally_score(&grid);
/// assert_eq!((score.player, score.enemy), (2, 0));
/// ```
#[derive(Debug)]
pub struct BattleEngine<R: RandomSource = GameRng> {
    selector: AiMoveSelector,
    rng: R,
}

impl BattleEngine<GameRng> {
    /// Create an engine seeded from the configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Engine for another battle, with the same AI configuration and a
    /// random source forked from this one.
    ///
    /// The child uses the standard tier policies even if this engine was
    /// given custom ones.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let config = EngineConfig::default().with_ai(self.selector.config().clone());
        let rng = self.rng.fork();
        debug!(child_seed = rng.seed(), "battle engine forked");
        Self::with_rng(config, rng)
    }

    /// Random source snapshot, for saving a battle in progress.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue from a snapshot taken by `rng_state`.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }
}

impl Default for BattleEngine<GameRng> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RandomSource> BattleEngine<R> {
    /// Create an engine drawing from a host-supplied random source.
    ///
    /// `config.seed` is ignored.
    #[must_use]
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        debug!(
            ai_side = %config.ai.ai_side,
            normal_from = config.ai.normal_from_stage,
            hard_from = config.ai.hard_from_stage,
            "battle engine created"
        );
        Self {
            selector: AiMoveSelector::new(config.ai),
            rng,
        }
    }

    /// Like `new`/`with_rng`, after checking the AI configuration.
    pub fn try_with_rng(config: EngineConfig, rng: R) -> EngineResult<Self> {
        config.ai.validate()?;
        Ok(Self::with_rng(config, rng))
    }

    /// Replace the move selector, e.g. one with custom tier policies.
    #[must_use]
    pub fn with_selector(mut self, selector: AiMoveSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Neighbors of a cell with their contested faces.
    #[must_use]
    pub fn neighbors_of(&self, index: usize) -> Neighbors {
        board::neighbors_of(index)
    }

    /// Captures the card at `placed` would make, without applying them.
    #[must_use]
    pub fn plan_flips(&self, grid: &Grid, placed: usize) -> FlipPlan {
        flip::plan_flips(grid, placed)
    }

    /// Resolve captures for the card at `placed`, reassigning owners in place.
    pub fn resolve_flips(&self, grid: &mut Grid, placed: usize) -> Flipped {
        flip::resolve_flips(grid, placed)
    }

    /// Choose the AI's placement, or `None` if there is nothing to play.
    pub fn select_ai_move(&mut self, grid: &Grid, hand: &[Card], stage: i64) -> Option<Move> {
        self.selector.select(grid, hand, stage, &mut self.rng)
    }

    /// Like `select_ai_move`, honouring `StagePolicy::Reject`.
    pub fn try_select_ai_move(
        &mut self,
        grid: &Grid,
        hand: &[Card],
        stage: i64,
    ) -> EngineResult<Option<Move>> {
        self.selector.try_select(grid, hand, stage, &mut self.rng)
    }

    /// Cells owned by each side.
    #[must_use]
    pub fn tally_score(&self, grid: &Grid) -> Score {
        score::tally_score(grid)
    }

    /// Outcome once the grid is full.
    #[must_use]
    pub fn outcome(&self, grid: &Grid) -> Option<BattleOutcome> {
        score::outcome(grid)
    }

    /// Diagnostics from the last AI selection.
    #[must_use]
    pub fn last_selection(&self) -> &SelectionStats {
        self.selector.last_stats()
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Mutable access to the random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
