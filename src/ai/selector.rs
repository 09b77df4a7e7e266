//! Tier dispatch for AI move selection.
//!
//! The selector resolves the stage to a `Tier` once, then hands the board
//! to that tier's `MovePolicy` from a three-entry table. Hosts may swap any
//! entry for a policy of their own.

use tracing::debug;

use crate::board::Grid;
use crate::cards::Card;
use crate::core::{AiConfig, EngineResult, RandomSource};

use super::policy::{GreedyPolicy, Move, MoveContext, MovePolicy, RandomPolicy};
use super::stats::SelectionStats;
use super::tier::Tier;

/// AI move selector.
///
/// Owns the AI configuration and the per-tier policy table. Holds no game
/// state between calls other than diagnostics of the last selection.
pub struct AiMoveSelector {
    config: AiConfig,
    policies: [Box<dyn MovePolicy>; 3],
    stats: SelectionStats,
}

impl AiMoveSelector {
    /// Create a selector with the standard policy for each tier.
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        let policies: [Box<dyn MovePolicy>; 3] = [
            Box::new(RandomPolicy),
            Box::new(GreedyPolicy::fallible(config.mistake_chance)),
            Box::new(GreedyPolicy::precise(config.corner_bonus)),
        ];
        Self {
            config,
            policies,
            stats: SelectionStats::default(),
        }
    }

    /// Replace the policy used for `tier`.
    #[must_use]
    pub fn with_policy<P: MovePolicy + 'static>(mut self, tier: Tier, policy: P) -> Self {
        self.policies[tier.index()] = Box::new(policy);
        self
    }

    /// AI configuration.
    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Diagnostics from the last selection.
    #[must_use]
    pub fn last_stats(&self) -> &SelectionStats {
        &self.stats
    }

    /// Tier for a stage, clamping stages below 1.
    #[must_use]
    pub fn tier_for(&self, stage: i64) -> Tier {
        Tier::from_stage(stage, &self.config)
    }

    /// Choose a placement for the AI side.
    ///
    /// Returns `None` when the grid is full or the hand is empty. Stages
    /// below 1 play as the first stage.
    pub fn select<R: RandomSource>(
        &mut self,
        grid: &Grid,
        hand: &[Card],
        stage: i64,
        rng: &mut R,
    ) -> Option<Move> {
        let tier = self.tier_for(stage);
        debug!(stage, %tier, "resolved AI tier");
        self.select_for_tier(grid, hand, tier, rng)
    }

    /// Like `select`, but honours `StagePolicy::Reject` for stages below 1.
    pub fn try_select<R: RandomSource>(
        &mut self,
        grid: &Grid,
        hand: &[Card],
        stage: i64,
        rng: &mut R,
    ) -> EngineResult<Option<Move>> {
        let tier = Tier::try_from_stage(stage, &self.config)?;
        Ok(self.select_for_tier(grid, hand, tier, rng))
    }

    /// Choose a placement with an explicit tier.
    pub fn select_for_tier<R: RandomSource>(
        &mut self,
        grid: &Grid,
        hand: &[Card],
        tier: Tier,
        rng: &mut R,
    ) -> Option<Move> {
        let empty_slots = grid.empty_slots();
        self.stats.reset();
        self.stats.tier = Some(tier);
        self.stats.empty_slots = empty_slots.len() as u32;
        self.stats.hand_size = hand.len() as u32;

        if empty_slots.is_empty() || hand.is_empty() {
            debug!(
                empty_slots = empty_slots.len(),
                hand = hand.len(),
                "no move available"
            );
            return None;
        }

        let ctx = MoveContext {
            grid,
            hand,
            empty_slots: &empty_slots,
            opponent: self.config.ai_side.opponent(),
            capture_weight: self.config.capture_weight,
        };
        let decision = self.policies[tier.index()].choose(&ctx, rng);
        self.stats.record(&decision);

        debug!(
            %tier,
            slot = decision.chosen.target_slot,
            hand_idx = decision.chosen.hand_idx,
            score = ?decision.best_score,
            mistake = decision.mistake,
            "AI move selected"
        );
        Some(decision.chosen)
    }
}

impl std::fmt::Debug for AiMoveSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiMoveSelector")
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Default for AiMoveSelector {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

/// Choose a placement with the default configuration.
///
/// ```
/// use triad_engine::ai::select_ai_move;
/// use triad_engine::board::Grid;
/// use triad_engine::cards::Card;
/// use triad_engine::core::{GameRng, Side};
///
/// let grid = Grid::new();
/// let hand = vec![Card::new(Side::Enemy, [3.0, 3.0, 3.0, 3.0])];
/// let mut rng = GameRng::new(1);
///
/// // Hard tier on an empty board takes the first corner.
/// let chosen = select_ai_move(&grid, &hand, 8, &mut rng).unwrap();
/// assert_eq!((chosen.target_slot, chosen.hand_idx), (0, 0));
/// ```
pub fn select_ai_move<R: RandomSource>(
    grid: &Grid,
    hand: &[Card],
    stage: i64,
    rng: &mut R,
) -> Option<Move> {
    AiMoveSelector::default().select(grid, hand, stage, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::policy::Decision;
    use crate::core::{EngineError, GameRng, Side, StagePolicy};

    fn enemy(stats: [f64; 4]) -> Card {
        Card::new(Side::Enemy, stats)
    }

    fn player(stats: [f64; 4]) -> Card {
        Card::new(Side::Player, stats)
    }

    /// Always picks index 0 and never errs; counts draws.
    #[derive(Default)]
    struct Counting {
        picks: usize,
        chances: usize,
    }

    impl RandomSource for Counting {
        fn pick_index(&mut self, _len: usize) -> usize {
            self.picks += 1;
            0
        }

        fn chance(&mut self, _probability: f64) -> bool {
            self.chances += 1;
            false
        }
    }

    #[test]
    fn test_no_move_when_full_or_empty_hand() {
        let mut selector = AiMoveSelector::default();
        let mut rng = GameRng::new(1);

        let mut full = Grid::new();
        for i in 0..9 {
            full.place(i, player([1.0; 4])).unwrap();
        }
        assert_eq!(selector.select(&full, &[enemy([9.0; 4])], 8, &mut rng), None);
        assert!(!selector.last_stats().moved);

        assert_eq!(selector.select(&Grid::new(), &[], 8, &mut rng), None);
        assert_eq!(selector.last_stats().hand_size, 0);
    }

    #[test]
    fn test_easy_only_draws_indices() {
        let mut selector = AiMoveSelector::default();
        let mut rng = Counting::default();

        let chosen = selector.select(&Grid::new(), &[enemy([1.0; 4])], 1, &mut rng);
        assert_eq!(chosen, Some(Move::new(0, 0)));
        assert_eq!(rng.picks, 2);
        assert_eq!(rng.chances, 0);
        assert_eq!(selector.last_stats().tier, Some(Tier::Easy));
    }

    #[test]
    fn test_normal_rolls_mistake_once() {
        let mut selector = AiMoveSelector::default();
        let mut rng = Counting::default();

        selector.select(&Grid::new(), &[enemy([1.0; 4])], 5, &mut rng);
        assert_eq!(rng.chances, 1);
        assert_eq!(rng.picks, 0);
        assert_eq!(selector.last_stats().tier, Some(Tier::Normal));
    }

    #[test]
    fn test_hard_is_deterministic() {
        let mut selector = AiMoveSelector::default();
        let mut rng = Counting::default();

        let mut grid = Grid::new();
        grid.place(4, player([1.0; 4])).unwrap();
        let hand = [enemy([0.0, 2.0, 0.0, 0.0])];

        // Only slot 1 (attacking down into 4) captures.
        let chosen = selector.select(&grid, &hand, 9, &mut rng);
        assert_eq!(chosen, Some(Move::new(1, 0)));
        assert_eq!(rng.picks + rng.chances, 0);
        assert_eq!(selector.last_stats().best_score, Some(1.0));
        assert_eq!(selector.last_stats().candidates, 8);
    }

    #[test]
    fn test_ai_side_is_configurable() {
        let config = AiConfig::default().with_ai_side(Side::Player);
        let mut selector = AiMoveSelector::new(config);
        let mut rng = Counting::default();

        let mut grid = Grid::new();
        grid.place(4, enemy([1.0; 4])).unwrap();
        let hand = [player([0.0, 0.0, 0.0, 2.0])];

        // Slot 3 attacks right into 4.
        let chosen = selector.select(&grid, &hand, 8, &mut rng);
        assert_eq!(chosen, Some(Move::new(3, 0)));
    }

    #[test]
    fn test_try_select_rejects_low_stage() {
        let config = AiConfig::default().with_stage_policy(StagePolicy::Reject);
        let mut selector = AiMoveSelector::new(config);
        let mut rng = GameRng::new(1);

        let result = selector.try_select(&Grid::new(), &[enemy([1.0; 4])], 0, &mut rng);
        assert_eq!(result, Err(EngineError::InvalidStage { stage: 0 }));

        let result = selector.try_select(&Grid::new(), &[enemy([1.0; 4])], 2, &mut rng);
        assert!(matches!(result, Ok(Some(_))));
    }

    #[test]
    fn test_custom_policy_replaces_tier() {
        struct LastSlot;

        impl MovePolicy for LastSlot {
            fn choose(&self, ctx: &MoveContext<'_>, _rng: &mut dyn RandomSource) -> Decision {
                Decision {
                    chosen: Move::new(ctx.empty_slots[ctx.empty_slots.len() - 1], 0),
                    best_score: None,
                    candidates: 0,
                    mistake: false,
                }
            }
        }

        let mut selector = AiMoveSelector::default().with_policy(Tier::Easy, LastSlot);
        let mut rng = GameRng::new(1);
        let chosen = selector.select(&Grid::new(), &[enemy([1.0; 4])], 1, &mut rng);
        assert_eq!(chosen, Some(Move::new(8, 0)));
    }
}
