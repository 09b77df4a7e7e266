//! Difficulty tiers derived from the stage number.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AiConfig, EngineError, EngineResult, StagePolicy};

/// Stage assumed when the host does not supply one.
pub const DEFAULT_STAGE: i64 = 1;

/// AI difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Random placement, ignores the board.
    Easy,
    /// Greedy capture search that sometimes plays a random move instead.
    Normal,
    /// Greedy capture search with a corner preference, never errs.
    Hard,
}

impl Tier {
    /// All tiers in ascending difficulty.
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Normal, Tier::Hard];

    /// Position in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Tier::Easy => 0,
            Tier::Normal => 1,
            Tier::Hard => 2,
        }
    }

    /// Tier for a stage. Stages below 1 clamp to `Easy`.
    ///
    /// ```
    /// use triad_engine::ai::Tier;
    /// use triad_engine::core::AiConfig;
    ///
    /// let config = AiConfig::default();
    /// assert_eq!(Tier::from_stage(3, &config), Tier::Easy);
    /// assert_eq!(Tier::from_stage(4, &config), Tier::Normal);
    /// assert_eq!(Tier::from_stage(8, &config), Tier::Hard);
    /// assert_eq!(Tier::from_stage(0, &config), Tier::Easy);
    /// ```
    #[must_use]
    pub fn from_stage(stage: i64, config: &AiConfig) -> Self {
        if stage >= config.hard_from_stage {
            Tier::Hard
        } else if stage >= config.normal_from_stage {
            Tier::Normal
        } else {
            Tier::Easy
        }
    }

    /// Tier for a stage, honouring the configured `StagePolicy`.
    pub fn try_from_stage(stage: i64, config: &AiConfig) -> EngineResult<Self> {
        if stage < 1 {
            match config.stage_policy {
                StagePolicy::Reject => return Err(EngineError::InvalidStage { stage }),
                StagePolicy::Clamp => debug!(stage, "stage below 1 clamped to easy"),
            }
        }
        Ok(Self::from_stage(stage, config))
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Easy => "easy",
            Tier::Normal => "normal",
            Tier::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries() {
        let config = AiConfig::default();
        let tiers: Vec<Tier> = (1..=10).map(|s| Tier::from_stage(s, &config)).collect();
        assert_eq!(
            tiers,
            vec![
                Tier::Easy,
                Tier::Easy,
                Tier::Easy,
                Tier::Normal,
                Tier::Normal,
                Tier::Normal,
                Tier::Normal,
                Tier::Hard,
                Tier::Hard,
                Tier::Hard,
            ]
        );
        assert_eq!(Tier::from_stage(1_000, &config), Tier::Hard);
    }

    #[test]
    fn test_low_stages_clamp() {
        let config = AiConfig::default();
        assert_eq!(Tier::from_stage(0, &config), Tier::Easy);
        assert_eq!(Tier::from_stage(-5, &config), Tier::Easy);
        assert_eq!(Tier::try_from_stage(0, &config), Ok(Tier::Easy));
    }

    #[test]
    fn test_reject_policy() {
        let config = AiConfig::default().with_stage_policy(StagePolicy::Reject);
        assert_eq!(
            Tier::try_from_stage(0, &config),
            Err(EngineError::InvalidStage { stage: 0 })
        );
        assert_eq!(Tier::try_from_stage(1, &config), Ok(Tier::Easy));
        assert_eq!(Tier::try_from_stage(9, &config), Ok(Tier::Hard));
    }

    #[test]
    fn test_custom_boundaries() {
        let config = AiConfig::default().with_stage_bounds(2, 3);
        assert_eq!(Tier::from_stage(1, &config), Tier::Easy);
        assert_eq!(Tier::from_stage(2, &config), Tier::Normal);
        assert_eq!(Tier::from_stage(3, &config), Tier::Hard);
    }

    #[test]
    fn test_index_matches_all() {
        for (i, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
        }
        assert_eq!(Tier::Normal.to_string(), "normal");
    }

    #[test]
    fn test_default_stage_is_valid_and_easy() {
        let strict = AiConfig::default().with_stage_policy(StagePolicy::Reject);
        assert_eq!(Tier::try_from_stage(DEFAULT_STAGE, &strict), Ok(Tier::Easy));
    }
}
