//! Engine configuration.
//!
//! Hosts configure the engine at construction time by providing:
//! - `AiConfig`: Stage boundaries and scoring weights for the AI tiers
//! - `EngineConfig`: AI configuration plus the random seed
//!
//! The defaults reproduce the standard tier ladder: stages 1-3 play
//! randomly, 4-7 play greedily with a 30% mistake rate, 8+ play greedily
//! with a corner preference.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::side::Side;

/// How stage numbers below 1 are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StagePolicy {
    /// Treat them as the first stage (Easy tier).
    #[default]
    Clamp,
    /// Report them as `EngineError::InvalidStage`.
    Reject,
}

/// AI tier configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Side the AI plays. Captures are scored against the other side.
    pub ai_side: Side,

    /// Score added per card a placement would capture.
    pub capture_weight: f64,

    /// Score added for corner placements (Hard tier only).
    pub corner_bonus: f64,

    /// Probability that the Normal tier discards its best move for a random one.
    pub mistake_chance: f64,

    /// First stage played at Normal difficulty.
    pub normal_from_stage: i64,

    /// First stage played at Hard difficulty.
    pub hard_from_stage: i64,

    /// Handling of stages below 1.
    pub stage_policy: StagePolicy,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            ai_side: Side::Enemy,
            capture_weight: 1.0,
            corner_bonus: 0.2,
            mistake_chance: 0.3,
            normal_from_stage: 4,
            hard_from_stage: 8,
            stage_policy: StagePolicy::Clamp,
        }
    }
}

impl AiConfig {
    /// Set the side the AI plays.
    #[must_use]
    pub fn with_ai_side(mut self, side: Side) -> Self {
        self.ai_side = side;
        self
    }

    /// Set the Hard tier corner bonus.
    #[must_use]
    pub fn with_corner_bonus(mut self, bonus: f64) -> Self {
        self.corner_bonus = bonus;
        self
    }

    /// Set the Normal tier mistake probability.
    #[must_use]
    pub fn with_mistake_chance(mut self, chance: f64) -> Self {
        self.mistake_chance = chance;
        self
    }

    /// Set the first Normal and first Hard stage.
    #[must_use]
    pub fn with_stage_bounds(mut self, normal_from: i64, hard_from: i64) -> Self {
        self.normal_from_stage = normal_from;
        self.hard_from_stage = hard_from;
        self
    }

    /// Set the handling of stages below 1.
    #[must_use]
    pub fn with_stage_policy(mut self, policy: StagePolicy) -> Self {
        self.stage_policy = policy;
        self
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> EngineResult<()> {
        if !(0.0..=1.0).contains(&self.mistake_chance) {
            return Err(invalid(format!(
                "mistake_chance must be within [0, 1], got {}",
                self.mistake_chance
            )));
        }
        if !self.capture_weight.is_finite() || self.capture_weight <= 0.0 {
            return Err(invalid(format!(
                "capture_weight must be finite and positive, got {}",
                self.capture_weight
            )));
        }
        if !self.corner_bonus.is_finite() || self.corner_bonus < 0.0 {
            return Err(invalid(format!(
                "corner_bonus must be finite and non-negative, got {}",
                self.corner_bonus
            )));
        }
        if self.normal_from_stage < 2 {
            return Err(invalid(format!(
                "normal_from_stage must be at least 2, got {}",
                self.normal_from_stage
            )));
        }
        if self.hard_from_stage <= self.normal_from_stage {
            return Err(invalid(format!(
                "hard_from_stage ({}) must be above normal_from_stage ({})",
                self.hard_from_stage, self.normal_from_stage
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> EngineError {
    EngineError::InvalidConfig { reason }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// AI tier configuration.
    pub ai: AiConfig,

    /// Seed for the engine's own random source.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the AI configuration.
    #[must_use]
    pub fn with_ai(mut self, ai: AiConfig) -> Self {
        self.ai = ai;
        self
    }
}
