//! Error types.
//!
//! The battle operations themselves never fail: they degrade to empty or
//! `None` results. Errors only come out of the helpers a host uses to build
//! and validate its inputs.

use thiserror::Error;

/// Errors reported by grid construction and input validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Cell index outside the 3x3 grid.
    #[error("cell index {index} is outside the grid (0..=8)")]
    CellOutOfRange { index: usize },

    /// Placement onto a cell that already holds a card.
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    /// Hand index past the end of the hand.
    #[error("hand index {index} is out of range for a hand of {len}")]
    HandIndexOutOfRange { index: usize, len: usize },

    /// Stage number rejected by `StagePolicy::Reject`.
    #[error("stage {stage} is not a valid stage (stages start at 1)")]
    InvalidStage { stage: i64 },

    /// Inconsistent configuration values.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Result alias for engine helpers.
pub type EngineResult<T> = Result<T, EngineError>;
