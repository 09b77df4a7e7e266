//! Cards as they sit in a hand or on the grid.
//!
//! A card is an owner plus four facing stats. Display data (art, grade,
//! flavour text) rides along in `CardMeta` but never affects a battle.
//!
//! ## Malformed Cards
//!
//! `stats` is optional so hosts can hand over whatever they have. A card
//! without stats never attacks and never captures; defending, its faces read
//! as NaN and it can never be flipped.

use serde::{Deserialize, Serialize};

use super::stats::{Face, Stats};
use crate::core::Side;

/// Display-only card data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardMeta {
    /// Card name.
    pub name: Option<String>,
    /// Art reference (URL or asset key).
    pub image: Option<String>,
    /// Rarity grade, e.g. "SSR".
    pub grade: Option<String>,
    /// Flavour text.
    pub description: Option<String>,
}

impl CardMeta {
    /// Metadata with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A card with an owner and facing stats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Current owner. Flips reassign this in place.
    pub owner: Side,

    /// Facing stats. `None` marks a malformed card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,

    /// Display data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<CardMeta>,
}

impl Card {
    /// Create a card with numeric stats in `[top, bottom, left, right]` order.
    ///
    /// ```
    /// use triad_engine::cards::{Card, Face};
    /// use triad_engine::core::Side;
    ///
    /// let card = Card::new(Side::Player, [5.0, 1.0, 1.0, 1.0]);
    /// assert_eq!(card.stat(Face::Top), 5.0);
    /// ```
    #[must_use]
    pub fn new(owner: Side, stats: [f64; 4]) -> Self {
        Self::with_stats(owner, Stats::new(stats))
    }

    /// Create a card from prepared stats.
    #[must_use]
    pub fn with_stats(owner: Side, stats: Stats) -> Self {
        Self {
            owner,
            stats: Some(stats),
            meta: None,
        }
    }

    /// Create a card that carries no stats.
    #[must_use]
    pub fn malformed(owner: Side) -> Self {
        Self {
            owner,
            stats: None,
            meta: None,
        }
    }

    /// Attach display metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: CardMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Does this card carry stats?
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.stats.is_some()
    }

    /// Coerced stat on a face. NaN for malformed cards.
    #[must_use]
    pub fn stat(&self, face: Face) -> f64 {
        self.stats.as_ref().map_or(f64::NAN, |s| s.value(face))
    }

    /// Does this card's `attack` face strictly beat `defender`'s `defense` face?
    ///
    /// Ties never win. NaN on either side never wins.
    #[must_use]
    pub fn beats(&self, attack: Face, defender: &Card, defense: Face) -> bool {
        self.stat(attack) > defender.stat(defense)
    }
}
