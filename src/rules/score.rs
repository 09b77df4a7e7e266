//! Ownership tally and battle outcome.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{Side, SideMap};

/// Number of occupied cells owned by each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub enemy: u32,
}

impl Score {
    /// Count for one side.
    #[must_use]
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }

    /// Total occupied cells.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.player + self.enemy
    }

    /// Side with more cards, or `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.player.cmp(&self.enemy) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Enemy),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl From<SideMap<u32>> for Score {
    fn from(counts: SideMap<u32>) -> Self {
        Self {
            player: counts[Side::Player],
            enemy: counts[Side::Enemy],
        }
    }
}

/// Count occupied cells per owner. Empty cells are ignored.
#[must_use]
pub fn tally_score(grid: &Grid) -> Score {
    let mut counts = SideMap::with_value(0u32);
    for (_, card) in grid.occupied() {
        counts[card.owner] += 1;
    }
    Score::from(counts)
}

/// Result of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// One side owns more cards.
    Winner(Side),
    /// Both sides own the same number of cards.
    Draw,
}

impl BattleOutcome {
    /// Did `side` win?
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, BattleOutcome::Winner(s) if *s == side)
    }
}

/// Outcome once every cell is filled; `None` while the battle is running.
#[must_use]
pub fn outcome(grid: &Grid) -> Option<BattleOutcome> {
    if !grid.is_full() {
        return None;
    }
    Some(match tally_score(grid).leader() {
        Some(side) => BattleOutcome::Winner(side),
        None => BattleOutcome::Draw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn card(owner: Side) -> Card {
        Card::new(owner, [1.0; 4])
    }

    #[test]
    fn test_empty_grid() {
        let score = tally_score(&Grid::new());
        assert_eq!(score, Score { player: 0, enemy: 0 });
        assert_eq!(score.leader(), None);
    }

    #[test]
    fn test_tally_counts_owners() {
        let mut grid = Grid::new();
        grid.place(0, card(Side::Player)).unwrap();
        grid.place(4, card(Side::Enemy)).unwrap();
        grid.place(8, card(Side::Enemy)).unwrap();

        let score = tally_score(&grid);
        assert_eq!(score.get(Side::Player), 1);
        assert_eq!(score.get(Side::Enemy), 2);
        assert_eq!(score.total(), 3);
        assert_eq!(score.leader(), Some(Side::Enemy));
    }

    #[test]
    fn test_tally_follows_flips() {
        let mut grid = Grid::new();
        grid.place(0, card(Side::Player)).unwrap();
        grid.set_owner(0, Side::Enemy);

        assert_eq!(tally_score(&grid), Score { player: 0, enemy: 1 });
    }

    #[test]
    fn test_outcome_requires_full_grid() {
        let mut grid = Grid::new();
        for i in 0..8 {
            grid.place(i, card(Side::Player)).unwrap();
        }
        assert_eq!(outcome(&grid), None);

        grid.place(8, card(Side::Enemy)).unwrap();
        let result = outcome(&grid).unwrap();
        assert!(result.is_winner(Side::Player));
        assert!(!result.is_winner(Side::Enemy));
    }

    #[test]
    fn test_score_serializes_as_counts() {
        let json = serde_json::to_string(&Score { player: 4, enemy: 5 }).unwrap();
        assert_eq!(json, r#"{"player":4,"enemy":5}"#);
    }
}
