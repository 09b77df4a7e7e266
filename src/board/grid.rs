//! The 3x3 battle grid.
//!
//! Cells are addressed 0..=8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! --+---+--
//! 3 | 4 | 5
//! --+---+--
//! 6 | 7 | 8
//! ```
//!
//! A cell is either empty or holds exactly one card. Once filled, a cell
//! stays filled for the rest of the battle; only the owner of its card
//! changes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{EngineError, EngineResult, Side};

/// Cells per row and per column.
pub const GRID_SIDE: usize = 3;

/// Total number of cells.
pub const GRID_SIZE: usize = GRID_SIDE * GRID_SIDE;

/// Corner cells.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Row and column of a cell index.
#[must_use]
pub const fn row_col(index: usize) -> (usize, usize) {
    (index / GRID_SIDE, index % GRID_SIDE)
}

/// Is `index` one of the four corners?
#[must_use]
pub fn is_corner(index: usize) -> bool {
    CORNERS.contains(&index)
}

/// Indices of empty cells, stored inline.
pub type Slots = SmallVec<[usize; GRID_SIZE]>;

/// The battle grid.
///
/// The host owns the grid; the engine only reads it, except for flip
/// resolution which reassigns owners in place.
///
/// Serializes as a plain nine-entry array of cards or `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [Option<Card>; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from a full cell snapshot.
    #[must_use]
    pub fn from_cells(cells: [Option<Card>; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Card at `index`, if any. Out-of-range indices read as empty.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    /// Mutable card at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cells.get_mut(index).and_then(Option::as_mut)
    }

    /// Place a card on an empty cell.
    ///
    /// Fails without touching the grid if the index is out of range or the
    /// cell is already taken.
    pub fn place(&mut self, index: usize, card: Card) -> EngineResult<()> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(EngineError::CellOutOfRange { index })?;
        if cell.is_some() {
            return Err(EngineError::CellOccupied { index });
        }
        *cell = Some(card);
        Ok(())
    }

    /// Reassign the owner of the card at `index`.
    ///
    /// Returns `false` if the cell is empty.
    pub fn set_owner(&mut self, index: usize, owner: Side) -> bool {
        match self.get_mut(index) {
            Some(card) => {
                card.owner = owner;
                true
            }
            None => false,
        }
    }

    /// Owner of the card at `index`, if any.
    #[must_use]
    pub fn owner_at(&self, index: usize) -> Option<Side> {
        self.get(index).map(|card| card.owner)
    }

    /// Is the cell at `index` empty? Out-of-range indices are not.
    #[must_use]
    pub fn is_empty_cell(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Empty cell indices in ascending order.
    #[must_use]
    pub fn empty_slots(&self) -> Slots {
        (0..GRID_SIZE).filter(|&i| self.cells[i].is_none()).collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Are all cells occupied?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == GRID_SIZE
    }

    /// Iterate over occupied cells as `(index, card)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|card| (i, card)))
    }

    /// Raw cell slice.
    #[must_use]
    pub fn cells(&self) -> &[Option<Card>; GRID_SIZE] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(owner: Side) -> Card {
        Card::new(owner, [1.0, 1.0, 1.0, 1.0])
    }

    #[test]
    fn test_row_col() {
        assert_eq!(row_col(0), (0, 0));
        assert_eq!(row_col(5), (1, 2));
        assert_eq!(row_col(7), (2, 1));
    }

    #[test]
    fn test_corners() {
        let corners: Vec<usize> = (0..GRID_SIZE).filter(|&i| is_corner(i)).collect();
        assert_eq!(corners, vec![0, 2, 6, 8]);
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.empty_slots().as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_place() {
        let mut grid = Grid::new();
        grid.place(4, card(Side::Player)).unwrap();

        assert_eq!(grid.owner_at(4), Some(Side::Player));
        assert!(!grid.is_empty_cell(4));
        assert!(grid.get(4).is_some());
        assert_eq!(grid.empty_slots().len(), 8);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut grid = Grid::new();
        grid.place(0, card(Side::Player)).unwrap();

        assert_eq!(
            grid.place(0, card(Side::Enemy)),
            Err(EngineError::CellOccupied { index: 0 })
        );
        assert_eq!(grid.owner_at(0), Some(Side::Player));

        assert_eq!(
            grid.place(9, card(Side::Enemy)),
            Err(EngineError::CellOutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_set_owner() {
        let mut grid = Grid::new();
        grid.place(2, card(Side::Player)).unwrap();

        assert!(grid.set_owner(2, Side::Enemy));
        assert_eq!(grid.owner_at(2), Some(Side::Enemy));
        assert!(!grid.set_owner(3, Side::Enemy));
        assert!(!grid.set_owner(42, Side::Enemy));
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::new();
        for i in 0..GRID_SIZE {
            grid.place(i, card(Side::Enemy)).unwrap();
        }
        assert!(grid.is_full());
        assert!(grid.empty_slots().is_empty());
        assert_eq!(grid.occupied().count(), 9);
    }

    #[test]
    fn test_out_of_range_reads() {
        let grid = Grid::new();
        assert!(grid.get(9).is_none());
        assert!(!grid.is_empty_cell(9));
        assert_eq!(grid.owner_at(100), None);
    }

    #[test]
    fn test_grid_serde() {
        let mut grid = Grid::new();
        grid.place(1, card(Side::Enemy)).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.starts_with("[null,{"));
        let restored: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, restored);
    }
}
