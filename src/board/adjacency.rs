//! Orthogonal adjacency on the 3x3 grid.
//!
//! For each cell the resolver lists its neighbors and, for each neighbor,
//! which face of the origin card contests which face of the neighbor. The
//! contested faces are always opposite each other:
//!
//! | Direction | Attacker face | Defender face |
//! |-----------|---------------|---------------|
//! | up        | top (0)       | bottom (1)    |
//! | down      | bottom (1)    | top (0)       |
//! | left      | left (2)      | right (3)     |
//! | right     | right (3)     | left (2)      |
//!
//! Directions that fall off the grid are omitted. There is no wraparound.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{row_col, GRID_SIDE, GRID_SIZE};
use crate::cards::Face;

/// One neighbor of an origin cell and the faces that contest it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbor {
    /// Index of the neighboring cell.
    pub target_index: usize,
    /// Face of the card at the origin that attacks.
    pub attacker_face: Face,
    /// Face of the neighboring card that defends.
    pub defender_face: Face,
}

impl Neighbor {
    /// Attacker stat index (0..=3).
    #[must_use]
    pub const fn attacker_stat_index(&self) -> usize {
        self.attacker_face.index()
    }

    /// Defender stat index (0..=3).
    #[must_use]
    pub const fn defender_stat_index(&self) -> usize {
        self.defender_face.index()
    }
}

/// Up to four neighbors, stored inline.
pub type Neighbors = SmallVec<[Neighbor; 4]>;

/// Neighbors of `index` in up, down, left, right order.
///
/// Corners have 2 neighbors, edges 3 and the center 4. An index outside
/// the grid has none.
///
/// ```
/// use triad_engine::board::neighbors_of;
/// use triad_engine::cards::Face;
///
/// let center = neighbors_of(4);
/// assert_eq!(center.len(), 4);
/// assert_eq!(center[0].target_index, 1);
/// assert_eq!(center[0].attacker_face, Face::Top);
/// assert_eq!(center[0].defender_face, Face::Bottom);
/// ```
#[must_use]
pub fn neighbors_of(index: usize) -> Neighbors {
    let mut out = Neighbors::new();
    if index >= GRID_SIZE {
        return out;
    }

    let (row, col) = row_col(index);
    if row > 0 {
        out.push(neighbor(index - GRID_SIDE, Face::Top));
    }
    if row < GRID_SIDE - 1 {
        out.push(neighbor(index + GRID_SIDE, Face::Bottom));
    }
    if col > 0 {
        out.push(neighbor(index - 1, Face::Left));
    }
    if col < GRID_SIDE - 1 {
        out.push(neighbor(index + 1, Face::Right));
    }
    out
}

fn neighbor(target_index: usize, attacker_face: Face) -> Neighbor {
    Neighbor {
        target_index,
        attacker_face,
        defender_face: attacker_face.opposite(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(index: usize) -> Vec<usize> {
        neighbors_of(index).iter().map(|n| n.target_index).collect()
    }

    #[test]
    fn test_neighbor_counts() {
        let counts: Vec<usize> = (0..GRID_SIZE).map(|i| neighbors_of(i).len()).collect();
        assert_eq!(counts, vec![2, 3, 2, 3, 4, 3, 2, 3, 2]);
    }

    #[test]
    fn test_scan_order() {
        assert_eq!(targets(4), vec![1, 7, 3, 5]);
        assert_eq!(targets(0), vec![3, 1]);
        assert_eq!(targets(8), vec![5, 7]);
        assert_eq!(targets(3), vec![0, 6, 4]);
    }

    #[test]
    fn test_no_wraparound() {
        // 2 and 3 are consecutive indices but sit on different rows.
        assert!(!targets(2).contains(&3));
        assert!(!targets(3).contains(&2));
        assert!(!targets(5).contains(&6));
    }

    #[test]
    fn test_stat_indices() {
        let center = neighbors_of(4);
        let pairs: Vec<(usize, usize)> = center
            .iter()
            .map(|n| (n.attacker_stat_index(), n.defender_stat_index()))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (1, 0), (2, 3), (3, 2)]);
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert!(neighbors_of(9).is_empty());
        assert!(neighbors_of(usize::MAX).is_empty());
    }
}
