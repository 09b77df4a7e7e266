//! Flip resolution after a placement.
//!
//! When a card lands on a cell, each orthogonal neighbor owned by the other
//! side is contested: the placed card's facing stat against the neighbor's
//! opposite facing stat. A strictly greater attack captures the neighbor.
//!
//! Resolution is split in two steps so hosts can choose their contract:
//! - `plan_flips` is pure and describes the ownership changes
//! - `resolve_flips` plans and applies them to the grid in place

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::board::{neighbors_of, Grid};
use crate::core::Side;

/// A single capture: the card at `index` now belongs to `new_owner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnershipChange {
    pub index: usize,
    pub new_owner: Side,
}

/// Captures from one placement (at most four).
pub type FlipPlan = SmallVec<[OwnershipChange; 4]>;

/// Flipped cell indices from one placement (at most four).
pub type Flipped = SmallVec<[usize; 4]>;

/// Work out which neighbors the card at `placed` captures, without
/// changing the grid.
///
/// Changes come out in neighbor scan order (up, down, left, right).
/// Nothing is planned unless `placed` holds a well-formed card.
#[must_use]
pub fn plan_flips(grid: &Grid, placed: usize) -> FlipPlan {
    let mut plan = FlipPlan::new();
    let Some(attacker) = grid.get(placed) else {
        return plan;
    };
    if !attacker.is_well_formed() {
        return plan;
    }

    for n in neighbors_of(placed) {
        let Some(defender) = grid.get(n.target_index) else {
            continue;
        };
        if defender.owner == attacker.owner {
            continue;
        }
        if attacker.beats(n.attacker_face, defender, n.defender_face) {
            trace!(
                from = placed,
                to = n.target_index,
                attack = attacker.stat(n.attacker_face),
                defense = defender.stat(n.defender_face),
                "capture"
            );
            plan.push(OwnershipChange {
                index: n.target_index,
                new_owner: attacker.owner,
            });
        }
    }
    plan
}

/// Apply planned changes to the grid.
///
/// Changes pointing at empty cells are skipped.
pub fn apply_flips(grid: &mut Grid, changes: &[OwnershipChange]) {
    for change in changes {
        grid.set_owner(change.index, change.new_owner);
    }
}

/// Resolve captures for the card at `placed`, reassigning owners in place.
///
/// Returns the flipped indices in neighbor scan order.
///
/// ```
/// use triad_engine::board::Grid;
/// use triad_engine::cards::Card;
/// use triad_engine::core::Side;
/// use triad_engine::rules::resolve_flips;
///
/// let mut grid = Grid::new();
/// grid.place(1, Card::new(Side::Enemy, [1.0, 1.0, 1.0, 1.0])).unwrap();
/// grid.place(4, Card::new(Side::Player, [5.0, 1.0, 1.0, 1.0])).unwrap();
///
/// let flipped = resolve_flips(&mut grid, 4);
/// assert_eq!(flipped.as_slice(), &[1]);
/// assert_eq!(grid.owner_at(1), Some(Side::Player));
/// ```
pub fn resolve_flips(grid: &mut Grid, placed: usize) -> Flipped {
    let plan = plan_flips(grid, placed);
    apply_flips(grid, &plan);

    if !plan.is_empty() {
        debug!(placed, flips = plan.len(), "placement captured cards");
    }
    plan.iter().map(|c| c.index).collect()
}
