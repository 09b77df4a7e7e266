//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A battle is always fought between exactly two sides: the human `Player`
//! and the AI-driven `Enemy`. Every card on the grid is owned by one of them.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides in a battle.
///
/// Serializes as `"player"` / `"enemy"`, matching the owner tags hosts
/// attach to their card data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human side.
    Player,
    /// The AI side.
    Enemy,
}

impl Side {
    /// Both sides, in slot order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Enemy];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Slot index (0 for `Player`, 1 for `Enemy`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Enemy => 1,
        }
    }

    /// Lowercase tag used in host data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Enemy => "enemy",
        }
    }

    /// Parse a lowercase owner tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "player" => Some(Side::Player),
            "enemy" => Some(Side::Enemy),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use triad_engine::core::{Side, SideMap};
///
/// let mut captures: SideMap<u32> = SideMap::with_value(0);
/// captures[Side::Enemy] += 2;
///
/// assert_eq!(captures[Side::Player], 0);
/// assert_eq!(captures[Side::Enemy], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Enemy)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
        assert_eq!(Side::Player.opponent().opponent(), Side::Player);
    }

    #[test]
    fn test_display_and_tags() {
        assert_eq!(format!("{}", Side::Player), "player");
        assert_eq!(format!("{}", Side::Enemy), "enemy");
        assert_eq!(Side::from_tag("enemy"), Some(Side::Enemy));
        assert_eq!(Side::from_tag("Enemy"), None);
    }

    #[test]
    fn test_side_serde() {
        let json = serde_json::to_string(&Side::Enemy).unwrap();
        assert_eq!(json, "\"enemy\"");

        let side: Side = serde_json::from_str("\"player\"").unwrap();
        assert_eq!(side, Side::Player);
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|s| s.index() * 10);
        assert_eq!(map[Side::Player], 0);
        assert_eq!(map[Side::Enemy], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i32> = SideMap::with_value(0);
        map[Side::Player] = 3;
        *map.get_mut(Side::Enemy) += 4;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &3), (Side::Enemy, &4)]);
    }
}
