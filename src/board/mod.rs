//! Grid storage and adjacency.
//!
//! - `grid`: the 3x3 cell array, placement, and cell helpers
//! - `adjacency`: neighbor lookup with the contested face pairs

pub mod grid;
pub mod adjacency;

pub use grid::{is_corner, row_col, Grid, Slots, CORNERS, GRID_SIDE, GRID_SIZE};
pub use adjacency::{neighbors_of, Neighbor, Neighbors};
