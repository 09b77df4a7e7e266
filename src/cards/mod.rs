//! Card system: facing stats and card instances.
//!
//! ## Stats
//!
//! Every card has four facing stats indexed `{0: top, 1: bottom, 2: left,
//! 3: right}`. Values are coerced to numbers before any comparison.
//!
//! ## Cards
//!
//! A `Card` is an owner, optional stats, and optional display metadata.

pub mod stats;
pub mod card;

pub use stats::{Face, StatValue, Stats};
pub use card::{Card, CardMeta};
