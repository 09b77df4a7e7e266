//! Facing stats and numeric coercion.
//!
//! Card data usually comes from a host that is loose about types: a stat may
//! arrive as `5`, `"5"`, `" 5 "`, `true`, `null`, or be missing entirely.
//! Every comparison goes through `StatValue::coerce`, which follows the usual
//! dynamic-language number conversion:
//!
//! | Input                  | Coerced  |
//! |------------------------|----------|
//! | number                 | itself   |
//! | `true` / `false`       | 1 / 0    |
//! | `null`                 | 0        |
//! | blank text             | 0        |
//! | numeric text           | parsed   |
//! | any other text         | NaN      |
//! | missing                | NaN      |
//!
//! NaN is never greater than anything, so garbage stats never win a contest.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the four sides of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
}

impl Face {
    /// All faces in stat-index order.
    pub const ALL: [Face; 4] = [Face::Top, Face::Bottom, Face::Left, Face::Right];

    /// Stat index of this face (top 0, bottom 1, left 2, right 3).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Face::Top => 0,
            Face::Bottom => 1,
            Face::Left => 2,
            Face::Right => 3,
        }
    }

    /// Face for a stat index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Face::Top),
            1 => Some(Face::Bottom),
            2 => Some(Face::Left),
            3 => Some(Face::Right),
            _ => None,
        }
    }

    /// The face that touches this one on an adjacent card.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }
}

/// A single stat as supplied by the host.
///
/// Serializes as plain JSON values. Values that coerce to NaN or an
/// infinity are written as text (`"NaN"`, `"Infinity"`, `"-Infinity"`) so
/// they still coerce the same way when read back; JSON `null` would read
/// back as 0.
#[derive(Clone, Debug, PartialEq)]
pub enum StatValue {
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Flag(bool),
    /// Text that may or may not hold a number.
    Text(String),
    /// Explicit null.
    Null,
    /// No value at this position.
    Missing,
}

// `Missing` is never read from data; it only pads short stat lists.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStat {
    Number(f64),
    Flag(bool),
    Text(String),
    Null,
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Number(v) if v.is_finite() => serializer.serialize_f64(*v),
            StatValue::Number(v) if *v == f64::INFINITY => serializer.serialize_str("Infinity"),
            StatValue::Number(v) if *v == f64::NEG_INFINITY => serializer.serialize_str("-Infinity"),
            StatValue::Number(_) | StatValue::Missing => serializer.serialize_str("NaN"),
            StatValue::Flag(b) => serializer.serialize_bool(*b),
            StatValue::Text(s) => serializer.serialize_str(s),
            StatValue::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for StatValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawStat::deserialize(deserializer).map(Self::from)
    }
}

impl From<RawStat> for StatValue {
    fn from(raw: RawStat) -> Self {
        match raw {
            RawStat::Number(v) => StatValue::Number(v),
            RawStat::Flag(b) => StatValue::Flag(b),
            RawStat::Text(s) => StatValue::Text(s),
            RawStat::Null => StatValue::Null,
        }
    }
}

impl StatValue {
    /// Numeric value used in every comparison.
    #[must_use]
    pub fn coerce(&self) -> f64 {
        match self {
            StatValue::Number(v) => *v,
            StatValue::Flag(b) => f64::from(u8::from(*b)),
            StatValue::Null => 0.0,
            StatValue::Missing => f64::NAN,
            StatValue::Text(s) => coerce_text(s),
        }
    }
}

fn coerce_text(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix: Option<u32> = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        // Fold manually so long literals lose precision instead of overflowing.
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
    }

    // Rust's float parser also accepts "inf" and "nan"; plain decimal literals only.
    if !s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

impl From<f64> for StatValue {
    fn from(v: f64) -> Self {
        StatValue::Number(v)
    }
}

impl From<i32> for StatValue {
    fn from(v: i32) -> Self {
        StatValue::Number(f64::from(v))
    }
}

impl From<u8> for StatValue {
    fn from(v: u8) -> Self {
        StatValue::Number(f64::from(v))
    }
}

impl From<bool> for StatValue {
    fn from(v: bool) -> Self {
        StatValue::Flag(v)
    }
}

impl From<&str> for StatValue {
    fn from(v: &str) -> Self {
        StatValue::Text(v.to_string())
    }
}

impl From<String> for StatValue {
    fn from(v: String) -> Self {
        StatValue::Text(v)
    }
}

/// The four facing stats of a card, indexed by `Face`.
///
/// Deserializes from a list of any length: extra entries are ignored and
/// missing ones become `StatValue::Missing`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<StatValue>", into = "Vec<StatValue>")]
pub struct Stats([StatValue; 4]);

impl Stats {
    /// Create numeric stats in `[top, bottom, left, right]` order.
    #[must_use]
    pub fn new(values: [f64; 4]) -> Self {
        Self(values.map(StatValue::Number))
    }

    /// Create stats from raw values in `[top, bottom, left, right]` order.
    #[must_use]
    pub fn from_values(values: [StatValue; 4]) -> Self {
        Self(values)
    }

    /// Raw stat on a face.
    #[must_use]
    pub fn get(&self, face: Face) -> &StatValue {
        &self.0[face.index()]
    }

    /// Coerced stat on a face.
    #[must_use]
    pub fn value(&self, face: Face) -> f64 {
        self.get(face).coerce()
    }

    /// Coerced stat by raw index. Indices past the last face read as NaN.
    #[must_use]
    pub fn value_at(&self, index: usize) -> f64 {
        self.0.get(index).map_or(f64::NAN, StatValue::coerce)
    }

    /// Coerced stats in face order.
    #[must_use]
    pub fn values(&self) -> [f64; 4] {
        [
            self.value(Face::Top),
            self.value(Face::Bottom),
            self.value(Face::Left),
            self.value(Face::Right),
        ]
    }
}

impl From<Vec<StatValue>> for Stats {
    fn from(values: Vec<StatValue>) -> Self {
        let mut iter = values.into_iter();
        Self(std::array::from_fn(|_| iter.next().unwrap_or(StatValue::Missing)))
    }
}

impl From<Stats> for Vec<StatValue> {
    fn from(stats: Stats) -> Self {
        let mut values = Vec::from(stats.0);
        while matches!(values.last(), Some(StatValue::Missing)) {
            values.pop();
        }
        values
    }
}

impl From<[f64; 4]> for Stats {
    fn from(values: [f64; 4]) -> Self {
        Self::new(values)
    }
}
