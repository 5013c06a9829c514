//! Table model - a shaped table with numbered seats

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Guest;

/// Stable identity of a table, independent of its display number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(pub Uuid);

impl TableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TableId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Table shapes supported by the seat calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Round,
    Rectangle,
}

impl TableShape {
    pub fn label(&self) -> &'static str {
        match self {
            TableShape::Round => "Round",
            TableShape::Rectangle => "Rectangle",
        }
    }
}

impl std::fmt::Display for TableShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A point on the layout canvas or in a table's local space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates into the positive quadrant.
    ///
    /// NaN collapses to zero.
    pub fn clamped_non_negative(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }
}

/// A table on the layout canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    /// Display label; kept unique by convention only
    pub number: u32,
    pub shape: TableShape,
    /// Fixed at creation
    pub seat_count: u32,
    /// Top-left corner on the layout canvas
    pub position: Point,
    /// Seat number (1-based) to the guest sitting there
    #[serde(default)]
    pub guests: BTreeMap<u32, Guest>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Table {
    pub fn new(number: u32, shape: TableShape, seat_count: u32, position: Point) -> Self {
        Self {
            id: TableId::new(),
            number,
            shape,
            seat_count,
            position,
            guests: BTreeMap::new(),
            description: None,
        }
    }

    /// Valid seat numbers for this table
    pub fn seats(&self) -> RangeInclusive<u32> {
        1..=self.seat_count
    }

    pub fn has_seat(&self, seat: u32) -> bool {
        self.seats().contains(&seat)
    }

    pub fn guest(&self, seat: u32) -> Option<&Guest> {
        self.guests.get(&seat)
    }

    pub fn occupied_seats(&self) -> u32 {
        self.guests.len() as u32
    }

    pub fn open_seats(&self) -> u32 {
        self.seat_count.saturating_sub(self.occupied_seats())
    }

    pub fn is_full(&self) -> bool {
        self.open_seats() == 0
    }
}
