//! Seat geometry
//!
//! Computes where the seats of a table sit, relative to the table's local
//! origin (its top-left corner). Everything here is pure: the same shape,
//! seat count and dimensions always produce the same anchors.
//!
//! Seat `i` (1-based) is element `i - 1` of the returned sequence. Each anchor
//! is the top-left corner of the seat's square footprint, so a seat glyph drawn
//! at the anchor is centered on the computed point.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::models::{Point, Table, TableShape};

/// Side length of a seat glyph
pub const DEFAULT_SEAT_SIZE: f64 = 24.0;
/// Distance between a round table's edge and the circle seats are centered on
pub const DEFAULT_ROUND_MARGIN: f64 = 20.0;
/// Gap between a rectangle table's edge and the seats along it
pub const DEFAULT_EDGE_GAP: f64 = 5.0;

/// Width and height of a table's body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Sizes used when laying out seats, configurable per session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatGeometry {
    pub seat_size: f64,
    pub round_margin: f64,
    pub edge_gap: f64,
    pub round_table: Footprint,
    pub rectangle_table: Footprint,
}

impl Default for SeatGeometry {
    fn default() -> Self {
        Self {
            seat_size: DEFAULT_SEAT_SIZE,
            round_margin: DEFAULT_ROUND_MARGIN,
            edge_gap: DEFAULT_EDGE_GAP,
            round_table: Footprint::new(120.0, 120.0),
            rectangle_table: Footprint::new(160.0, 80.0),
        }
    }
}

impl SeatGeometry {
    /// Body size of a table with the given shape
    pub fn footprint(&self, shape: TableShape) -> Footprint {
        match shape {
            TableShape::Round => self.round_table,
            TableShape::Rectangle => self.rectangle_table,
        }
    }

    /// Seat anchors for a shape at its configured footprint
    pub fn anchors(&self, shape: TableShape, seat_count: u32) -> Vec<Point> {
        layout_seats(
            shape,
            seat_count,
            self.footprint(shape),
            self.seat_size,
            self.round_margin,
            self.edge_gap,
        )
    }

    pub fn anchors_for(&self, table: &Table) -> Vec<Point> {
        self.anchors(table.shape, table.seat_count)
    }

    /// Seat under a point given in the table's local coordinates
    pub fn seat_at(&self, table: &Table, local: Point) -> Option<u32> {
        hit_test_seat(&self.anchors_for(table), self.seat_size, local)
    }
}

/// Seat anchors for a table of `width` x `height` using the default margins.
///
/// Total for any seat count: zero seats yields no anchors and a single seat
/// yields one, even though tables are never created with fewer than two.
pub fn compute_seat_anchors(
    shape: TableShape,
    seat_count: u32,
    width: f64,
    height: f64,
    seat_size: f64,
) -> Vec<Point> {
    layout_seats(
        shape,
        seat_count,
        Footprint::new(width, height),
        seat_size,
        DEFAULT_ROUND_MARGIN,
        DEFAULT_EDGE_GAP,
    )
}

fn layout_seats(
    shape: TableShape,
    seat_count: u32,
    footprint: Footprint,
    seat_size: f64,
    round_margin: f64,
    edge_gap: f64,
) -> Vec<Point> {
    match shape {
        TableShape::Round => round_seats(seat_count, footprint, seat_size, round_margin),
        TableShape::Rectangle => rectangle_seats(seat_count, footprint, seat_size, edge_gap),
    }
}

/// Equal angular steps around a circle, seat 1 due east of center
fn round_seats(seat_count: u32, footprint: Footprint, seat_size: f64, margin: f64) -> Vec<Point> {
    let center = footprint.center();
    let radius = footprint.width / 2.0 + margin;
    let half = seat_size / 2.0;

    (0..seat_count)
        .map(|i| {
            let angle = TAU * f64::from(i) / f64::from(seat_count);
            Point::new(
                center.x + radius * angle.cos() - half,
                center.y + radius * angle.sin() - half,
            )
        })
        .collect()
}

/// Seats 1 and 2 centered above and below the table, the rest split across
/// the right and left sides.
///
/// The right side is filled first and takes the odd seat. Right-side seats run
/// top to bottom and left-side seats bottom to top, so numbering goes clockwise.
/// Seats on a side are spaced `height / (n + 1)` apart, never flush with a corner.
fn rectangle_seats(seat_count: u32, footprint: Footprint, seat_size: f64, gap: f64) -> Vec<Point> {
    let Footprint { width, height } = footprint;
    let half = seat_size / 2.0;

    let side_seats = seat_count.saturating_sub(2);
    let left_count = side_seats / 2;
    let right_count = left_count + side_seats % 2;

    let mut anchors = Vec::with_capacity(seat_count as usize);

    if seat_count >= 1 {
        anchors.push(Point::new(width / 2.0 - half, -seat_size - gap));
    }
    if seat_count >= 2 {
        anchors.push(Point::new(width / 2.0 - half, height + gap));
    }

    let right_spacing = height / f64::from(right_count + 1);
    for k in 1..=right_count {
        anchors.push(Point::new(width + gap, right_spacing * f64::from(k) - half));
    }

    let left_spacing = height / f64::from(left_count + 1);
    for k in 1..=left_count {
        anchors.push(Point::new(
            -seat_size - gap,
            height - left_spacing * f64::from(k) - half,
        ));
    }

    anchors
}

/// Seat whose square footprint contains `point`.
///
/// When footprints overlap the highest-numbered seat wins, matching draw order.
pub fn hit_test_seat(anchors: &[Point], seat_size: f64, point: Point) -> Option<u32> {
    anchors
        .iter()
        .rposition(|a| {
            point.x >= a.x && point.x <= a.x + seat_size && point.y >= a.y && point.y <= a.y + seat_size
        })
        .map(|i| i as u32 + 1)
}
