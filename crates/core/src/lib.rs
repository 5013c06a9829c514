//! Seatplan Core Library
//!
//! Seat geometry, layout state and configuration for event seating charts.

pub mod config;
pub mod error;
pub mod geometry;
pub mod invariants;
pub mod models;
pub mod roster;
pub mod store;

pub use config::{EntreeConfig, LayoutConfig, PlacementConfig, MIN_SEATS};
pub use error::{ConfigError, Error, Result, ValidationError};
pub use geometry::{compute_seat_anchors, hit_test_seat, Footprint, SeatGeometry};
pub use models::*;
pub use roster::RosterRow;
pub use store::LayoutStore;
