//! Session protocol message types
//!
//! One JSON object per line in each direction.

use seatplan_core::{Guest, LayoutState, Point, RosterRow, Statistics, TableId, TableShape};
use serde::{Deserialize, Serialize};

use crate::viewmodel::ViewContext;

/// Requests read from the session input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Add a table at the next default position
    AddTable { shape: TableShape, seats: u32 },

    /// Move a table on the canvas
    Reposition { table_id: TableId, x: f64, y: f64 },

    /// Seat a guest, replacing any current occupant
    AssignGuest {
        table_id: TableId,
        seat: u32,
        guest: Guest,
    },

    /// Clear a seat
    RemoveGuest { table_id: TableId, seat: u32 },

    RenumberTable { table_id: TableId, number: u32 },

    SetDescription { table_id: TableId, text: String },

    /// Remove a table and everyone seated at it
    RemoveTable { table_id: TableId },

    AddEntree { name: String },

    RemoveEntree { name: String },

    SetExpectedGuests { count: u32 },

    /// Aggregate counters
    Statistics,

    /// One row per occupied seat
    Roster,

    /// Entree options for the guest form
    EntreeChoices,

    /// Seat anchors of a table, in table-local coordinates
    SeatAnchors { table_id: TableId },

    /// Seat under a table-local point
    SeatAt { table_id: TableId, x: f64, y: f64 },

    /// Full layout state
    Snapshot,

    /// Replace the layout with a saved state
    Restore { state: LayoutState },

    SetEditMode { enabled: bool },

    ToggleEditMode,

    SetZoom { zoom: f64 },

    /// Pick a seat for the guest form
    SelectSeat { table_id: TableId, seat: u32 },

    ClearSelection,

    /// Save the guest form into the selected seat
    SaveSelectedGuest { guest: Guest },

    /// Clear the selected seat
    RemoveSelectedGuest,

    /// Start editing a table number inline
    EditTableNumber { table_id: TableId },

    OpenTableCreator,

    CloseTableCreator,

    /// Current view context
    View,

    /// Pointer pressed on a table
    DragBegin { table_id: TableId, x: f64, y: f64 },

    /// Pointer moved while dragging
    DragMove { x: f64, y: f64 },

    /// Pointer released
    DragEnd,
}

/// Replies written to the session output, one per command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// A table was created
    TableAdded { table_id: TableId, number: u32 },

    /// Whether a mutation found its target; `false` means it was dropped
    Applied { applied: bool },

    /// A removed guest, if the seat was occupied
    GuestRemoved { guest: Option<Guest> },

    Statistics {
        #[serde(flatten)]
        statistics: Statistics,
        guests_unplaced: u64,
        duplicate_numbers: Vec<u32>,
    },

    Roster { rows: Vec<RosterRow> },

    Entrees { choices: Vec<String> },

    SeatAnchors { anchors: Vec<Point> },

    Seat { seat: Option<u32> },

    Snapshot { state: LayoutState },

    View { view: ViewContext },

    /// New table position during a drag, if it moved
    Dragged { position: Option<Point> },

    DragEnded { table_id: Option<TableId> },

    /// Input rejected; the layout is unchanged
    Error { message: String },
}

impl Response {
    pub fn error(message: impl std::fmt::Display) -> Self {
        Response::Error {
            message: message.to_string(),
        }
    }
}
