//! Chart view context
//!
//! Session-only UI state: edit mode, zoom, and what is selected or being
//! edited. None of it belongs to the layout itself.

use seatplan_core::TableId;
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 4.0;

/// A seat picked for guest assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedSeat {
    pub table_id: TableId,
    pub seat: u32,
}

/// Ephemeral view state for one chart session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewContext {
    pub edit_mode: bool,
    pub zoom: f64,
    pub selected_seat: Option<SelectedSeat>,
    /// Table whose number is being edited inline
    pub editing_table: Option<TableId>,
    pub show_table_creator: bool,
}

impl ViewContext {
    pub fn new() -> Self {
        Self {
            edit_mode: true,
            zoom: 1.0,
            selected_seat: None,
            editing_table: None,
            show_table_creator: false,
        }
    }

    /// Leaving edit mode drops any selection or pending edit
    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
        if !enabled {
            self.selected_seat = None;
            self.editing_table = None;
            self.show_table_creator = false;
        }
    }

    pub fn toggle_edit_mode(&mut self) {
        self.set_edit_mode(!self.edit_mode);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = if zoom.is_finite() {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            1.0
        };
    }

    /// Convert a pointer position from screen space to canvas space
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (x / self.zoom, y / self.zoom)
    }

    /// Select a seat; ignored outside edit mode
    pub fn select_seat(&mut self, table_id: TableId, seat: u32) -> bool {
        if !self.edit_mode {
            return false;
        }
        self.selected_seat = Some(SelectedSeat { table_id, seat });
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_seat = None;
    }

    /// Start editing a table number inline; ignored outside edit mode
    pub fn begin_number_edit(&mut self, table_id: TableId) -> bool {
        if !self.edit_mode {
            return false;
        }
        self.editing_table = Some(table_id);
        true
    }

    pub fn finish_number_edit(&mut self) {
        self.editing_table = None;
    }

    pub fn open_table_creator(&mut self) -> bool {
        if !self.edit_mode {
            return false;
        }
        self.show_table_creator = true;
        true
    }

    pub fn close_table_creator(&mut self) {
        self.show_table_creator = false;
    }

    /// Drop references to a table that no longer exists
    pub fn forget_table(&mut self, table_id: TableId) {
        if self.selected_seat.is_some_and(|s| s.table_id == table_id) {
            self.selected_seat = None;
        }
        if self.editing_table == Some(table_id) {
            self.editing_table = None;
        }
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new()
    }
}
