//! Layout store
//!
//! Owns the authoritative set of tables and guest assignments. Every method
//! runs to completion synchronously; callers sharing a store across threads
//! must serialize access themselves (the app wraps it in a mutex).
//!
//! Operations that name a table which no longer exists are dropped and
//! report that through their return value.

use std::collections::HashSet;

use tracing::instrument;

use crate::config::{LayoutConfig, MIN_SEATS};
use crate::error::{Result, ValidationError};
use crate::invariants::assert_layout_invariants;
use crate::models::{Guest, LayoutState, Point, Statistics, Table, TableId, TableShape};
use crate::roster::{self, RosterRow};

/// In-memory layout store
#[derive(Debug, Clone)]
pub struct LayoutStore {
    state: LayoutState,
    config: LayoutConfig,
}

impl LayoutStore {
    /// Create an empty layout
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            state: LayoutState::new(),
            config,
        }
    }

    /// Rebuild a store from a previously taken snapshot.
    ///
    /// The snapshot is checked table by table; a broken one is rejected whole.
    #[instrument(skip(state, config), fields(tables = state.tables.len()))]
    pub fn restore(mut state: LayoutState, config: LayoutConfig) -> Result<Self> {
        let mut ids = HashSet::with_capacity(state.tables.len());
        for table in &mut state.tables {
            if !ids.insert(table.id) {
                return Err(ValidationError::DuplicateTableId(table.id).into());
            }

            if table.seat_count < MIN_SEATS {
                return Err(ValidationError::SeatCountTooLow {
                    seat_count: table.seat_count,
                    minimum: MIN_SEATS,
                }
                .into());
            }

            if let Some((&seat, _)) = table.guests.iter().find(|(seat, _)| !table.has_seat(**seat)) {
                return Err(ValidationError::GuestOutsideTable {
                    table_number: table.number,
                    seat,
                    seat_count: table.seat_count,
                }
                .into());
            }

            table.position = table.position.clamped_non_negative();
        }

        // Keep the counter ahead of every table, whatever the snapshot says.
        // A table numbered u32::MAX pins the counter there and add_table refuses.
        let floor = (state.tables.len() as u32).saturating_add(1);
        let past_max = state
            .tables
            .iter()
            .map(|t| t.number.saturating_add(1))
            .max()
            .unwrap_or(1);
        state.next_table_number = state.next_table_number.max(floor).max(past_max);

        assert_layout_invariants(&state);
        tracing::info!(next_number = state.next_table_number, "Layout restored");

        Ok(Self { state, config })
    }

    /// Copy of the current state, suitable for serializing
    pub fn snapshot(&self) -> LayoutState {
        self.state.clone()
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Tables in insertion order
    pub fn tables(&self) -> &[Table] {
        &self.state.tables
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.state.table(id)
    }

    /// Add a table at the next staggered default position
    pub fn add_table(&mut self, shape: TableShape, seat_count: u32) -> Result<TableId> {
        if seat_count < MIN_SEATS {
            return Err(ValidationError::SeatCountTooLow {
                seat_count,
                minimum: MIN_SEATS,
            }
            .into());
        }

        let number = self.state.next_table_number;
        let Some(next_number) = number.checked_add(1) else {
            tracing::warn!(number, "Table number counter exhausted");
            return Err(ValidationError::TableNumbersExhausted.into());
        };
        let position = self.config.placement.position_for(self.state.tables.len());
        let table = Table::new(number, shape, seat_count, position);
        let id = table.id;

        self.state.tables.push(table);
        self.state.next_table_number = next_number;

        tracing::info!(table_id = %id, number, %shape, seat_count, "Table added");
        assert_layout_invariants(&self.state);
        Ok(id)
    }

    /// Move a table. Coordinates are clamped into the positive quadrant.
    ///
    /// Returns `false` when the table is gone.
    pub fn reposition(&mut self, id: TableId, x: f64, y: f64) -> bool {
        let Some(table) = self.state.table_mut(id) else {
            tracing::warn!(table_id = %id, "Dropping reposition for missing table");
            return false;
        };

        table.position = Point::new(x, y).clamped_non_negative();
        tracing::trace!(table_id = %id, x = table.position.x, y = table.position.y, "Table moved");
        true
    }

    /// Seat a guest, replacing whoever sat there before.
    ///
    /// Fails without touching the layout if a name is blank or the seat does
    /// not exist on the table. Returns `Ok(false)` when the table is gone.
    pub fn assign_guest(&mut self, id: TableId, seat: u32, guest: Guest) -> Result<bool> {
        guest.validate()?;

        let Some(table) = self.state.table_mut(id) else {
            tracing::warn!(table_id = %id, seat, "Dropping guest assignment for missing table");
            return Ok(false);
        };

        if !table.has_seat(seat) {
            return Err(ValidationError::SeatOutOfRange {
                seat,
                seat_count: table.seat_count,
            }
            .into());
        }

        let replaced = table.guests.insert(seat, guest).is_some();
        tracing::debug!(table_id = %id, seat, replaced, "Guest assigned");

        assert_layout_invariants(&self.state);
        Ok(true)
    }

    /// Clear a seat, returning the guest who sat there
    pub fn remove_guest(&mut self, id: TableId, seat: u32) -> Option<Guest> {
        let Some(table) = self.state.table_mut(id) else {
            tracing::warn!(table_id = %id, seat, "Dropping guest removal for missing table");
            return None;
        };
        let removed = table.guests.remove(&seat);

        if removed.is_some() {
            tracing::debug!(table_id = %id, seat, "Guest removed");
        }
        removed
    }

    /// Change a table's display number. Duplicates are allowed.
    pub fn renumber_table(&mut self, id: TableId, number: u32) -> bool {
        let Some(table) = self.state.table_mut(id) else {
            tracing::warn!(table_id = %id, number, "Dropping renumber for missing table");
            return false;
        };

        let previous = std::mem::replace(&mut table.number, number);
        tracing::debug!(table_id = %id, previous, number, "Table renumbered");
        true
    }

    /// Set free-text notes on a table; blank text clears them
    pub fn set_description(&mut self, id: TableId, text: impl Into<String>) -> bool {
        let Some(table) = self.state.table_mut(id) else {
            tracing::warn!(table_id = %id, "Dropping description update for missing table");
            return false;
        };

        let text = text.into();
        table.description = if text.trim().is_empty() { None } else { Some(text) };
        tracing::debug!(table_id = %id, "Table description updated");
        true
    }

    /// Remove a table together with everyone seated at it.
    ///
    /// Its number is not handed out again by the counter.
    pub fn remove_table(&mut self, id: TableId) -> Option<Table> {
        let index = self.state.tables.iter().position(|t| t.id == id)?;
        let table = self.state.tables.remove(index);

        tracing::info!(
            table_id = %id,
            number = table.number,
            guests = table.guests.len(),
            "Table removed"
        );
        assert_layout_invariants(&self.state);
        Some(table)
    }

    /// Add a custom entree option
    pub fn add_entree_option(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyEntree.into());
        }

        if self.state.custom_entrees.iter().any(|e| e == name) {
            tracing::debug!(entree = name, "Entree option already present");
            return Err(ValidationError::DuplicateEntree(name.to_string()).into());
        }

        self.state.custom_entrees.push(name.to_string());
        tracing::info!(entree = name, "Entree option added");
        Ok(())
    }

    /// Remove a custom entree option; removing an absent one is fine
    pub fn remove_entree_option(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.state.custom_entrees.len();
        self.state.custom_entrees.retain(|e| e != name);

        let removed = self.state.custom_entrees.len() != before;
        if removed {
            tracing::info!(entree = name, "Entree option removed");
        }
        removed
    }

    pub fn custom_entrees(&self) -> &[String] {
        &self.state.custom_entrees
    }

    /// Options for the guest form: configured defaults, then custom ones
    pub fn entree_choices(&self) -> Vec<&str> {
        let mut choices: Vec<&str> = Vec::new();
        for option in self
            .config
            .entrees
            .defaults
            .iter()
            .chain(self.state.custom_entrees.iter())
        {
            if !choices.contains(&option.as_str()) {
                choices.push(option);
            }
        }
        choices
    }

    pub fn set_expected_guests(&mut self, count: u32) {
        self.state.expected_guests = count;
    }

    /// Aggregate counters, recomputed on every call
    pub fn compute_statistics(&self) -> Statistics {
        self.state.statistics()
    }

    /// Table numbers used by more than one table, ascending
    pub fn duplicate_table_numbers(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = self.state.tables.iter().map(|t| t.number).collect();
        numbers.sort_unstable();

        let mut duplicates: Vec<u32> = numbers
            .windows(2)
            .filter(|w| w[0] == w[1])
            .map(|w| w[0])
            .collect();
        duplicates.dedup();
        duplicates
    }

    /// Seat anchors for a table, in its local coordinates
    pub fn seat_anchors(&self, id: TableId) -> Option<Vec<Point>> {
        self.table(id).map(|t| self.config.geometry.anchors_for(t))
    }

    /// One row per occupied seat, for export
    pub fn roster(&self) -> Vec<RosterRow> {
        roster::roster(&self.state)
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
