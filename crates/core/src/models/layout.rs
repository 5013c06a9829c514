//! Layout state - the aggregate of all tables for a session

use serde::{Deserialize, Serialize};

use super::{Table, TableId};

/// Everything the layout store owns.
///
/// Table order is insertion order, which the view layer uses as z-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub tables: Vec<Table>,
    /// Number handed to the next table added; only ever grows
    pub next_table_number: u32,
    /// Custom entree options, in the order they were added
    #[serde(default)]
    pub custom_entrees: Vec<String>,
    /// Head count the planner expects to seat
    #[serde(default)]
    pub expected_guests: u32,
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            next_table_number: 1,
            custom_entrees: Vec::new(),
            expected_guests: 0,
        }
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub(crate) fn table_mut(&mut self, id: TableId) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == id)
    }

    /// Recompute the aggregate counters from the current tables
    pub fn statistics(&self) -> Statistics {
        let total_seats: u64 = self.tables.iter().map(|t| u64::from(t.seat_count)).sum();
        let guests_placed: u64 = self.tables.iter().map(|t| t.guests.len() as u64).sum();

        Statistics {
            total_seats,
            guests_placed,
            seats_remaining: total_seats.saturating_sub(guests_placed),
            expected_guests: self.expected_guests,
        }
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived counters; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total_seats: u64,
    pub guests_placed: u64,
    pub seats_remaining: u64,
    pub expected_guests: u32,
}

impl Statistics {
    /// Expected guests that still have no seat
    pub fn guests_unplaced(&self) -> u64 {
        u64::from(self.expected_guests).saturating_sub(self.guests_placed)
    }

    /// Whether the layout has fewer seats than expected guests
    pub fn is_short_of_seats(&self) -> bool {
        u64::from(self.expected_guests) > self.total_seats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Guest, Point, TableShape};

    #[test]
    fn test_empty_statistics() {
        let state = LayoutState::new();
        assert_eq!(state.next_table_number, 1);
        assert_eq!(state.statistics(), Statistics::default());
    }

    #[test]
    fn test_statistics_sum_tables() {
        let mut state = LayoutState::new();
        let mut round = Table::new(1, TableShape::Round, 8, Point::default());
        round.guests.insert(1, Guest::new("Jane", "Doe"));
        round.guests.insert(4, Guest::new("John", "Doe"));
        state.tables.push(round);
        state
            .tables
            .push(Table::new(2, TableShape::Rectangle, 6, Point::default()));
        state.expected_guests = 20;

        let stats = state.statistics();
        assert_eq!(stats.total_seats, 14);
        assert_eq!(stats.guests_placed, 2);
        assert_eq!(stats.seats_remaining, 12);
        assert_eq!(stats.guests_unplaced(), 18);
        assert!(stats.is_short_of_seats());
    }
}
