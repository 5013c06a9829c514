//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::config::MIN_SEATS;
use crate::models::{LayoutState, Table};

/// Validate that a table's state is internally consistent
pub fn assert_table_invariants(table: &Table) {
    debug_assert!(
        table.seat_count >= MIN_SEATS,
        "Table {} has {} seats, minimum is {}",
        table.id,
        table.seat_count,
        MIN_SEATS
    );

    // Every occupied seat must exist on the table
    debug_assert!(
        table.guests.keys().all(|seat| table.has_seat(*seat)),
        "Table {} has guests outside seats 1..={}: {:?}",
        table.id,
        table.seat_count,
        table.guests.keys().collect::<Vec<_>>()
    );

    debug_assert!(
        table.position.x >= 0.0 && table.position.y >= 0.0,
        "Table {} has negative position {:?}",
        table.id,
        table.position
    );
}

/// Validate the whole layout after a mutation
pub fn assert_layout_invariants(state: &LayoutState) {
    for table in &state.tables {
        assert_table_invariants(table);
    }

    let mut ids = HashSet::with_capacity(state.tables.len());
    debug_assert!(
        state.tables.iter().all(|t| ids.insert(t.id)),
        "Layout contains duplicate table ids"
    );

    // Counter starts at 1 and grows once per table ever added
    debug_assert!(
        state.next_table_number as usize > state.tables.len(),
        "Table counter {} is behind {} tables",
        state.next_table_number,
        state.tables.len()
    );

    let stats = state.statistics();
    debug_assert!(
        stats.guests_placed + stats.seats_remaining == stats.total_seats,
        "Statistics do not add up: {:?}",
        stats
    );
}
