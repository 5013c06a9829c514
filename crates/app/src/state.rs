//! Application state management
//!
//! The layout store and the view context live behind mutexes so that every
//! store operation runs to completion before the next one starts.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use seatplan_core::{
    Guest, LayoutConfig, LayoutStore, Point, Result, Table, TableId, TableShape,
};

use crate::viewmodel::{DragTracker, ViewContext};

/// Main application state
pub struct AppState {
    pub store: Arc<Mutex<LayoutStore>>,
    pub view: Arc<Mutex<ViewContext>>,
    pub drag: Arc<Mutex<DragTracker>>,
}

/// Lock a mutex, recovering the data if a previous holder panicked
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AppState {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(LayoutStore::new(config))),
            view: Arc::new(Mutex::new(ViewContext::new())),
            drag: Arc::new(Mutex::new(DragTracker::new())),
        }
    }

    /// Add a table and close the table creator
    pub fn add_table(&self, shape: TableShape, seats: u32) -> Result<TableId> {
        let id = lock(&self.store).add_table(shape, seats)?;
        lock(&self.view).close_table_creator();
        Ok(id)
    }

    /// Save a guest into the currently selected seat, then clear the selection
    pub fn assign_selected_seat(&self, guest: Guest) -> Result<bool> {
        let Some(selected) = lock(&self.view).selected_seat else {
            return Ok(false);
        };

        let applied = lock(&self.store).assign_guest(selected.table_id, selected.seat, guest)?;
        lock(&self.view).clear_selection();
        Ok(applied)
    }

    /// Clear the currently selected seat, then the selection itself
    pub fn remove_selected_guest(&self) -> Option<Guest> {
        let selected = lock(&self.view).selected_seat?;
        let removed = lock(&self.store).remove_guest(selected.table_id, selected.seat);
        lock(&self.view).clear_selection();
        removed
    }

    /// Commit an inline table number edit
    pub fn finish_renumber(&self, table_id: TableId, number: u32) -> bool {
        let applied = lock(&self.store).renumber_table(table_id, number);
        lock(&self.view).finish_number_edit();
        applied
    }

    pub fn remove_table(&self, table_id: TableId) -> Option<Table> {
        let removed = lock(&self.store).remove_table(table_id);
        lock(&self.view).forget_table(table_id);

        let mut drag = lock(&self.drag);
        if drag.dragging() == Some(table_id) {
            drag.end();
        }
        removed
    }

    /// Pointer pressed on a table
    pub fn drag_begin(&self, table_id: TableId, pointer: Point) -> bool {
        let Some(position) = lock(&self.store).table(table_id).map(|t| t.position) else {
            return false;
        };
        let view = lock(&self.view);
        lock(&self.drag).begin(&view, table_id, pointer, position)
    }

    /// Pointer moved during a drag; repositions the table
    pub fn drag_move(&self, pointer: Point) -> Option<Point> {
        let update = {
            let view = lock(&self.view);
            lock(&self.drag).update(&view, pointer)
        };
        let (table_id, position) = update?;

        if lock(&self.store).reposition(table_id, position.x, position.y) {
            Some(position)
        } else {
            // table vanished mid-drag
            lock(&self.drag).end();
            None
        }
    }

    pub fn drag_end(&self) -> Option<TableId> {
        lock(&self.drag).end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(LayoutConfig::default())
    }

    #[test]
    fn test_add_table_closes_creator() {
        let state = app();
        assert!(lock(&state.view).open_table_creator());

        let id = state.add_table(TableShape::Round, 8).unwrap();
        assert_eq!(lock(&state.store).table(id).unwrap().number, 1);
        assert!(!lock(&state.view).show_table_creator);
    }

    #[test]
    fn test_assign_selected_seat() {
        let state = app();
        let id = state.add_table(TableShape::Round, 8).unwrap();

        // nothing selected
        assert!(!state.assign_selected_seat(Guest::new("Jane", "Doe")).unwrap());

        lock(&state.view).select_seat(id, 4);
        assert!(state.assign_selected_seat(Guest::new("Jane", "Doe")).unwrap());
        assert!(lock(&state.view).selected_seat.is_none());
        assert!(lock(&state.store).table(id).unwrap().guest(4).is_some());

        lock(&state.view).select_seat(id, 4);
        assert!(state.remove_selected_guest().is_some());
        assert!(lock(&state.store).table(id).unwrap().guest(4).is_none());
    }

    #[test]
    fn test_invalid_guest_keeps_selection() {
        let state = app();
        let id = state.add_table(TableShape::Round, 8).unwrap();
        lock(&state.view).select_seat(id, 1);

        assert!(state.assign_selected_seat(Guest::new(" ", "Doe")).is_err());
        assert!(lock(&state.view).selected_seat.is_some());
    }

    #[test]
    fn test_drag_moves_table() {
        let state = app();
        let id = state.add_table(TableShape::Rectangle, 6).unwrap();

        assert!(state.drag_begin(id, Point::new(210.0, 210.0)));
        assert_eq!(
            state.drag_move(Point::new(110.0, 60.0)),
            Some(Point::new(100.0, 50.0))
        );
        assert_eq!(state.drag_end(), Some(id));
        assert_eq!(
            lock(&state.store).table(id).unwrap().position,
            Point::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_removed_table_ends_drag() {
        let state = app();
        let id = state.add_table(TableShape::Round, 8).unwrap();
        lock(&state.view).select_seat(id, 2);
        state.drag_begin(id, Point::new(200.0, 200.0));

        assert!(state.remove_table(id).is_some());
        assert!(lock(&state.view).selected_seat.is_none());
        assert!(state.drag_move(Point::new(300.0, 300.0)).is_none());
    }

    #[test]
    fn test_finish_renumber() {
        let state = app();
        let id = state.add_table(TableShape::Round, 8).unwrap();
        lock(&state.view).begin_number_edit(id);

        assert!(state.finish_renumber(id, 12));
        assert!(lock(&state.view).editing_table.is_none());
        assert_eq!(lock(&state.store).table(id).unwrap().number, 12);
    }
}
