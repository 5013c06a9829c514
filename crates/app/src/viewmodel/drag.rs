//! Table drag tracking
//!
//! Turns pointer-down/move/up into table positions. The tracker only does the
//! arithmetic; every position it yields goes to `LayoutStore::reposition`.

use seatplan_core::{Point, TableId};

use super::ViewContext;

#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    table_id: TableId,
    /// Pointer position relative to the table's top-left corner, canvas space
    offset: Point,
}

/// Tracks at most one table being dragged
#[derive(Debug, Default)]
pub struct DragTracker {
    active: Option<ActiveDrag>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed on a table. Only starts a drag in edit mode.
    pub fn begin(
        &mut self,
        view: &ViewContext,
        table_id: TableId,
        pointer: Point,
        table_position: Point,
    ) -> bool {
        if !view.edit_mode {
            return false;
        }

        let (x, y) = view.to_canvas(pointer.x, pointer.y);
        self.active = Some(ActiveDrag {
            table_id,
            offset: Point::new(x - table_position.x, y - table_position.y),
        });
        tracing::trace!(table_id = %table_id, "Drag started");
        true
    }

    /// Pointer moved; yields the table's new position if a drag is active
    pub fn update(&self, view: &ViewContext, pointer: Point) -> Option<(TableId, Point)> {
        let drag = self.active?;
        let (x, y) = view.to_canvas(pointer.x, pointer.y);
        let position = Point::new(x - drag.offset.x, y - drag.offset.y).clamped_non_negative();
        Some((drag.table_id, position))
    }

    /// Pointer released; returns the table that was being dragged
    pub fn end(&mut self) -> Option<TableId> {
        self.active.take().map(|d| d.table_id)
    }

    pub fn dragging(&self) -> Option<TableId> {
        self.active.map(|d| d.table_id)
    }
}
