//! View models for the seating chart

mod chart;
mod drag;

pub use chart::ViewContext;
pub use drag::DragTracker;
