//! Data models for Seatplan

mod guest;
mod layout;
mod table;

pub use guest::*;
pub use layout::*;
pub use table::*;
