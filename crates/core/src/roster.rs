//! Guest roster rows for exporters
//!
//! A flat, read-only view of who sits where. Turning rows into CSV or any
//! other format is left to the exporter.

use serde::{Deserialize, Serialize};

use crate::models::LayoutState;

/// One occupied seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    pub table_number: u32,
    pub seat: u32,
    pub first_name: String,
    pub last_name: String,
    pub entree: String,
    pub allergy_info: String,
}

impl RosterRow {
    /// Column titles, in field order
    pub const HEADERS: [&'static str; 6] = [
        "Table Number",
        "Seat Number",
        "First Name",
        "Last Name",
        "Entree",
        "Allergy Info",
    ];

    /// Field values as strings, in `HEADERS` order
    pub fn fields(&self) -> [String; 6] {
        [
            self.table_number.to_string(),
            self.seat.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.entree.clone(),
            self.allergy_info.clone(),
        ]
    }
}

/// Rows for every occupied seat: tables in layout order, seats ascending
pub fn roster(state: &LayoutState) -> Vec<RosterRow> {
    state
        .tables
        .iter()
        .flat_map(|table| {
            table.guests.iter().map(move |(&seat, guest)| RosterRow {
                table_number: table.number,
                seat,
                first_name: guest.first_name.clone(),
                last_name: guest.last_name.clone(),
                entree: guest.entree.clone(),
                allergy_info: guest.allergy_info(),
            })
        })
        .collect()
}
