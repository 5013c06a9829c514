//! Error types for Seatplan Core

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TableId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Structurally invalid input from a caller.
///
/// Operations failing with one of these leave the layout untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Guest first name is required")]
    EmptyFirstName,

    #[error("Guest last name is required")]
    EmptyLastName,

    #[error("A table needs at least {minimum} seats, got {seat_count}")]
    SeatCountTooLow { seat_count: u32, minimum: u32 },

    #[error("Seat {seat} does not exist on a table with {seat_count} seats")]
    SeatOutOfRange { seat: u32, seat_count: u32 },

    #[error("Entree option '{0}' already exists")]
    DuplicateEntree(String),

    #[error("Entree option name is empty")]
    EmptyEntree,

    #[error("Table id {0} appears more than once")]
    DuplicateTableId(TableId),

    #[error("Table number counter has reached its maximum")]
    TableNumbersExhausted,

    #[error("Table {table_number} has a guest at seat {seat} but only {seat_count} seats")]
    GuestOutsideTable {
        table_number: u32,
        seat: u32,
        seat_count: u32,
    },
}

/// Error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),

    #[error("Could not determine config directory")]
    NoConfigDir,
}
