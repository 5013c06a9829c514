//! Layout configuration
//!
//! Seat geometry, table placement and the built-in entree list, loaded from
//! `seatplan.toml`. Every field has a default, so a missing file or a partial
//! file are both fine.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::SeatGeometry;
use crate::models::Point;

/// Smallest table a planner can create
pub const MIN_SEATS: u32 = 2;

const CONFIG_FILE_NAME: &str = "seatplan.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub geometry: SeatGeometry,
    pub placement: PlacementConfig,
    pub entrees: EntreeConfig,
}

/// Where new tables land on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Position of the first table
    pub origin: Point,
    /// Added to both axes once per table already on the canvas
    pub stagger: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(200.0, 200.0),
            stagger: 50.0,
        }
    }
}

impl PlacementConfig {
    /// Default position for a table added when `existing` tables are present
    pub fn position_for(&self, existing: usize) -> Point {
        let offset = self.stagger * existing as f64;
        Point::new(self.origin.x + offset, self.origin.y + offset)
    }
}

/// Entree options offered before any custom ones are added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntreeConfig {
    pub defaults: Vec<String>,
}

impl Default for EntreeConfig {
    fn default() -> Self {
        Self {
            defaults: [
                "Beef Tenderloin",
                "Grilled Salmon",
                "Chicken Breast",
                "Vegetarian Pasta",
                "Vegan Buddha Bowl",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl LayoutConfig {
    /// Parse configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Platform config location, e.g. `~/.config/seatplan/seatplan.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("dev", "onyx", "seatplan").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Reject sizes the seat calculator cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.geometry;

        if !(g.seat_size.is_finite() && g.seat_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "geometry.seat_size must be positive and finite, got {}",
                g.seat_size
            )));
        }

        for (name, footprint) in [
            ("round_table", g.round_table),
            ("rectangle_table", g.rectangle_table),
        ] {
            let finite = footprint.width.is_finite() && footprint.height.is_finite();
            if !(finite && footprint.width > 0.0 && footprint.height > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "geometry.{} must have positive, finite width and height",
                    name
                )));
            }
        }

        for (name, value) in [
            ("geometry.round_margin", g.round_margin),
            ("geometry.edge_gap", g.edge_gap),
            ("placement.stagger", self.placement.stagger),
            ("placement.origin.x", self.placement.origin.x),
            ("placement.origin.y", self.placement.origin.y),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be finite and not negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
