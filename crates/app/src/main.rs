//! Seatplan - event seating chart planner
//!
//! Headless front-end: reads layout commands as JSON lines on stdin and
//! answers on stdout. Logs go to stderr.
//!
//! Usage: `seatplan [CONFIG_PATH]`

use std::io;
use std::path::PathBuf;

use seatplan_core::{ConfigError, LayoutConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod protocol;
mod session;
mod state;
mod viewmodel;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Seatplan");

    let config = match load_config(std::env::args().nth(1).map(PathBuf::from)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = state::AppState::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = session::run(&app_state, stdin.lock(), stdout.lock()) {
        tracing::error!("Session failed: {}", e);
        std::process::exit(1);
    }
}

/// An explicit path must exist; the platform default may be absent
fn load_config(explicit: Option<PathBuf>) -> Result<LayoutConfig, ConfigError> {
    match explicit {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration");
            LayoutConfig::load(&path)
        }
        None => {
            let path = LayoutConfig::default_path()?;
            tracing::debug!(path = %path.display(), "Looking for configuration");
            LayoutConfig::load_or_default(&path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        assert!(load_config(Some(missing)).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("seatplan.toml");
        std::fs::write(&path, "[placement]\nstagger = 30.0\n").unwrap();

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.placement.stagger, 30.0);
    }
}
