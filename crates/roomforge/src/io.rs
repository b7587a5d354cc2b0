//! Reading inputs and configuration from disk, and table output.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use roomforge_config::{ConfigError, EngineConfig};
use roomforge_core::domain::AssignmentInput;
use roomforge_core::{RoomForgeError, CORRIDORS};
use thiserror::Error;
use tracing::debug;

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "roomforge.toml";

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] RoomForgeError),

    #[error("Failed to encode result: {0}")]
    Output(#[from] serde_json::Error),
}

/// Reads an input snapshot from a JSON file.
pub fn load_input(path: impl AsRef<Path>) -> Result<AssignmentInput, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the engine configuration.
///
/// An explicit path must exist. Without one, `dir/roomforge.toml` is used
/// when present, else the defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<EngineConfig, Error> {
    if let Some(path) = explicit {
        debug!(event = "config_loaded", path = %path.display());
        return Ok(EngineConfig::load(path)?);
    }

    let fallback = dir.join(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        debug!(event = "config_loaded", path = %fallback.display());
        Ok(EngineConfig::load(&fallback)?)
    } else {
        debug!(event = "config_default");
        Ok(EngineConfig::default())
    }
}

/// Renders the corridor table as aligned plain text.
pub fn corridor_table() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<9}{:<6}{:<7}{:<10}{}",
        "CORRIDOR", "SIDE", "FLOOR", "ROOMS", "STORAGE"
    );
    for c in &CORRIDORS {
        let rooms = format!("{}-{}", c.first_room, c.last_room);
        let storage = if c.has_storage { "yes" } else { "no" };
        let _ = writeln!(
            out,
            "{:<9}{:<6}{:<7}{:<10}{}",
            c.id,
            c.side.to_string(),
            c.floor,
            rooms,
            storage
        );
    }
    out
}
