//! Channel lineup: which station and logo each channel number shows.
//!
//! The television only knows channel indices. The lineup is the lookup
//! table the presentation layer uses to turn an index into something to
//! display. A built-in lineup is always available; a JSON file can
//! replace it.
//!
//! Structure:
//! - Pure functions: defaults, lookup, path computation
//! - Effect functions: reading the lineup file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::television::Television;

/// Number of entries a lineup must have, one per channel.
pub const CHANNEL_COUNT: usize = Television::MAX_CHANNEL as usize + 1;

/// Lineup filename within the config directory.
const LINEUP_FILENAME: &str = "lineup.json";

/// Errors loading a lineup file.
#[derive(Debug, Error)]
pub enum LineupError {
    #[error("cannot read lineup {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid lineup {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("lineup {path} has {found} channels, expected {expected}")]
    WrongLength {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// One station in the lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEntry {
    /// Station name shown next to the channel number.
    pub name: String,
    /// Logo image for the station.
    pub asset: PathBuf,
}

impl ChannelEntry {
    pub fn new(name: impl Into<String>, asset: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            asset: asset.into(),
        }
    }
}

/// Channel index → station table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineup {
    entries: Vec<ChannelEntry>,
}

impl Default for Lineup {
    fn default() -> Self {
        Self {
            entries: vec![
                ChannelEntry::new("ESPN", "espn_logo.png"),
                ChannelEntry::new("CNN", "cnn_logo.png"),
                ChannelEntry::new("CN", "cn_logo.png"),
                ChannelEntry::new("CBS", "cbs_logo.png"),
            ],
        }
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

impl Lineup {
    /// Station for a channel, `None` if the index is out of range.
    pub fn entry(&self, channel: u8) -> Option<&ChannelEntry> {
        self.entries.get(channel as usize)
    }

    /// All stations, indexed by channel.
    pub fn entries(&self) -> &[ChannelEntry] {
        &self.entries
    }

    /// Parse a lineup from JSON text. `origin` is only used in errors.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, LineupError> {
        let entries: Vec<ChannelEntry> =
            serde_json::from_str(json).map_err(|source| LineupError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;

        if entries.len() != CHANNEL_COUNT {
            return Err(LineupError::WrongLength {
                path: origin.to_path_buf(),
                expected: CHANNEL_COUNT,
                found: entries.len(),
            });
        }

        Ok(Self { entries })
    }
}

/// Returns the default lineup file location.
///
/// On Linux: ~/.config/tv-remote/lineup.json
pub fn default_lineup_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tv-remote")
        .join(LINEUP_FILENAME)
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

impl Lineup {
    /// Read a lineup file.
    pub fn load(path: &Path) -> Result<Self, LineupError> {
        let json = fs::read_to_string(path).map_err(|source| LineupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lineup = Self::from_json(&json, path)?;
        info!(path = %path.display(), "loaded channel lineup");
        Ok(lineup)
    }

    /// Pick the lineup to use.
    ///
    /// An explicit path must load. Otherwise the file at `fallback` is used
    /// if present, and the built-in lineup if not.
    pub fn resolve(explicit: Option<&Path>, fallback: &Path) -> Result<Self, LineupError> {
        match explicit {
            Some(path) => Self::load(path),
            None if fallback.exists() => Self::load(fallback),
            None => {
                debug!(path = %fallback.display(), "no lineup file, using built-in lineup");
                Ok(Self::default())
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
