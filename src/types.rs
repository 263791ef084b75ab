//! Shared value types: remote buttons and output formats.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// BUTTONS
// ============================================================================

/// A button on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Button {
    Power,
    Mute,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
}

impl Button {
    /// Every button, in remote layout order.
    pub const ALL: [Button; 6] = [
        Button::Power,
        Button::Mute,
        Button::ChannelUp,
        Button::ChannelDown,
        Button::VolumeUp,
        Button::VolumeDown,
    ];

    /// Canonical name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Button::Power => "power",
            Button::Mute => "mute",
            Button::ChannelUp => "channel-up",
            Button::ChannelDown => "channel-down",
            Button::VolumeUp => "volume-up",
            Button::VolumeDown => "volume-down",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised button name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button '{0}' (expected power, mute, channel-up, channel-down, volume-up, volume-down)")]
pub struct ParseButtonError(pub String);

impl FromStr for Button {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "power" => Ok(Button::Power),
            "mute" => Ok(Button::Mute),
            "channel-up" | "ch+" => Ok(Button::ChannelUp),
            "channel-down" | "ch-" => Ok(Button::ChannelDown),
            "volume-up" | "vol+" => Ok(Button::VolumeUp),
            "volume-down" | "vol-" => Ok(Button::VolumeDown),
            _ => Err(ParseButtonError(s.to_string())),
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for status reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
