//! The television state machine.
//!
//! Four fields, six transitions. Every transition except [`Television::power`]
//! is gated on the power flag: while the set is off, calls are no-ops and
//! the remembered mute/volume/channel survive until it comes back on.
//!
//! Bounds are enforced by the transitions themselves (channels wrap,
//! volume clamps), so no operation on a constructed value can fail.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::trace;

use crate::types::Button;

/// Rejected field values for [`Television::with_state`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TelevisionError {
    #[error("volume {0} out of range ({min}..={max})", min = Television::MIN_VOLUME, max = Television::MAX_VOLUME)]
    VolumeOutOfRange(u8),

    #[error("channel {0} out of range ({min}..={max})", min = Television::MIN_CHANNEL, max = Television::MAX_CHANNEL)]
    ChannelOutOfRange(u8),
}

/// A simulated television set.
///
/// Fields are private: the only way to change them is through the
/// transition methods, which keep `volume` in `0..=4` and `channel` in
/// `0..=3`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Television {
    power: bool,
    muted: bool,
    volume: u8,
    channel: u8,
}

impl Television {
    pub const MIN_VOLUME: u8 = 0;
    pub const MAX_VOLUME: u8 = 4;
    pub const MIN_CHANNEL: u8 = 0;
    pub const MAX_CHANNEL: u8 = 3;

    /// A television that is off, unmuted, on channel 0 at volume 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a television in an arbitrary state, validating the bounds.
    pub fn with_state(
        power: bool,
        muted: bool,
        volume: u8,
        channel: u8,
    ) -> Result<Self, TelevisionError> {
        if volume > Self::MAX_VOLUME {
            return Err(TelevisionError::VolumeOutOfRange(volume));
        }
        if channel > Self::MAX_CHANNEL {
            return Err(TelevisionError::ChannelOutOfRange(channel));
        }
        Ok(Self {
            power,
            muted,
            volume,
            channel,
        })
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Toggle power. Never touches mute, volume or channel.
    pub fn power(&mut self) {
        self.power = !self.power;
        trace!(power = self.power, "power toggled");
    }

    pub fn mute(&mut self) {
        if self.power {
            self.muted = !self.muted;
            trace!(muted = self.muted, "mute toggled");
        }
    }

    /// Next channel, wrapping from the last back to the first.
    pub fn channel_up(&mut self) {
        if self.power {
            self.channel = if self.channel == Self::MAX_CHANNEL {
                Self::MIN_CHANNEL
            } else {
                self.channel + 1
            };
            trace!(channel = self.channel, "channel up");
        }
    }

    /// Previous channel, wrapping from the first to the last.
    pub fn channel_down(&mut self) {
        if self.power {
            self.channel = if self.channel == Self::MIN_CHANNEL {
                Self::MAX_CHANNEL
            } else {
                self.channel - 1
            };
            trace!(channel = self.channel, "channel down");
        }
    }

    /// Raise volume by one, clamped at the maximum. Always unmutes.
    pub fn volume_up(&mut self) {
        if self.power {
            self.muted = false;
            if self.volume < Self::MAX_VOLUME {
                self.volume += 1;
            }
            trace!(volume = self.volume, "volume up");
        }
    }

    /// Lower volume by one, clamped at the minimum. Always unmutes.
    pub fn volume_down(&mut self) {
        if self.power {
            self.muted = false;
            if self.volume > Self::MIN_VOLUME {
                self.volume -= 1;
            }
            trace!(volume = self.volume, "volume down");
        }
    }

    /// Apply a single remote button.
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Power => self.power(),
            Button::Mute => self.mute(),
            Button::ChannelUp => self.channel_up(),
            Button::ChannelDown => self.channel_down(),
            Button::VolumeUp => self.volume_up(),
            Button::VolumeDown => self.volume_down(),
        }
    }

    /// Drag the volume slider to `target`.
    ///
    /// Steps through `volume_up`/`volume_down`, so moving the slider while
    /// muted unmutes. Targets above the maximum stop at the maximum.
    /// No-op while off.
    pub fn set_volume(&mut self, target: u8) {
        if !self.power {
            return;
        }
        let target = target.min(Self::MAX_VOLUME);
        while self.volume < target {
            self.volume_up();
        }
        while self.volume > target {
            self.volume_down();
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn is_on(&self) -> bool {
        self.power
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Power = {}, Channel = {}, Volume = {}",
            self.power, self.channel, self.volume
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
