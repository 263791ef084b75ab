//! TUI state algebra: pure types, zero effects.
//!
//! The television itself is the model. The presentation layer adds only
//! the lineup it renders against and a quit flag; everything shown on
//! screen is derived from these on every frame.

use crossterm::event::KeyEvent;

use crate::lineup::Lineup;
use crate::television::Television;
use crate::types::Button;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// The key reader thread is the only producer. Resizes carry no data:
/// they just wake the loop so the next frame is laid out again.
#[derive(Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The simulated set. Only `update` changes it.
    pub tv: Television,

    /// Channel → station table used for rendering.
    pub lineup: Lineup,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// A fresh, switched-off television.
    pub fn new(lineup: Lineup) -> Self {
        App {
            tv: Television::new(),
            lineup,
            should_quit: false,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A remote button.
    Press(Button),
    /// Drag the volume slider to a position.
    SetVolume(u8),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Follows the Elm/TEA pattern: `update` returns the next model and the
/// effects boundary re-renders it.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Re-render with this television state.
    Render(Television),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
