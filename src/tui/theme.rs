//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: powered on, LCD digits
//! - Red: muted, powered off
//! - Cyan: interactive elements (keybinding hints, slider)
//! - Dim: disabled controls, de-emphasized text

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Powered on — green.
pub const STYLE_POWER_ON: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Powered off — red.
pub const STYLE_POWER_OFF: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Channel LCD digits.
pub const STYLE_LCD: Style = Style::new().fg(Color::LightGreen).add_modifier(Modifier::BOLD);

/// Mute label while muted.
pub const STYLE_MUTE_ACTIVE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Mute label while not muted.
pub const STYLE_MUTE_INACTIVE: Style = Style::new().fg(Color::White);

/// Enabled control label.
pub const STYLE_CONTROL: Style = Style::new().fg(Color::White);

/// Disabled control label.
pub const STYLE_DISABLED: Style = Style::new().fg(Color::DarkGray);

/// Volume slider fill.
pub const STYLE_SLIDER: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
