//! Pure state transitions: (Television, Action) → Transition.
//!
//! Fully testable without a terminal. All guarding (power gating, wrap,
//! clamp) lives in [`Television`]; this layer only routes actions.

use tracing::debug;

use crate::television::Television;

use super::state::{Action, Transition};

/// Pure state transition function.
pub fn update(mut tv: Television, action: &Action) -> Transition {
    match *action {
        Action::Press(button) => {
            tv.press(button);
            debug!(%button, state = %tv, muted = tv.is_muted(), "button pressed");
            Transition::Render(tv)
        }
        Action::SetVolume(target) => {
            tv.set_volume(target);
            debug!(slider = target, state = %tv, "volume slider moved");
            Transition::Render(tv)
        }
        Action::Quit => Transition::Quit,
    }
}

// ============================================================================
// TESTS
// ============================================================================
