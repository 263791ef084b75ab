//! TUI module for the interactive remote.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Panel projection and rendering
//! - `theme`: Style constants
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
