//! tv-remote: a television remote-control simulator.

pub mod lineup;
pub mod report;
pub mod television;
pub mod tui;
pub mod types;
