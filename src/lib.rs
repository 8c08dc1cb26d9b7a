//! goaltrack: single-screen terminal goal tracker.

pub mod tracker;
pub mod tui;
pub mod types;
