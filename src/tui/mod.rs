//! TUI module for the interactive screen.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Focus, Action)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal lifecycle, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
