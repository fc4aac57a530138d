//! TUI demo dashboard.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Action, Transition)
//! - `update`: Action → Transition, applied to the App
//! - `theme`: Style sheet resolved against the active theme
//! - `view`: Pure rendering
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
