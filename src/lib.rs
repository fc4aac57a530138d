//! nerv-theme: the NERV color theme for ratatui, and a demo dashboard.

pub mod builtin;
pub mod color;
pub mod fallback;
pub mod loader;
pub mod registry;
pub mod report;
pub mod sample;
pub mod stylesheet;
pub mod theme;
pub mod tui;
pub mod types;
