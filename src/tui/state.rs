//! TUI state algebra: pure types, zero effects.
//!
//! The demo has a single screen, so the whole state is the theme registry
//! plus the sample data computed once at startup. Everything the view
//! needs is reachable from [`App`].

use crate::registry::ThemeRegistry;
use crate::sample::{harmonics, HARMONIC_SAMPLES};
use crate::stylesheet::{StyleSheet, DEMO_STYLESHEET};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Registered themes; the active one paints every frame.
    pub registry: ThemeRegistry,

    /// Style rules resolved against the active theme.
    pub sheet: StyleSheet,

    /// Sparkline samples.
    pub harmonics: Vec<u64>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Switch between nerv and the default dark theme.
    ToggleTheme,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; [`super::update::apply`] carries it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Make the named theme active.
    SwitchTheme(String),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// App over `registry`, keeping whatever theme it has active.
    pub fn new(registry: ThemeRegistry) -> Self {
        App {
            registry,
            sheet: DEMO_STYLESHEET,
            harmonics: harmonics(HARMONIC_SAMPLES),
            should_quit: false,
        }
    }

    /// Name of the theme currently painting.
    pub fn theme_name(&self) -> &str {
        self.registry.active_name()
    }
}

// ============================================================================
// TESTS
// ============================================================================
