//! Per-frame styles: the demo style sheet resolved against the active theme.
//!
//! The view never names a color. It names a selector, and the painter
//! looks the selector up in the style sheet and resolves the variables
//! the rule references against whichever theme is active.

use ratatui::style::Style;

use crate::sample::ButtonVariant;
use crate::stylesheet::{Hatch, StyleSheet};
use crate::theme::Theme;
use crate::types::Role;

// ============================================================================
// SELECTORS
// ============================================================================

pub const SCREEN: &str = "Screen";
pub const HEADER: &str = "Header";
pub const FOOTER: &str = "Footer";
pub const FOOTER_KEY: &str = "Footer .key";
pub const PANEL: &str = ".panel";
pub const PANEL_TITLE: &str = ".panel-title";
pub const INPUT: &str = "Input";
pub const INPUT_FOCUS: &str = "Input:focus";
pub const BUTTON: &str = "Button";
pub const RULE: &str = "Rule";
pub const LOG: &str = "Log";
pub const DATATABLE: &str = "DataTable";
pub const DATATABLE_HEADER: &str = "DataTable .header";
pub const DATATABLE_CURSOR: &str = "DataTable .cursor";
pub const STATUS_PANEL: &str = "#status-panel";
pub const ALERTS_PANEL: &str = "#alerts-panel";
pub const SYNC_PANEL: &str = "#sync-panel";
pub const METRIC_LABEL: &str = ".metric-label";
pub const METRIC_VALUE: &str = ".metric-value";
pub const PROGRESS_BAR: &str = "ProgressBar";
pub const SPARKLINE: &str = "Sparkline";

// ============================================================================
// PAINTER
// ============================================================================

/// Resolves selectors to ratatui styles for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    sheet: &'a StyleSheet,
    theme: &'a Theme,
}

impl<'a> Painter<'a> {
    pub fn new(sheet: &'a StyleSheet, theme: &'a Theme) -> Self {
        Painter { sheet, theme }
    }

    pub fn sheet(&self) -> &'a StyleSheet {
        self.sheet
    }

    /// Text and background style for a selector.
    pub fn style(&self, selector: &str) -> Style {
        self.sheet.style(selector, self.theme)
    }

    /// Border style for a selector.
    pub fn border(&self, selector: &str) -> Style {
        self.sheet.border_style(selector, self.theme)
    }

    pub fn hatch(&self, selector: &str) -> Option<Hatch> {
        self.sheet.hatch(selector, self.theme)
    }

    /// Text color taken directly from a role.
    pub fn role(&self, role: Role) -> Style {
        Style::new().fg(self.theme.role(role))
    }

    /// Body and border styles for a button variant, layered over the
    /// base `Button` rule.
    pub fn button(&self, variant: ButtonVariant) -> (Style, Style) {
        let selector = variant.selector();
        let body = self.style(BUTTON).patch(self.style(selector));
        let border = self.border(BUTTON).patch(self.border(selector));
        (body, border)
    }
}

// ============================================================================
// TESTS
// ============================================================================
