//! Sample data shown by the demo dashboard.
//!
//! Everything here is fixed or computed in closed form, so the demo
//! renders the same way every run.

use crate::types::Role;

pub const TITLE: &str = "NERV SYSTEM";
pub const SUB_TITLE: &str = "MAGI-01";

pub const COMMAND_PLACEHOLDER: &str = "Enter command sequence...";

/// Button caption and the style variant it uses.
pub const BUTTONS: [(&str, ButtonVariant); 3] = [
    ("Execute", ButtonVariant::Primary),
    ("Abort", ButtonVariant::Error),
    ("Reset", ButtonVariant::Default),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Default,
    Primary,
    Error,
}

impl ButtonVariant {
    /// Style-sheet selector for this variant.
    pub fn selector(self) -> &'static str {
        match self {
            ButtonVariant::Default => "Button",
            ButtonVariant::Primary => "Button.-primary",
            ButtonVariant::Error => "Button.-error",
        }
    }
}

pub const TABLE_COLUMNS: [&str; 4] = ["SYSTEM", "STATUS", "LOAD", "TEMP"];

pub const TABLE_ROWS: [[&str; 4]; 8] = [
    ["MAGI-01 MELCHIOR", "ONLINE", "42%", "34°C"],
    ["MAGI-02 BALTHASAR", "ONLINE", "38%", "32°C"],
    ["MAGI-03 CASPER", "ONLINE", "45%", "35°C"],
    ["UMBILICAL BRIDGE", "ACTIVE", "67%", "28°C"],
    ["AT FIELD GEN", "STANDBY", "12%", "22°C"],
    ["ENTRY PLUG SYS", "READY", "8%", "24°C"],
    ["LCL PLANT", "CYCLING", "55%", "37°C"],
    ["POSITRON RIFLE", "CHARGING", "78%", "89°C"],
];

pub const LOG_LINES: [&str; 8] = [
    "[12:01:03] MAGI system initialized",
    "[12:01:05] Pilot neural link established",
    "[12:01:08] Entry plug inserted",
    "[12:01:12] LCL ionization complete",
    "[12:01:15] A10 nerve connection nominal",
    "[12:01:18] Sync test commencing...",
    "[12:01:22] Borderline cleared",
    "[12:01:25] EVA Unit-01 activated",
];

/// Alert text and the role that colors it.
pub const ALERTS: [(&str, Role); 6] = [
    ("● MAGI CONSENSUS: UNANIMOUS", Role::Success),
    ("● SYNC RATIO: NOMINAL", Role::Success),
    ("● AT FIELD: ACTIVE - 120% OUTPUT", Role::Warning),
    ("● LCL PRESSURE: ELEVATED", Role::Primary),
    ("● PATTERN BLUE: CONFIRMED", Role::Error),
    ("● ALERT LEVEL: FIRST", Role::Error),
];

/// Pilot label and sync ratio in percent.
pub const PILOTS: [(&str, f64); 3] = [("PILOT-00", 72.4), ("PILOT-01", 98.2), ("PILOT-02", 84.7)];

/// Number of sparkline samples.
pub const HARMONIC_SAMPLES: usize = 40;

/// One harmonic sample: `|sin(0.3x) * 50 + cos(0.7x) * 30|`.
pub fn harmonic(x: usize) -> f64 {
    let x = x as f64;
    ((x * 0.3).sin() * 50.0 + (x * 0.7).cos() * 30.0).abs()
}

/// Sparkline data, rounded to whole units.
pub fn harmonics(samples: usize) -> Vec<u64> {
    (0..samples).map(|x| harmonic(x).round() as u64).collect()
}

/// Format a sync ratio the way the metric rows show it.
pub fn format_ratio(percent: f64) -> String {
    format!("{:.1}%", percent)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harmonic_starts_at_cosine_peak() {
        // sin(0) = 0, cos(0) = 1
        assert_eq!(harmonic(0), 30.0);
    }

    #[test]
    fn harmonics_are_bounded_and_sized() {
        let data = harmonics(HARMONIC_SAMPLES);
        assert_eq!(data.len(), HARMONIC_SAMPLES);
        assert!(data.iter().all(|&v| v <= 80));
        assert_eq!(data, harmonics(HARMONIC_SAMPLES), "deterministic");
    }

    #[test]
    fn table_rows_match_columns() {
        assert!(TABLE_ROWS.iter().all(|row| row.len() == TABLE_COLUMNS.len()));
    }

    #[test]
    fn ratios_format_with_one_decimal() {
        let shown: Vec<String> = PILOTS.iter().map(|(_, p)| format_ratio(*p)).collect();
        assert_eq!(shown, vec!["72.4%", "98.2%", "84.7%"]);
    }

    #[test]
    fn button_variants_select_rules() {
        assert_eq!(ButtonVariant::Primary.selector(), "Button.-primary");
        assert_eq!(BUTTONS[2].1.selector(), "Button");
    }
}
