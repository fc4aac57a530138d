//! Report formatting for themes.
//!
//! Pure functions: (Theme, OutputFormat) → String.
//! No I/O, no side effects.

use crate::theme::Theme;
use crate::types::{OutputFormat, Role};

/// Format a theme for output.
pub fn format_theme(theme: &Theme, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(theme),
        OutputFormat::Json => format_json(theme),
    }
}

/// One line per theme: name and mode, the active one marked.
pub fn format_theme_list<'a>(themes: impl IntoIterator<Item = &'a Theme>, active: &str) -> String {
    let mut out = String::new();
    for theme in themes {
        let marker = if theme.name() == active { "*" } else { " " };
        out.push_str(&format!(
            "{} {:<20} {}\n",
            marker,
            theme.name(),
            mode(theme)
        ));
    }
    out
}

fn mode(theme: &Theme) -> &'static str {
    if theme.is_dark() { "dark" } else { "light" }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(theme: &Theme) -> String {
    let def = theme.to_def();
    let mut out = String::new();

    out.push_str(&format!("=== {} ({}) ===\n", theme.name(), mode(theme)));

    out.push_str("Roles:\n");
    for role in Role::ALL {
        out.push_str(&format!("  {:<12} {}\n", role.as_str(), def.role(role)));
    }

    if def.variables.is_empty() {
        out.push_str("Variables: none (derived from roles)\n");
    } else {
        let width = def.variables.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        out.push_str(&format!("Variables ({}):\n", def.variables.len()));
        for (name, value) in &def.variables {
            out.push_str(&format!("  {:<width$} {}\n", name, value, width = width));
        }
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(theme: &Theme) -> String {
    serde_json::to_string_pretty(&theme.to_def()).unwrap_or_else(|e| {
        // ThemeDef is plain strings; this should never happen
        panic!("Failed to serialize theme to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
