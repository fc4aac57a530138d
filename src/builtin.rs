//! Built-in themes.
//!
//! `nerv` is inspired by the NERV computer systems: orange and amber on
//! black, with red for alerts. The two `textual-*` themes set roles only
//! and lean on derived defaults for everything else.

use crate::theme::{Theme, ThemeError};
use crate::types::ThemeDef;

pub const NERV_NAME: &str = "nerv";
pub const TEXTUAL_DARK_NAME: &str = "textual-dark";
pub const TEXTUAL_LIGHT_NAME: &str = "textual-light";

/// A theme written as static string literals.
#[derive(Debug, Clone, Copy)]
pub struct ThemeSource {
    pub name: &'static str,
    pub dark: bool,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub foreground: &'static str,
    pub background: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub variables: &'static [(&'static str, &'static str)],
}

impl ThemeSource {
    pub fn to_def(&self) -> ThemeDef {
        ThemeDef {
            name: self.name.to_string(),
            dark: self.dark,
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            accent: self.accent.to_string(),
            foreground: self.foreground.to_string(),
            background: self.background.to_string(),
            success: self.success.to_string(),
            warning: self.warning.to_string(),
            error: self.error.to_string(),
            variables: self
                .variables
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn build(&self) -> Result<Theme, ThemeError> {
        Theme::from_def(&self.to_def())
    }
}

pub const NERV: ThemeSource = ThemeSource {
    name: NERV_NAME,
    dark: true,
    primary: "#ff6600",    // borders, highlights, headers
    secondary: "#ffaa00",  // status text
    accent: "#ff3300",     // focused elements, alerts
    foreground: "#ff4400", // body text
    background: "#000000",
    success: "#00ff00",
    warning: "#ffaa00",
    error: "#ff0000",
    variables: &[
        // Surfaces
        ("surface", "#000000"),
        ("surface-lighten-1", "#0a0500"),
        ("surface-lighten-2", "#1a0a00"),
        // Text
        ("text", "#ffdfdf"),
        ("text-muted", "#cc7744"),
        ("text-disabled", "#663300"),
        // Primary shades
        ("primary-darken-1", "#cc5200"),
        ("primary-lighten-1", "#ffaa00"),
        // Panels
        ("panel-background", "#1a0a00"),
        ("panel-border", "#ff6600"),
        // Footer
        ("footer-background", "#1a0a00"),
        ("footer-foreground", "#ff6600"),
        ("footer-key-foreground", "#ffaa00"),
        // Input
        ("input-background", "#0a0500"),
        ("input-border", "#cc5200"),
        ("input-border-focus", "#ff6600"),
        // Button
        ("button-background", "#0a0500"),
        ("button-border", "#cc5200"),
        ("button-border-hover", "#ff6600"),
        // Scrollbar
        ("scrollbar-background", "#0a0500"),
        ("scrollbar-color", "#cc5200"),
        ("scrollbar-color-hover", "#ff6600"),
        // DataTable
        ("datatable-background", "#0a0500"),
        ("datatable-header-background", "#1a0a00"),
        ("datatable-cursor-background", "#cc5200"),
        ("datatable-cursor-background-focus", "#ff6600"),
        // Block cursor
        ("block-cursor-text-style", "bold"),
        ("block-cursor-foreground", "#000000"),
        ("block-cursor-background", "#ff6600"),
    ],
};

pub const TEXTUAL_DARK: ThemeSource = ThemeSource {
    name: TEXTUAL_DARK_NAME,
    dark: true,
    primary: "#0178d4",
    secondary: "#004578",
    accent: "#ffa62b",
    foreground: "#e0e0e0",
    background: "#121212",
    success: "#4ebf71",
    warning: "#ffa62b",
    error: "#ba3c5b",
    variables: &[],
};

pub const TEXTUAL_LIGHT: ThemeSource = ThemeSource {
    name: TEXTUAL_LIGHT_NAME,
    dark: false,
    primary: "#004578",
    secondary: "#0178d4",
    accent: "#ffa62b",
    foreground: "#1f1f1f",
    background: "#e0e0e0",
    success: "#4ebf71",
    warning: "#ffa62b",
    error: "#ba3c5b",
    variables: &[],
};

/// Every built-in source, alternatives first.
pub const ALL: [ThemeSource; 3] = [TEXTUAL_DARK, TEXTUAL_LIGHT, NERV];

/// Whether `name` belongs to a built-in theme.
pub fn is_builtin(name: &str) -> bool {
    ALL.iter().any(|source| source.name == name)
}

/// The nerv theme.
pub fn nerv() -> Theme {
    NERV.build().expect("built-in nerv theme is valid")
}

/// The default dark alternative.
pub fn textual_dark() -> Theme {
    TEXTUAL_DARK.build().expect("built-in textual-dark theme is valid")
}

/// Every built-in theme, in [`ALL`] order.
pub fn all() -> Vec<Theme> {
    ALL.iter()
        .map(|source| source.build().expect("built-in themes are valid"))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use ratatui::style::{Color, Modifier};

    use super::*;
    use crate::types::{Role, Value};

    #[test]
    fn every_builtin_builds() {
        for source in ALL {
            let theme = source.build().unwrap();
            assert_eq!(theme.name(), source.name);
        }
    }

    #[test]
    fn nerv_roles_are_exact() {
        let theme = nerv();
        assert!(theme.is_dark());
        assert_eq!(theme.role(Role::Primary), Color::Rgb(0xff, 0x66, 0x00));
        assert_eq!(theme.role(Role::Secondary), Color::Rgb(0xff, 0xaa, 0x00));
        assert_eq!(theme.role(Role::Accent), Color::Rgb(0xff, 0x33, 0x00));
        assert_eq!(theme.role(Role::Foreground), Color::Rgb(0xff, 0x44, 0x00));
        assert_eq!(theme.role(Role::Background), Color::Rgb(0, 0, 0));
        assert_eq!(theme.role(Role::Success), Color::Rgb(0, 0xff, 0));
        assert_eq!(theme.role(Role::Warning), Color::Rgb(0xff, 0xaa, 0x00));
        assert_eq!(theme.role(Role::Error), Color::Rgb(0xff, 0, 0));
    }

    #[test]
    fn nerv_variables_are_unique() {
        let names: BTreeSet<&str> = NERV.variables.iter().map(|(k, _)| *k).collect();
        assert_eq!(names.len(), NERV.variables.len());
        assert_eq!(nerv().variables().count(), NERV.variables.len());
    }

    #[test]
    fn nerv_block_cursor_is_bold() {
        assert_eq!(
            nerv().variable("block-cursor-text-style"),
            Some(Value::TextStyle(Modifier::BOLD))
        );
    }

    #[test]
    fn builtin_names_are_distinct() {
        let names: BTreeSet<&str> = ALL.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn builtin_names_are_recognized() {
        assert!(is_builtin(NERV_NAME));
        assert!(is_builtin(TEXTUAL_LIGHT_NAME));
        assert!(!is_builtin("unit-02"));
    }

    #[test]
    fn alternatives_are_role_only() {
        assert_eq!(textual_dark().variables().count(), 0);
        assert_eq!(all().len(), 3);
    }
}
