//! The theme record: named, immutable role colors plus auxiliary variables.
//!
//! A `Theme` is validated once at construction and never mutated. Any
//! change means building a new record and registering it under its name.
//!
//! Resolution order for a variable name:
//! 1. one of the eight semantic roles
//! 2. an auxiliary variable set explicitly by the theme
//! 3. a derived default (see [`crate::fallback`])

use ratatui::style::Color;

use crate::color::{color_to_string, parse_color};
use crate::fallback;
use crate::types::{Role, ThemeDef, Value};

// ============================================================================
// ERRORS
// ============================================================================

/// Why a theme could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("theme name is empty")]
    EmptyName,

    #[error("invalid variable name {0:?}")]
    InvalidVariableName(String),

    #[error("variable {0:?} is defined more than once")]
    DuplicateVariable(String),

    #[error("variable {0:?} shadows a semantic role")]
    ShadowsRole(String),

    #[error("invalid color for {field}: {value:?}")]
    InvalidColor { field: String, value: String },

    #[error("invalid value for variable {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

// ============================================================================
// ROLE COLORS
// ============================================================================

/// The eight required colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub foreground: Color,
    pub background: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl RoleColors {
    /// Color assigned to a role.
    pub fn get(&self, role: Role) -> Color {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Accent => self.accent,
            Role::Foreground => self.foreground,
            Role::Background => self.background,
            Role::Success => self.success,
            Role::Warning => self.warning,
            Role::Error => self.error,
        }
    }

    /// Parse every role from a definition.
    fn from_def(def: &ThemeDef) -> Result<Self, ThemeError> {
        let parse = |role: Role| {
            let value = def.role(role);
            parse_color(value).map_err(|_| ThemeError::InvalidColor {
                field: role.as_str().to_string(),
                value: value.to_string(),
            })
        };
        Ok(RoleColors {
            primary: parse(Role::Primary)?,
            secondary: parse(Role::Secondary)?,
            accent: parse(Role::Accent)?,
            foreground: parse(Role::Foreground)?,
            background: parse(Role::Background)?,
            success: parse(Role::Success)?,
            warning: parse(Role::Warning)?,
            error: parse(Role::Error)?,
        })
    }
}

// ============================================================================
// THEME
// ============================================================================

/// A named, immutable color theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    dark: bool,
    roles: RoleColors,
    /// Insertion-ordered, duplicate-free.
    variables: Vec<(String, Value)>,
}

impl Theme {
    /// Build a theme from already-parsed parts.
    ///
    /// Fails on an empty name, a malformed or duplicate variable name, or
    /// a variable named after a role.
    pub fn new<I, K>(
        name: impl Into<String>,
        roles: RoleColors,
        variables: I,
        dark: bool,
    ) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ThemeError::EmptyName);
        }

        let mut checked: Vec<(String, Value)> = Vec::new();
        for (key, value) in variables {
            let key = key.into();
            validate_variable_name(&key)?;
            if checked.iter().any(|(k, _)| *k == key) {
                return Err(ThemeError::DuplicateVariable(key));
            }
            checked.push((key, value));
        }

        Ok(Theme {
            name,
            dark,
            roles,
            variables: checked,
        })
    }

    /// Validate and build a theme from its string definition.
    pub fn from_def(def: &ThemeDef) -> Result<Self, ThemeError> {
        let roles = RoleColors::from_def(def)?;

        let mut variables = Vec::with_capacity(def.variables.len());
        for (name, raw) in &def.variables {
            let value = raw.parse::<Value>().map_err(|_| ThemeError::InvalidValue {
                name: name.clone(),
                value: raw.clone(),
            })?;
            variables.push((name.clone(), value));
        }

        Theme::new(def.name.clone(), roles, variables, def.dark)
    }

    /// String definition that [`Theme::from_def`] reads back.
    pub fn to_def(&self) -> ThemeDef {
        let role = |r: Role| color_to_string(self.roles.get(r));
        ThemeDef {
            name: self.name.clone(),
            dark: self.dark,
            primary: role(Role::Primary),
            secondary: role(Role::Secondary),
            accent: role(Role::Accent),
            foreground: role(Role::Foreground),
            background: role(Role::Background),
            success: role(Role::Success),
            warning: role(Role::Warning),
            error: role(Role::Error),
            variables: self
                .variables
                .iter()
                .map(|(k, v)| (k.clone(), v.to_string()))
                .collect(),
        }
    }

    // --- Accessors ---

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn roles(&self) -> &RoleColors {
        &self.roles
    }

    pub fn role(&self, role: Role) -> Color {
        self.roles.get(role)
    }

    /// Explicit auxiliary variables, in definition order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, Value)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// An explicitly set auxiliary variable.
    pub fn variable(&self, name: &str) -> Option<Value> {
        self.variables
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| *v)
    }

    // --- Resolution ---

    /// A role or explicit variable, without derived defaults.
    pub fn explicit_value(&self, name: &str) -> Option<Value> {
        let name = strip_sigil(name);
        match Role::from_name(name) {
            Some(role) => Some(Value::Color(self.role(role))),
            None => self.variable(name),
        }
    }

    /// Resolve a variable name (with or without a leading `$`).
    pub fn resolve_value(&self, name: &str) -> Option<Value> {
        let name = strip_sigil(name);
        self.explicit_value(name)
            .or_else(|| fallback::derived_value(self, name))
    }

    /// Resolve a variable that must be a color.
    pub fn resolve_color(&self, name: &str) -> Option<Color> {
        self.resolve_value(name).and_then(Value::as_color)
    }
}

fn strip_sigil(name: &str) -> &str {
    name.strip_prefix('$').unwrap_or(name)
}

fn validate_variable_name(name: &str) -> Result<(), ThemeError> {
    let well_formed = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !well_formed {
        return Err(ThemeError::InvalidVariableName(name.to_string()));
    }
    if Role::from_name(name).is_some() {
        return Err(ThemeError::ShadowsRole(name.to_string()));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use ratatui::style::Modifier;

    use super::*;

    fn roles() -> RoleColors {
        RoleColors {
            primary: Color::Rgb(0xff, 0x66, 0x00),
            secondary: Color::Rgb(0xff, 0xaa, 0x00),
            accent: Color::Rgb(0xff, 0x33, 0x00),
            foreground: Color::Rgb(0xff, 0x44, 0x00),
            background: Color::Rgb(0, 0, 0),
            success: Color::Rgb(0, 0xff, 0),
            warning: Color::Rgb(0xff, 0xaa, 0x00),
            error: Color::Rgb(0xff, 0, 0),
        }
    }

    fn bare(name: &str) -> Theme {
        Theme::new(name, roles(), Vec::<(String, Value)>::new(), true).unwrap()
    }

    #[test]
    fn accessors_expose_construction_inputs() {
        let theme = Theme::new(
            "t",
            roles(),
            [("surface", Value::Color(Color::Rgb(1, 2, 3)))],
            false,
        )
        .unwrap();

        assert_eq!(theme.name(), "t");
        assert!(!theme.is_dark());
        assert_eq!(theme.role(Role::Primary), Color::Rgb(0xff, 0x66, 0x00));
        assert_eq!(theme.variable("surface"), Some(Value::Color(Color::Rgb(1, 2, 3))));
        assert_eq!(theme.variables().count(), 1);
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = Theme::new("  ", roles(), Vec::<(String, Value)>::new(), true);
        assert_eq!(result.unwrap_err(), ThemeError::EmptyName);
    }

    #[test]
    fn duplicate_variable_is_rejected() {
        let v = Value::Color(Color::Black);
        let result = Theme::new("t", roles(), [("surface", v), ("surface", v)], true);
        assert_eq!(
            result.unwrap_err(),
            ThemeError::DuplicateVariable("surface".to_string())
        );
    }

    #[test]
    fn role_shadowing_is_rejected() {
        let result = Theme::new("t", roles(), [("primary", Value::Color(Color::Red))], true);
        assert_eq!(result.unwrap_err(), ThemeError::ShadowsRole("primary".to_string()));
    }

    #[test]
    fn malformed_variable_name_is_rejected() {
        let result = Theme::new("t", roles(), [("$surface", Value::Color(Color::Red))], true);
        assert!(matches!(result, Err(ThemeError::InvalidVariableName(_))));
    }

    #[test]
    fn from_def_reports_bad_role_color() {
        let mut def = bare("t").to_def();
        def.accent = "#12".to_string();
        assert_eq!(
            Theme::from_def(&def).unwrap_err(),
            ThemeError::InvalidColor {
                field: "accent".to_string(),
                value: "#12".to_string()
            }
        );
    }

    #[test]
    fn from_def_reports_bad_variable() {
        let mut def = bare("t").to_def();
        def.variables.push(("surface".to_string(), "shiny".to_string()));
        assert!(matches!(
            Theme::from_def(&def),
            Err(ThemeError::InvalidValue { .. })
        ));
    }

    #[test]
    fn definition_reads_back() {
        let theme = Theme::new(
            "t",
            roles(),
            [
                ("surface", Value::Color(Color::Rgb(0x0a, 0x05, 0x00))),
                ("block-cursor-text-style", Value::TextStyle(Modifier::BOLD)),
            ],
            true,
        )
        .unwrap();
        assert_eq!(Theme::from_def(&theme.to_def()), Ok(theme));
    }

    #[test]
    fn resolution_prefers_roles_then_variables() {
        let theme = Theme::new(
            "t",
            roles(),
            [("surface", Value::Color(Color::Rgb(9, 9, 9)))],
            true,
        )
        .unwrap();
        assert_eq!(theme.resolve_color("$primary"), Some(Color::Rgb(0xff, 0x66, 0x00)));
        assert_eq!(theme.resolve_color("surface"), Some(Color::Rgb(9, 9, 9)));
        assert_eq!(theme.resolve_color("no-such-thing"), None);
    }

    #[test]
    fn unset_variables_fall_back_to_derived_defaults() {
        let theme = bare("t");
        assert_eq!(theme.explicit_value("surface"), None);
        assert_eq!(theme.resolve_color("surface"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(
            theme.resolve_value("block-cursor-text-style"),
            Some(Value::TextStyle(Modifier::BOLD))
        );
    }

    #[test]
    fn text_style_is_not_a_color() {
        let theme = bare("t");
        assert_eq!(theme.resolve_color("block-cursor-text-style"), None);
    }
}
