//! Domain types for nerv-theme.
//!
//! Shared primitives used by the theme record, the registry, the style
//! sheet and the demo. No behavior beyond parsing and display lives here.

use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier};
use serde::{Deserialize, Serialize};

// ============================================================================
// ROLES
// ============================================================================

/// The eight semantic color slots every theme must fill.
///
/// Widgets that only know about roles render sensibly with any theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Foreground,
    Background,
    Success,
    Warning,
    Error,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 8] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Foreground,
        Role::Background,
        Role::Success,
        Role::Warning,
        Role::Error,
    ];

    /// The variable name a style rule uses to reference this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Foreground => "foreground",
            Role::Background => "background",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Error => "error",
        }
    }

    /// Look up a role by its variable name.
    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALUES
// ============================================================================

/// A resolved auxiliary variable.
///
/// Most variables are colors, but a theme may also carry text styles
/// (e.g. `block-cursor-text-style: bold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Color(Color),
    TextStyle(Modifier),
}

impl Value {
    /// The color, if this value is one.
    pub fn as_color(self) -> Option<Color> {
        match self {
            Value::Color(c) => Some(c),
            Value::TextStyle(_) => None,
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Value::Color(_) => ValueKind::Color,
            Value::TextStyle(_) => ValueKind::TextStyle,
        }
    }

    /// The text style, if this value is one.
    pub fn as_text_style(self) -> Option<Modifier> {
        match self {
            Value::TextStyle(m) => Some(m),
            Value::Color(_) => None,
        }
    }
}

/// What a style property needs a value to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Color,
    TextStyle,
}

impl ValueKind {
    pub fn accepts(self, value: Value) -> bool {
        value.kind() == self
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Color => f.write_str("color"),
            ValueKind::TextStyle => f.write_str("text style"),
        }
    }
}

impl FromStr for Value {
    type Err = String;

    /// Text-style keywords win over color names; there is no overlap
    /// between the two vocabularies.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(modifier) = crate::color::parse_text_style(s) {
            return Ok(Value::TextStyle(modifier));
        }
        crate::color::parse_color(s).map(Value::Color)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Color(c) => f.write_str(&crate::color::color_to_string(*c)),
            Value::TextStyle(m) => f.write_str(&crate::color::text_style_to_string(*m)),
        }
    }
}

// ============================================================================
// THEME DEFINITION
// ============================================================================

/// String-valued theme definition, as stored in JSON theme files.
///
/// Mirrors [`crate::theme::Theme`] but is unvalidated. Variables keep
/// their file order and any duplicates, so validation can report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDef {
    pub name: String,
    /// Omitted means dark.
    #[serde(default = "default_dark")]
    pub dark: bool,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub foreground: String,
    pub background: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    #[serde(default, with = "ordered_pairs")]
    pub variables: Vec<(String, String)>,
}

fn default_dark() -> bool {
    true
}

impl ThemeDef {
    /// The string assigned to a role.
    pub fn role(&self, role: Role) -> &str {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Accent => &self.accent,
            Role::Foreground => &self.foreground,
            Role::Background => &self.background,
            Role::Success => &self.success,
            Role::Warning => &self.warning,
            Role::Error => &self.error,
        }
    }
}

/// (De)serialize `Vec<(String, String)>` as a JSON object, keeping
/// duplicate keys instead of silently dropping all but the last.
mod ordered_pairs {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(pairs: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = Vec<(String, String)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of variable names to values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    pairs.push((key, value));
                }
                Ok(pairs)
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for theme reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned, human-readable listing.
    #[default]
    Human,
    /// Machine-readable JSON (a `ThemeDef`).
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_name("surface"), None);
    }

    #[test]
    fn value_parses_text_style_before_color() {
        assert_eq!("bold".parse::<Value>(), Ok(Value::TextStyle(Modifier::BOLD)));
        assert_eq!(
            "#ff6600".parse::<Value>(),
            Ok(Value::Color(Color::Rgb(0xff, 0x66, 0x00)))
        );
    }

    #[test]
    fn value_kind_matches_variant() {
        assert!(ValueKind::Color.accepts(Value::Color(Color::Red)));
        assert!(!ValueKind::Color.accepts(Value::TextStyle(Modifier::BOLD)));
        assert!(ValueKind::TextStyle.accepts(Value::TextStyle(Modifier::empty())));
    }

    #[test]
    fn theme_def_can_opt_into_light() {
        let json = r##"{
            "name": "paper",
            "dark": false,
            "primary": "blue",
            "secondary": "blue",
            "accent": "red",
            "foreground": "black",
            "background": "white",
            "success": "green",
            "warning": "yellow",
            "error": "red"
        }"##;
        let def: ThemeDef = serde_json::from_str(json).unwrap();
        assert!(!def.dark);
    }

    #[test]
    fn value_rejects_garbage() {
        assert!("not-a-color".parse::<Value>().is_err());
    }

    #[test]
    fn theme_def_keeps_duplicate_variables() {
        let json = r##"{
            "name": "dup",
            "primary": "#ff6600",
            "secondary": "#ffaa00",
            "accent": "#ff3300",
            "foreground": "#ff4400",
            "background": "#000000",
            "success": "#00ff00",
            "warning": "#ffaa00",
            "error": "#ff0000",
            "variables": { "surface": "#000000", "surface": "#111111" }
        }"##;
        let def: ThemeDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.variables.len(), 2);
        assert!(def.dark, "omitted dark means a dark theme");
    }

    #[test]
    fn theme_def_variables_are_optional() {
        let json = r##"{
            "name": "bare",
            "dark": true,
            "primary": "red",
            "secondary": "red",
            "accent": "red",
            "foreground": "white",
            "background": "black",
            "success": "green",
            "warning": "yellow",
            "error": "red"
        }"##;
        let def: ThemeDef = serde_json::from_str(json).unwrap();
        assert!(def.variables.is_empty());
        assert_eq!(def.role(Role::Background), "black");
    }
}
