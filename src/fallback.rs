//! Derived defaults for auxiliary variables a theme leaves unset.
//!
//! Every variable the demo style sheet references has a fallback written
//! in terms of roles or other variables, so a theme that sets only the
//! eight roles still renders every widget. Names of the form
//! `<base>-darken-N` / `<base>-lighten-N` are shades of `<base>`.

use ratatui::style::Modifier;

use crate::color::{blend, darken, lighten};
use crate::theme::Theme;
use crate::types::Value;

/// Blend amount per shade step.
pub const SHADE_STEP: f32 = 0.075;

/// Highest shade step a name may ask for.
pub const MAX_SHADE: u8 = 3;

/// Bound on fallback chains; the table has no cycles, this guards edits.
const MAX_DEPTH: usize = 8;

/// How an unset variable is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    /// Same value as another name.
    Alias(&'static str),
    /// Blend the first name toward the second by the given amount.
    Blend(&'static str, &'static str, f32),
    /// A fixed text style.
    TextStyle(Modifier),
}

/// Fallback for each auxiliary variable, in no particular order.
pub const FALLBACKS: &[(&str, Fallback)] = &[
    // Surfaces
    ("surface", Fallback::Alias("background")),
    ("panel", Fallback::Blend("background", "primary", 0.1)),
    ("panel-background", Fallback::Alias("panel")),
    ("panel-border", Fallback::Alias("primary")),
    // Text
    ("text", Fallback::Alias("foreground")),
    ("text-muted", Fallback::Blend("foreground", "background", 0.4)),
    ("text-disabled", Fallback::Blend("foreground", "background", 0.7)),
    // Footer
    ("footer-background", Fallback::Alias("panel-background")),
    ("footer-foreground", Fallback::Alias("foreground")),
    ("footer-key-foreground", Fallback::Alias("accent")),
    // Input
    ("input-background", Fallback::Alias("surface")),
    ("input-border", Fallback::Alias("primary-darken-1")),
    ("input-border-focus", Fallback::Alias("primary")),
    // Button
    ("button-background", Fallback::Alias("surface")),
    ("button-border", Fallback::Alias("primary-darken-1")),
    ("button-border-hover", Fallback::Alias("primary")),
    // Scrollbar
    ("scrollbar-background", Fallback::Alias("surface")),
    ("scrollbar-color", Fallback::Alias("primary-darken-1")),
    ("scrollbar-color-hover", Fallback::Alias("primary")),
    // DataTable
    ("datatable-background", Fallback::Alias("surface")),
    ("datatable-header-background", Fallback::Alias("panel-background")),
    ("datatable-cursor-background", Fallback::Alias("primary-darken-1")),
    ("datatable-cursor-background-focus", Fallback::Alias("primary")),
    // Block cursor
    ("block-cursor-text-style", Fallback::TextStyle(Modifier::BOLD)),
    ("block-cursor-foreground", Fallback::Alias("background")),
    ("block-cursor-background", Fallback::Alias("primary")),
];

/// Value for a name the theme does not set explicitly.
pub fn derived_value(theme: &Theme, name: &str) -> Option<Value> {
    derive(theme, name, 0)
}

/// Resolve through explicit values first, then fallbacks.
fn lookup(theme: &Theme, name: &str, depth: usize) -> Option<Value> {
    theme
        .explicit_value(name)
        .or_else(|| derive(theme, name, depth + 1))
}

fn derive(theme: &Theme, name: &str, depth: usize) -> Option<Value> {
    if depth > MAX_DEPTH {
        return None;
    }

    if let Some((_, fallback)) = FALLBACKS.iter().find(|(n, _)| *n == name) {
        return match *fallback {
            Fallback::Alias(other) => lookup(theme, other, depth),
            Fallback::Blend(a, b, t) => {
                let a = lookup(theme, a, depth)?.as_color()?;
                let b = lookup(theme, b, depth)?.as_color()?;
                Some(Value::Color(blend(a, b, t)))
            }
            Fallback::TextStyle(m) => Some(Value::TextStyle(m)),
        };
    }

    let (base, shade) = parse_shade(name)?;
    let color = lookup(theme, base, depth)?.as_color()?;
    let amount = SHADE_STEP * f32::from(shade.steps());
    let shaded = match shade {
        Shade::Darken(_) => darken(color, amount),
        Shade::Lighten(_) => lighten(color, amount),
    };
    Some(Value::Color(shaded))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shade {
    Darken(u8),
    Lighten(u8),
}

impl Shade {
    fn steps(self) -> u8 {
        match self {
            Shade::Darken(n) | Shade::Lighten(n) => n,
        }
    }
}

/// Split `primary-darken-2` into (`primary`, Darken(2)).
fn parse_shade(name: &str) -> Option<(&str, Shade)> {
    let (rest, steps) = name.rsplit_once('-')?;
    let steps: u8 = steps.parse().ok()?;
    if steps == 0 || steps > MAX_SHADE {
        return None;
    }
    if let Some(base) = rest.strip_suffix("-darken") {
        Some((base, Shade::Darken(steps)))
    } else if let Some(base) = rest.strip_suffix("-lighten") {
        Some((base, Shade::Lighten(steps)))
    } else {
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::theme::RoleColors;

    fn role_only(primary: Color, background: Color) -> Theme {
        let roles = RoleColors {
            primary,
            secondary: Color::Rgb(0xff, 0xaa, 0x00),
            accent: Color::Rgb(0xff, 0x33, 0x00),
            foreground: Color::Rgb(0xff, 0x44, 0x00),
            background,
            success: Color::Rgb(0, 0xff, 0),
            warning: Color::Rgb(0xff, 0xaa, 0x00),
            error: Color::Rgb(0xff, 0, 0),
        };
        Theme::new("role-only", roles, Vec::<(String, Value)>::new(), true).unwrap()
    }

    #[test]
    fn parse_shade_accepts_known_forms() {
        assert_eq!(parse_shade("primary-darken-1"), Some(("primary", Shade::Darken(1))));
        assert_eq!(
            parse_shade("surface-lighten-3"),
            Some(("surface", Shade::Lighten(3)))
        );
        assert_eq!(parse_shade("primary-darken-0"), None);
        assert_eq!(parse_shade("primary-darken-9"), None);
        assert_eq!(parse_shade("primary-brighten-1"), None);
        assert_eq!(parse_shade("primary"), None);
    }

    #[test]
    fn every_fallback_resolves_for_role_only_theme() {
        let theme = role_only(Color::Rgb(0xff, 0x66, 0x00), Color::Rgb(0, 0, 0));
        for (name, _) in FALLBACKS {
            assert!(
                derived_value(&theme, name).is_some(),
                "{} should derive from roles",
                name
            );
        }
    }

    #[test]
    fn darken_shade_moves_toward_black() {
        let theme = role_only(Color::Rgb(200, 200, 200), Color::Rgb(0, 0, 0));
        assert_eq!(
            derived_value(&theme, "primary-darken-2"),
            Some(Value::Color(Color::Rgb(170, 170, 170)))
        );
    }

    #[test]
    fn shade_of_derived_base_chains() {
        let theme = role_only(Color::Rgb(0xff, 0x66, 0x00), Color::Rgb(0, 0, 0));
        // surface -> background -> #000000, lightened one step
        assert_eq!(
            derived_value(&theme, "surface-lighten-1"),
            Some(Value::Color(lighten(Color::Rgb(0, 0, 0), SHADE_STEP)))
        );
    }

    #[test]
    fn unknown_names_do_not_derive() {
        let theme = role_only(Color::Red, Color::Black);
        assert_eq!(derived_value(&theme, "warp-drive"), None);
    }

    #[test]
    fn named_colors_shade_to_themselves() {
        let theme = role_only(Color::Red, Color::Black);
        assert_eq!(
            derived_value(&theme, "primary-darken-1"),
            Some(Value::Color(Color::Red))
        );
    }
}
