//! Style rules for the demo: selectors mapped to cosmetic and sizing
//! properties, with colors referenced through theme variables.
//!
//! Rules are static data. Lookup is by exact selector; there is no cascade.
//! Every `$variable` a rule uses must resolve in the active theme, which
//! [`StyleSheet::check`] verifies.

use std::collections::BTreeSet;

use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};

use crate::color::blend;
use crate::theme::Theme;
use crate::types::{Role, Value, ValueKind};

// ============================================================================
// TYPES
// ============================================================================

/// A property value: a theme variable or a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleValue {
    /// `$name`, resolved against the active theme.
    Var(&'static str),
    /// A color or text-style literal.
    Literal(&'static str),
}

impl StyleValue {
    pub fn resolve(self, theme: &Theme) -> Option<Value> {
        match self {
            StyleValue::Var(name) => theme.resolve_value(name),
            StyleValue::Literal(s) => s.parse::<Value>().ok(),
        }
    }
}

/// Widget extent along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// Fit the content.
    Auto,
    Cells(u16),
    /// Share of the remaining space (`1fr`).
    Fraction(u16),
    Percent(u16),
}

impl Size {
    /// Layout constraint; `content` is the natural size used for `Auto`.
    pub fn constraint(self, content: u16) -> Constraint {
        match self {
            Size::Auto => Constraint::Length(content),
            Size::Cells(n) => Constraint::Length(n),
            Size::Fraction(n) => Constraint::Fill(n),
            Size::Percent(p) => Constraint::Percentage(p),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Color(StyleValue),
    Background(StyleValue),
    Border(StyleValue),
    TextStyle(StyleValue),
    /// Fill the background with `glyph` in `color` at `opacity` percent.
    Hatch {
        glyph: char,
        color: StyleValue,
        opacity: u8,
    },
    Height(Size),
    Width(Size),
}

impl Property {
    fn style_value(&self) -> Option<StyleValue> {
        match *self {
            Property::Color(v)
            | Property::Background(v)
            | Property::Border(v)
            | Property::TextStyle(v) => Some(v),
            Property::Hatch { color, .. } => Some(color),
            Property::Height(_) | Property::Width(_) => None,
        }
    }

    /// Kind of value the property consumes.
    fn expected_kind(&self) -> Option<ValueKind> {
        match self {
            Property::Color(_)
            | Property::Background(_)
            | Property::Border(_)
            | Property::Hatch { .. } => Some(ValueKind::Color),
            Property::TextStyle(_) => Some(ValueKind::TextStyle),
            Property::Height(_) | Property::Width(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub selector: &'static str,
    pub properties: &'static [Property],
}

/// A resolved hatch fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hatch {
    pub glyph: char,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("theme {theme:?} cannot resolve: {}", .names.join(", "))]
    Dangling { theme: String, names: Vec<String> },

    #[error("theme {theme:?} has values of the wrong kind: {}", .names.join(", "))]
    WrongKind { theme: String, names: Vec<String> },

    #[error("rule {selector:?} has an invalid literal {value:?}")]
    InvalidLiteral {
        selector: &'static str,
        value: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct StyleSheet {
    rules: &'static [Rule],
}

// ============================================================================
// DEMO RULES
// ============================================================================

use Property::{Background, Border, Color as Fg, Height, TextStyle, Width};
use StyleValue::{Literal, Var};

/// Glyph used for `hatch: cross`.
pub const CROSS_HATCH: char = '╳';

pub const DEMO_STYLESHEET: StyleSheet = StyleSheet::new(&[
    Rule {
        selector: "Screen",
        properties: &[Background(Var("background")), Fg(Var("foreground"))],
    },
    Rule {
        selector: "Header",
        properties: &[
            Background(Var("panel-background")),
            Fg(Var("primary")),
            TextStyle(Literal("bold")),
        ],
    },
    Rule {
        selector: "Footer",
        properties: &[
            Background(Var("footer-background")),
            Fg(Var("footer-foreground")),
        ],
    },
    Rule {
        selector: "Footer .key",
        properties: &[Fg(Var("footer-key-foreground")), TextStyle(Literal("bold"))],
    },
    Rule {
        selector: ".panel",
        properties: &[Border(Var("primary"))],
    },
    Rule {
        selector: ".panel-title",
        properties: &[Fg(Var("secondary")), TextStyle(Literal("bold"))],
    },
    Rule {
        selector: "Input",
        properties: &[
            Background(Var("input-background")),
            Fg(Var("text-muted")),
            Border(Var("input-border")),
            Height(Size::Cells(3)),
        ],
    },
    Rule {
        selector: "Input:focus",
        properties: &[Border(Var("input-border-focus"))],
    },
    Rule {
        selector: "Button",
        properties: &[
            Background(Var("button-background")),
            Fg(Var("text")),
            Border(Var("button-border")),
            Height(Size::Cells(3)),
        ],
    },
    Rule {
        selector: "Button.-primary",
        properties: &[Fg(Var("primary")), Border(Var("button-border-hover"))],
    },
    Rule {
        selector: "Button.-error",
        properties: &[Fg(Var("error")), Border(Var("error"))],
    },
    Rule {
        selector: "Rule",
        properties: &[Fg(Var("primary-darken-1"))],
    },
    Rule {
        selector: "Log",
        properties: &[
            Background(Var("surface")),
            Fg(Var("text")),
            Border(Var("primary-darken-1")),
        ],
    },
    Rule {
        selector: "DataTable",
        properties: &[
            Background(Var("datatable-background")),
            Fg(Var("text")),
        ],
    },
    Rule {
        selector: "DataTable .header",
        properties: &[
            Background(Var("datatable-header-background")),
            Fg(Var("secondary")),
            TextStyle(Literal("bold")),
        ],
    },
    Rule {
        selector: "DataTable .cursor",
        properties: &[
            Background(Var("datatable-cursor-background-focus")),
            Fg(Var("block-cursor-foreground")),
            TextStyle(Var("block-cursor-text-style")),
        ],
    },
    Rule {
        selector: "#status-panel",
        properties: &[Height(Size::Fraction(1))],
    },
    Rule {
        selector: "#alerts-panel",
        properties: &[Height(Size::Auto)],
    },
    Rule {
        selector: "#sync-panel",
        properties: &[Property::Hatch {
            glyph: CROSS_HATCH,
            color: Var("primary"),
            opacity: 30,
        }],
    },
    Rule {
        selector: ".metric-label",
        properties: &[Fg(Var("text")), Width(Size::Cells(20))],
    },
    Rule {
        selector: ".metric-value",
        properties: &[Fg(Var("secondary")), Width(Size::Cells(8))],
    },
    Rule {
        selector: "ProgressBar",
        properties: &[
            Fg(Var("primary")),
            Background(Var("surface-lighten-1")),
            Width(Size::Fraction(1)),
        ],
    },
    Rule {
        selector: "Sparkline",
        properties: &[
            Fg(Var("secondary")),
            Background(Var("surface")),
            Height(Size::Cells(3)),
        ],
    },
]);

// ============================================================================
// LOOKUP AND RESOLUTION
// ============================================================================

impl StyleSheet {
    pub const fn new(rules: &'static [Rule]) -> Self {
        StyleSheet { rules }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    pub fn rule(&self, selector: &str) -> Option<&'static Rule> {
        self.rules.iter().find(|r| r.selector == selector)
    }

    fn properties(&self, selector: &str) -> impl Iterator<Item = &'static Property> {
        self.rule(selector).into_iter().flat_map(|r| r.properties.iter())
    }

    /// Every variable name referenced by any rule, without the `$`.
    pub fn references(&self) -> BTreeSet<&'static str> {
        self.rules
            .iter()
            .flat_map(|r| r.properties.iter())
            .filter_map(|p| match p.style_value() {
                Some(Var(name)) => Some(name),
                _ => None,
            })
            .collect()
    }

    /// Every variable reference paired with the kind of value it needs.
    pub fn typed_references(&self) -> BTreeSet<(&'static str, ValueKind)> {
        self.rules
            .iter()
            .flat_map(|r| r.properties.iter())
            .filter_map(|p| match (p.style_value(), p.expected_kind()) {
                (Some(Var(name)), Some(kind)) => Some((name, kind)),
                _ => None,
            })
            .collect()
    }

    /// Verify every literal parses to the kind its property needs, then
    /// that every reference resolves to a value of that kind.
    pub fn check(&self, theme: &Theme) -> Result<(), StyleError> {
        for rule in self.rules {
            for prop in rule.properties {
                let literal = (prop.style_value(), prop.expected_kind());
                if let (Some(Literal(value)), Some(kind)) = literal {
                    let fits = value.parse::<Value>().is_ok_and(|v| kind.accepts(v));
                    if !fits {
                        return Err(StyleError::InvalidLiteral {
                            selector: rule.selector,
                            value,
                        });
                    }
                }
            }
        }

        let mut dangling: Vec<String> = Vec::new();
        let mut wrong_kind: Vec<String> = Vec::new();
        for (name, kind) in self.typed_references() {
            match theme.resolve_value(name) {
                None => dangling.push(name.to_string()),
                Some(value) if !kind.accepts(value) => {
                    wrong_kind.push(format!("{} (needs a {}, got {})", name, kind, value));
                }
                Some(_) => {}
            }
        }
        // a name used as both kinds appears twice in the typed set
        dangling.dedup();

        let theme_name = theme.name().to_string();
        if !dangling.is_empty() {
            return Err(StyleError::Dangling {
                theme: theme_name,
                names: dangling,
            });
        }
        if !wrong_kind.is_empty() {
            return Err(StyleError::WrongKind {
                theme: theme_name,
                names: wrong_kind,
            });
        }
        Ok(())
    }

    /// Foreground, background, and text style for a selector.
    ///
    /// Values that do not resolve are skipped.
    pub fn style(&self, selector: &str, theme: &Theme) -> Style {
        let mut style = Style::new();
        for prop in self.properties(selector) {
            match *prop {
                Property::Color(v) => {
                    if let Some(c) = resolve_color(v, theme) {
                        style = style.fg(c);
                    }
                }
                Property::Background(v) => {
                    if let Some(c) = resolve_color(v, theme) {
                        style = style.bg(c);
                    }
                }
                Property::TextStyle(v) => {
                    if let Some(m) = v.resolve(theme).and_then(Value::as_text_style) {
                        style = style.add_modifier(m);
                    }
                }
                _ => {}
            }
        }
        style
    }

    /// Border color for a selector, as a foreground style.
    pub fn border_style(&self, selector: &str, theme: &Theme) -> Style {
        self.properties(selector)
            .filter_map(|p| match *p {
                Property::Border(v) => resolve_color(v, theme),
                _ => None,
            })
            .last()
            .map_or_else(Style::new, |c| Style::new().fg(c))
    }

    /// Hatch fill for a selector, blended over the theme background.
    pub fn hatch(&self, selector: &str, theme: &Theme) -> Option<Hatch> {
        self.properties(selector).find_map(|p| match *p {
            Property::Hatch {
                glyph,
                color,
                opacity,
            } => {
                let background = theme.role(Role::Background);
                let color = resolve_color(color, theme)?;
                let mixed = blend(background, color, f32::from(opacity) / 100.0);
                Some(Hatch {
                    glyph,
                    style: Style::new().fg(mixed).bg(background),
                })
            }
            _ => None,
        })
    }

    pub fn height(&self, selector: &str) -> Option<Size> {
        self.properties(selector).find_map(|p| match *p {
            Property::Height(s) => Some(s),
            _ => None,
        })
    }

    pub fn width(&self, selector: &str) -> Option<Size> {
        self.properties(selector).find_map(|p| match *p {
            Property::Width(s) => Some(s),
            _ => None,
        })
    }
}

fn resolve_color(value: StyleValue, theme: &Theme) -> Option<Color> {
    value.resolve(theme).and_then(Value::as_color)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use ratatui::style::Modifier;

    use super::*;
    use crate::builtin;
    use crate::theme::RoleColors;

    fn role_only_theme() -> Theme {
        let roles = RoleColors {
            primary: Color::Rgb(0xff, 0x66, 0x00),
            secondary: Color::Cyan,
            accent: Color::Magenta,
            foreground: Color::White,
            background: Color::Rgb(0, 0, 0),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        };
        Theme::new("bare", roles, Vec::<(String, Value)>::new(), true).unwrap()
    }

    #[test]
    fn selectors_are_unique() {
        let selectors: BTreeSet<&str> = DEMO_STYLESHEET.rules().iter().map(|r| r.selector).collect();
        assert_eq!(selectors.len(), DEMO_STYLESHEET.rules().len());
    }

    #[test]
    fn every_reference_resolves_in_builtins() {
        for theme in builtin::all() {
            assert_eq!(DEMO_STYLESHEET.check(&theme), Ok(()), "{}", theme.name());
        }
    }

    #[test]
    fn every_reference_resolves_with_zero_variables() {
        assert_eq!(DEMO_STYLESHEET.check(&role_only_theme()), Ok(()));
    }

    #[test]
    fn nerv_sets_everything_explicitly() {
        // nerv defines its own shades, so nothing it references is derived
        let theme = builtin::nerv();
        for name in DEMO_STYLESHEET.references() {
            assert!(theme.explicit_value(name).is_some(), "{} is derived", name);
        }
    }

    #[test]
    fn dangling_reference_is_reported() {
        static RULES: [Rule; 1] = [Rule {
            selector: "Gauge",
            properties: &[Property::Color(StyleValue::Var("gauge-fill"))],
        }];
        let sheet = StyleSheet::new(&RULES);
        assert_eq!(sheet.references().into_iter().collect::<Vec<_>>(), vec!["gauge-fill"]);
        assert_eq!(
            sheet.check(&builtin::nerv()),
            Err(StyleError::Dangling {
                theme: "nerv".to_string(),
                names: vec!["gauge-fill".to_string()],
            })
        );
    }

    fn nerv_with(overrides: &[(&str, &str)]) -> Theme {
        let mut def = builtin::NERV.to_def();
        for (name, value) in overrides {
            let slot = def.variables.iter_mut().find(|(k, _)| k == name).unwrap();
            slot.1 = value.to_string();
        }
        Theme::from_def(&def).unwrap()
    }

    #[test]
    fn value_of_wrong_kind_is_reported() {
        let theme = nerv_with(&[
            ("panel-background", "bold"),
            ("block-cursor-text-style", "#ff0000"),
        ]);

        match DEMO_STYLESHEET.check(&theme) {
            Err(StyleError::WrongKind { theme, names }) => {
                assert_eq!(theme, "nerv");
                assert_eq!(names.len(), 2, "{:?}", names);
                assert!(names[0].starts_with("block-cursor-text-style"));
                assert!(names[1].starts_with("panel-background"));
            }
            other => panic!("Expected wrong-kind error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_kind_spreads_through_fallbacks() {
        // footer-background falls back to panel-background
        let mut def = builtin::TEXTUAL_DARK.to_def();
        def.variables.push(("panel-background".to_string(), "bold".to_string()));
        let theme = Theme::from_def(&def).unwrap();

        match DEMO_STYLESHEET.check(&theme) {
            Err(StyleError::WrongKind { names, .. }) => {
                assert!(names.iter().any(|n| n.starts_with("footer-background")));
                assert!(names.iter().any(|n| n.starts_with("panel-background")));
            }
            other => panic!("Expected wrong-kind error, got {:?}", other),
        }
    }

    #[test]
    fn typed_references_cover_every_reference() {
        let typed: BTreeSet<&str> = DEMO_STYLESHEET
            .typed_references()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(typed, DEMO_STYLESHEET.references());
        assert!(DEMO_STYLESHEET
            .typed_references()
            .contains(&("block-cursor-text-style", ValueKind::TextStyle)));
    }

    #[test]
    fn literal_of_wrong_kind_is_reported() {
        static RULES: [Rule; 1] = [Rule {
            selector: "Label",
            properties: &[Property::Color(StyleValue::Literal("italic"))],
        }];
        let sheet = StyleSheet::new(&RULES);
        assert_eq!(
            sheet.check(&builtin::nerv()),
            Err(StyleError::InvalidLiteral {
                selector: "Label",
                value: "italic",
            })
        );
    }

    #[test]
    fn invalid_literal_is_reported() {
        static RULES: [Rule; 1] = [Rule {
            selector: "Label",
            properties: &[Property::TextStyle(StyleValue::Literal("loud"))],
        }];
        let sheet = StyleSheet::new(&RULES);
        assert!(matches!(
            sheet.check(&builtin::nerv()),
            Err(StyleError::InvalidLiteral { .. })
        ));
    }

    #[test]
    fn panel_border_follows_primary() {
        let theme = builtin::nerv();
        assert_eq!(
            DEMO_STYLESHEET.border_style(".panel", &theme).fg,
            Some(Color::Rgb(0xff, 0x66, 0x00))
        );
    }

    #[test]
    fn cursor_style_combines_colors_and_text_style() {
        let style = DEMO_STYLESHEET.style("DataTable .cursor", &builtin::nerv());
        assert_eq!(style.bg, Some(Color::Rgb(0xff, 0x66, 0x00)));
        assert_eq!(style.fg, Some(Color::Rgb(0, 0, 0)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn unknown_selector_is_unstyled() {
        assert_eq!(DEMO_STYLESHEET.style("Marquee", &builtin::nerv()), Style::new());
        assert_eq!(DEMO_STYLESHEET.height("Marquee"), None);
    }

    #[test]
    fn sync_panel_hatch_is_dimmed_primary() {
        let hatch = DEMO_STYLESHEET.hatch("#sync-panel", &builtin::nerv()).unwrap();
        assert_eq!(hatch.glyph, CROSS_HATCH);
        // 30% of #ff6600 over black
        assert_eq!(hatch.style.fg, Some(Color::Rgb(77, 31, 0)));
        assert_eq!(hatch.style.bg, Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn sizes_map_to_constraints() {
        assert_eq!(DEMO_STYLESHEET.height("Sparkline"), Some(Size::Cells(3)));
        assert_eq!(DEMO_STYLESHEET.width(".metric-label"), Some(Size::Cells(20)));
        assert_eq!(Size::Auto.constraint(7), Constraint::Length(7));
        assert_eq!(Size::Fraction(1).constraint(0), Constraint::Fill(1));
    }
}
