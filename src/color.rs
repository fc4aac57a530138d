//! Color and text-style parsing, formatting, and blending.
//!
//! Parsing is delegated to ratatui's `Color: FromStr`, which accepts
//! `#rrggbb`, ANSI color names, and 0-255 palette indices. Blending only
//! works on RGB colors; named colors have no channel values to mix.

use ratatui::style::{Color, Modifier};

/// Text-style keywords and the modifier each one sets.
const TEXT_STYLES: [(&str, Modifier); 7] = [
    ("bold", Modifier::BOLD),
    ("dim", Modifier::DIM),
    ("italic", Modifier::ITALIC),
    ("underline", Modifier::UNDERLINED),
    ("blink", Modifier::SLOW_BLINK),
    ("reverse", Modifier::REVERSED),
    ("strike", Modifier::CROSSED_OUT),
];

// ============================================================================
// PARSING
// ============================================================================

/// Parse a color string.
pub fn parse_color(s: &str) -> Result<Color, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }
    trimmed
        .parse::<Color>()
        .map_err(|_| format!("invalid color: {:?}", s))
}

/// Parse a whitespace-separated list of text-style keywords.
///
/// `"none"` yields an empty modifier. Returns None if any word is not a
/// keyword, so callers can fall through to color parsing.
pub fn parse_text_style(s: &str) -> Option<Modifier> {
    let mut words = s.split_whitespace().peekable();
    words.peek()?;

    let mut modifier = Modifier::empty();
    for word in words {
        if word == "none" {
            continue;
        }
        let (_, m) = TEXT_STYLES.iter().find(|(name, _)| *name == word)?;
        modifier |= *m;
    }
    Some(modifier)
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format a color so that [`parse_color`] reads it back.
///
/// RGB colors become lowercase `#rrggbb`.
pub fn color_to_string(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        Color::Indexed(i) => i.to_string(),
        other => other.to_string().to_lowercase(),
    }
}

/// Format a modifier as text-style keywords.
pub fn text_style_to_string(modifier: Modifier) -> String {
    let words: Vec<&str> = TEXT_STYLES
        .iter()
        .filter(|(_, m)| modifier.contains(*m))
        .map(|(name, _)| *name)
        .collect();
    if words.is_empty() {
        "none".to_string()
    } else {
        words.join(" ")
    }
}

// ============================================================================
// BLENDING
// ============================================================================

/// Linear blend from `a` toward `b`. `t` is clamped to 0.0..=1.0.
///
/// Returns `a` unchanged unless both colors are RGB.
pub fn blend(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |x: u8, y: u8| -> u8 {
                (x as f32 + (y as f32 - x as f32) * t).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => a,
    }
}

/// Blend toward black.
pub fn darken(color: Color, amount: f32) -> Color {
    blend(color, Color::Rgb(0, 0, 0), amount)
}

/// Blend toward white.
pub fn lighten(color: Color, amount: f32) -> Color {
    blend(color, Color::Rgb(0xff, 0xff, 0xff), amount)
}

// ============================================================================
// TESTS
// ============================================================================
