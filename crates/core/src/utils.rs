//! Miscellaneous routines shared across the engine.
//!
//! Provides:
//! - Geometric types (Point, Rect) and rectangle helpers
//! - Text cleaning for single-box typesetting
//! - Hex color parsing for style hints

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle defined by (x0, y0, x1, y1) where (x0, y0) is the bottom-left
/// corner and (x1, y1) is the top-right corner, in page coordinates.
pub type Rect = (f64, f64, f64, f64);

/// Small epsilon for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// Returns the width of a rectangle.
#[inline]
pub fn rect_width(rect: Rect) -> f64 {
    rect.2 - rect.0
}

/// Returns the height of a rectangle.
#[inline]
pub fn rect_height(rect: Rect) -> f64 {
    rect.3 - rect.1
}

/// Returns true when the rectangle has positive extent on both axes.
#[inline]
pub fn is_valid_rect(rect: Rect) -> bool {
    rect.2 - rect.0 > 0.0 && rect.3 - rect.1 > 0.0
}

/// Normalizes text for rendering inside a single box.
///
/// Translated text may carry newlines and irregular spacing from the
/// translation collaborator; the wrap algorithm owns all line breaks, so
/// existing breaks are folded into single spaces and the result is trimmed.
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

/// Parses a `#rrggbb` hex color into an RGB triple in the 0.0-1.0 range.
///
/// Invalid or missing input falls back to black, matching what the
/// downstream writer would paint when no color is known.
pub fn hex_to_rgb(hex: &str) -> (f64, f64, f64) {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return (0.0, 0.0, 0.0);
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).unwrap_or(0) as f64 / 255.0
    };
    (channel(0..2), channel(2..4), channel(4..6))
}
