//! Deterministic text measurement and line wrapping.
//!
//! The engine cannot query real font metrics (glyph embedding lives in the
//! rendering collaborator), so advances are estimated from the font size:
//! fullwidth CJK glyphs advance a full em, everything else a fixed fraction
//! of the size. The wrap is a greedy first-fit: break opportunities exist
//! at whitespace (consumed at the break) and before or after any CJK
//! character; a token wider than the line is hard-broken at character
//! granularity so no input is ever dropped.

use crate::layout::params::FitParams;
use crate::utils::EPSILON;

/// Returns true for codepoints that advance a full em in CJK faces.
fn is_fullwidth(ch: char) -> bool {
    matches!(ch,
        '\u{1100}'..='\u{115F}'     // Hangul Jamo
        | '\u{2E80}'..='\u{303E}'   // CJK radicals, Kangxi, CJK punctuation
        | '\u{3041}'..='\u{33FF}'   // kana, CJK compatibility
        | '\u{3400}'..='\u{4DBF}'   // CJK extension A
        | '\u{4E00}'..='\u{9FFF}'   // CJK unified ideographs
        | '\u{A000}'..='\u{A4CF}'   // Yi
        | '\u{AC00}'..='\u{D7A3}'   // Hangul syllables
        | '\u{F900}'..='\u{FAFF}'   // CJK compatibility ideographs
        | '\u{FE30}'..='\u{FE4F}'   // CJK compatibility forms
        | '\u{FF00}'..='\u{FF60}'   // fullwidth forms
        | '\u{FFE0}'..='\u{FFE6}'
        | '\u{20000}'..='\u{2FA1F}' // CJK extensions B and beyond
    )
}

/// Estimated advance of one character at the given font size.
#[inline]
pub fn char_advance(ch: char, font_size: f64, params: &FitParams) -> f64 {
    if is_fullwidth(ch) {
        font_size * params.cjk_width_factor
    } else {
        font_size * params.char_width_factor
    }
}

/// Estimated width of a string at the given font size.
pub fn text_width(text: &str, font_size: f64, params: &FitParams) -> f64 {
    text.chars().map(|ch| char_advance(ch, font_size, params)).sum()
}

/// Splits cleaned text into wrap tokens.
///
/// A token is either a run of non-CJK, non-space characters or a single
/// CJK character. The flag records whether whitespace preceded the token in
/// the source, so joined tokens reinsert exactly one space.
fn tokenize(text: &str) -> Vec<(bool, String)> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut pending_space = false;
    let mut word_preceded = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !word.is_empty() {
                tokens.push((word_preceded, std::mem::take(&mut word)));
            }
            pending_space = true;
        } else if is_fullwidth(ch) {
            if !word.is_empty() {
                tokens.push((word_preceded, std::mem::take(&mut word)));
            }
            tokens.push((pending_space, ch.to_string()));
            pending_space = false;
        } else {
            if word.is_empty() {
                word_preceded = pending_space;
                pending_space = false;
            }
            word.push(ch);
        }
    }
    if !word.is_empty() {
        tokens.push((word_preceded, word));
    }
    tokens
}

/// Word-wraps text into lines that each fit `max_width` at `font_size`.
///
/// Greedy and fully deterministic: identical input always produces the same
/// break positions. Returns no lines for empty text.
pub fn wrap_text(text: &str, max_width: f64, font_size: f64, params: &FitParams) -> Vec<String> {
    let space_width = char_advance(' ', font_size, params);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f64;

    for (space_before, token) in tokenize(text) {
        let token_width = text_width(&token, font_size, params);
        let sep = if current.is_empty() || !space_before {
            0.0
        } else {
            space_width
        };

        if !current.is_empty() && current_width + sep + token_width > max_width + EPSILON {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if current.is_empty() {
            if token_width <= max_width + EPSILON {
                current.push_str(&token);
                current_width = token_width;
            } else {
                // Token wider than the line: hard-break, at least one
                // character per line so the loop always advances.
                for ch in token.chars() {
                    let advance = char_advance(ch, font_size, params);
                    if !current.is_empty() && current_width + advance > max_width + EPSILON {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0.0;
                    }
                    current.push(ch);
                    current_width += advance;
                }
            }
        } else {
            if sep > 0.0 {
                current.push(' ');
            }
            current.push_str(&token);
            current_width += sep + token_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
