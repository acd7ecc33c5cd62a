//! Geometry classification.
//!
//! Derives layout facts (alignment, first-line indent, tight-space flag)
//! purely from a region's original line geometry. Nothing here looks at the
//! translated text; the facts are properties of the source layout and stay
//! valid however the replacement text wraps.

use serde::{Deserialize, Serialize};

use crate::layout::params::FitParams;
use crate::utils::{Rect, rect_height, rect_width};

/// Horizontal text alignment inferred from the original line edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
    Justified,
}

/// Layout facts derived from a region's original geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionGeometry {
    /// Inferred horizontal alignment.
    pub alignment: Alignment,

    /// Whether the first line was indented relative to the second.
    pub first_line_indent: bool,

    /// Whether the box is small enough that the size heuristic should clamp
    /// aggressively (diagram annotations, chart nodes).
    pub tight_space: bool,
}

/// Classifies a region from its box and original line geometry.
///
/// Alignment inference compares the spread (max - min) of the left and
/// right edges across the original lines: both edges stable means the text
/// was justified, one stable edge means flush left or right, neither means
/// centered. With fewer than two lines there is no spread to measure and
/// the degenerate answer is flush left with no indent.
pub fn classify_geometry(bbox: Rect, original_lines: &[Rect], params: &FitParams) -> RegionGeometry {
    let tight_space =
        rect_width(bbox) < params.tight_width && rect_height(bbox) < params.tight_height;

    if original_lines.len() < 2 {
        return RegionGeometry {
            alignment: Alignment::Left,
            first_line_indent: false,
            tight_space,
        };
    }

    let mut left_min = f64::MAX;
    let mut left_max = f64::MIN;
    let mut right_min = f64::MAX;
    let mut right_max = f64::MIN;
    for line in original_lines {
        left_min = left_min.min(line.0);
        left_max = left_max.max(line.0);
        right_min = right_min.min(line.2);
        right_max = right_max.max(line.2);
    }
    let left_spread = left_max - left_min;
    let right_spread = right_max - right_min;

    let left_stable = left_spread < params.alignment_tolerance;
    let right_stable = right_spread < params.alignment_tolerance;
    let alignment = match (left_stable, right_stable) {
        (true, true) => Alignment::Justified,
        (true, false) => Alignment::Left,
        (false, true) => Alignment::Right,
        (false, false) => Alignment::Center,
    };

    let first_line_indent = original_lines[0].0 - original_lines[1].0 > params.indent_threshold;

    RegionGeometry {
        alignment,
        first_line_indent,
        tight_space,
    }
}
