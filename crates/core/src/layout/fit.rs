//! Fit-search engine.
//!
//! The shrink-to-fit loop: wrap the translated text at a candidate size,
//! measure the wrapped height against the padded box, and step the size
//! down until it fits or the floor is reached. Step sizes are banded:
//! coarse while the text is obviously oversized, fine near the floor where
//! a tenth of a point decides whether a diagram label fits.

use crate::layout::classify::{Alignment, classify_geometry};
use crate::layout::heuristics::{select_font, start_size};
use crate::layout::params::FitParams;
use crate::layout::wrap::wrap_text;
use crate::model::Region;
use crate::report::log::{FitResult, FitStatus};
use crate::utils::{EPSILON, Rect, hex_to_rgb, rect_height, rect_width};

/// Reason recorded when a region is force-placed at the floor size.
pub const REASON_MIN_SIZE: &str = "exceeds available height at minimum size";

/// Reason recorded when a region has no translated text.
pub const REASON_NO_TEXT: &str = "no translated text supplied";

/// Reason recorded when a region's box is degenerate.
pub const REASON_BAD_GEOMETRY: &str = "invalid geometry";

/// Line-height multiplier for the current candidate size.
///
/// Short boxes get compressed leading so a second line still has a chance;
/// small faces get near-compressed leading; everything else keeps the
/// normal leading of running text. Evaluated on every iteration because the
/// answer changes as the candidate shrinks past the small-font threshold.
pub fn line_height_multiplier(box_height: f64, font_size: f64, params: &FitParams) -> f64 {
    if box_height < params.short_height {
        1.0
    } else if font_size < params.small_font_threshold {
        1.05
    } else {
        1.2
    }
}

/// Insets the region box by the interior padding.
///
/// Computed from the original box only; callers must not pass an already
/// padded box, which would compound the inset. Boxes at or below the
/// minimum extent are used as-is, there is nothing left to pad.
pub fn padded_box(bbox: Rect, params: &FitParams) -> Rect {
    if rect_width(bbox) > params.pad_min_extent && rect_height(bbox) > params.pad_min_extent {
        (
            bbox.0 + params.pad_x,
            bbox.1 + params.pad_y,
            bbox.2 - params.pad_x,
            bbox.3 - params.pad_y,
        )
    } else {
        bbox
    }
}

/// Next candidate size below the given one, per the step bands.
pub fn next_candidate(size: f64, params: &FitParams) -> f64 {
    if size > params.coarse_above {
        size - params.coarse_step
    } else if size > params.medium_above {
        size - params.medium_step
    } else {
        size - params.fine_step
    }
}

fn skipped(region: &Region, params: &FitParams, reason: &str) -> (FitResult, Option<String>) {
    let color = region
        .style_hint
        .as_ref()
        .and_then(|h| h.color.as_deref())
        .map(hex_to_rgb)
        .unwrap_or((0.0, 0.0, 0.0));
    (
        FitResult {
            region_id: region.id.clone(),
            chosen_font_size: 0.0,
            line_height: 0.0,
            wrapped_lines: Vec::new(),
            alignment: Alignment::Left,
            first_line_indent: false,
            font: select_font(region, params),
            color,
            status: FitStatus::Skipped,
        },
        Some(reason.to_string()),
    )
}

/// Runs the fit search for a single region.
///
/// Returns the fit result plus a diagnostic reason for forced and skipped
/// outcomes. Pure function of its inputs: identical region and parameters
/// always produce the same size and the same break positions.
pub fn fit_region(
    region: &Region,
    page_index: usize,
    params: &FitParams,
) -> (FitResult, Option<String>) {
    if !region.has_valid_geometry() {
        return skipped(region, params, REASON_BAD_GEOMETRY);
    }

    let text = crate::utils::clean_text(&region.translated_text);
    if text.is_empty() {
        return skipped(region, params, REASON_NO_TEXT);
    }

    let geometry = classify_geometry(region.bbox, &region.original_lines, params);
    let start = start_size(region, page_index, geometry.tight_space, params);
    let font = select_font(region, params);
    let color = region
        .style_hint
        .as_ref()
        .and_then(|h| h.color.as_deref())
        .map(hex_to_rgb)
        .unwrap_or((0.0, 0.0, 0.0));

    let padded = padded_box(region.bbox, params);
    let avail_width = rect_width(padded);
    let avail_height = rect_height(padded);
    // The line-height policy keys on the tightness of the region box
    // itself, not the padded interior.
    let box_height = rect_height(region.bbox);

    let mut candidate = start;
    loop {
        let lines = wrap_text(&text, avail_width, candidate, params);
        let multiplier = line_height_multiplier(box_height, candidate, params);
        let line_height = candidate * multiplier;
        let total_height = lines.len() as f64 * line_height;

        if total_height <= avail_height + EPSILON {
            return (
                FitResult {
                    region_id: region.id.clone(),
                    chosen_font_size: candidate,
                    line_height,
                    wrapped_lines: lines,
                    alignment: geometry.alignment,
                    first_line_indent: geometry.first_line_indent,
                    font,
                    color,
                    status: FitStatus::Fit,
                },
                None,
            );
        }

        let next = next_candidate(candidate, params);
        if next + EPSILON < params.min_size {
            if candidate > params.min_size + EPSILON {
                // One last attempt exactly at the floor.
                candidate = params.min_size;
            } else {
                // Force-place at the floor; re-wrap at the exact floor size
                // so the recorded result is independent of step rounding.
                let floor = params.min_size;
                let lines = wrap_text(&text, avail_width, floor, params);
                let line_height = floor * line_height_multiplier(box_height, floor, params);
                return (
                    FitResult {
                        region_id: region.id.clone(),
                        chosen_font_size: floor,
                        line_height,
                        wrapped_lines: lines,
                        alignment: geometry.alignment,
                        first_line_indent: geometry.first_line_indent,
                        font,
                        color,
                        status: FitStatus::Forced,
                    },
                    Some(REASON_MIN_SIZE.to_string()),
                );
            }
        } else {
            candidate = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SemanticType;

    fn region(semantic_type: SemanticType, bbox: Rect, text: &str) -> Region {
        Region {
            id: "r0".into(),
            semantic_type,
            bbox,
            original_lines: vec![],
            translated_text: text.into(),
            style_hint: None,
        }
    }

    #[test]
    fn test_line_height_bands() {
        let p = FitParams::default();
        // Scenario C: a 15-unit box is compressed at every size.
        assert_eq!(line_height_multiplier(15.0, 24.0, &p), 1.0);
        assert_eq!(line_height_multiplier(15.0, 3.0, &p), 1.0);
        assert_eq!(line_height_multiplier(100.0, 7.0, &p), 1.05);
        assert_eq!(line_height_multiplier(100.0, 10.5, &p), 1.2);
    }

    #[test]
    fn test_padded_box_is_inset_once() {
        let p = FitParams::default();
        assert_eq!(padded_box((10.0, 10.0, 110.0, 60.0), &p), (12.0, 11.0, 108.0, 59.0));
        // Boxes at or below the minimum extent are not padded.
        assert_eq!(padded_box((0.0, 0.0, 8.0, 8.0), &p), (0.0, 0.0, 8.0, 8.0));
        assert_eq!(padded_box((0.0, 0.0, 100.0, 9.0), &p), (0.0, 0.0, 100.0, 9.0));
    }

    #[test]
    fn test_next_candidate_bands() {
        let p = FitParams::default();
        assert!((next_candidate(24.0, &p) - 23.5).abs() < EPSILON);
        assert!((next_candidate(10.5, &p) - 10.0).abs() < EPSILON);
        // 10.0 sits in the medium band, 6.0 in the fine band.
        assert!((next_candidate(10.0, &p) - 9.75).abs() < EPSILON);
        assert!((next_candidate(6.0, &p) - 5.9).abs() < EPSILON);
        assert!((next_candidate(3.05, &p) - 2.95).abs() < EPSILON);
    }

    #[test]
    fn test_heading_fits_at_full_size() {
        // Scenario A: first-page heading in a generous box keeps 24pt.
        let r = region(SemanticType::Heading, (72.0, 700.0, 540.0, 760.0), "Document Title");
        let (result, reason) = fit_region(&r, 0, &FitParams::default());
        assert_eq!(result.status, FitStatus::Fit);
        assert_eq!(result.chosen_font_size, 24.0);
        assert_eq!(result.wrapped_lines, vec!["Document Title"]);
        assert!(reason.is_none());
    }

    #[test]
    fn test_shrinks_until_text_fits() {
        // A paragraph that cannot fit at 10.5 in a 3-line-tall box.
        let text = "one two three four five six seven eight nine ten eleven twelve \
                    thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty";
        let r = region(SemanticType::Body, (72.0, 600.0, 272.0, 650.0), text);
        let (result, _) = fit_region(&r, 0, &FitParams::default());
        assert_eq!(result.status, FitStatus::Fit);
        assert!(result.chosen_font_size < 10.5);
        assert!(result.chosen_font_size >= 3.0);
        // The recorded layout is consistent with the fit condition.
        let padded_height = 48.0;
        let total = result.wrapped_lines.len() as f64 * result.line_height;
        assert!(total <= padded_height + EPSILON);
    }

    #[test]
    fn test_overflow_forces_floor_size() {
        // Scenario D: far too much text for a tiny box.
        let text = "word ".repeat(400);
        let r = region(SemanticType::Body, (72.0, 600.0, 122.0, 615.0), &text);
        let (result, reason) = fit_region(&r, 0, &FitParams::default());
        assert_eq!(result.status, FitStatus::Forced);
        assert_eq!(result.chosen_font_size, 3.0);
        assert!(reason.unwrap().contains("minimum size"));
        assert!(!result.wrapped_lines.is_empty());
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let r = region(SemanticType::Body, (72.0, 600.0, 272.0, 650.0), "   \n ");
        let (result, reason) = fit_region(&r, 0, &FitParams::default());
        assert_eq!(result.status, FitStatus::Skipped);
        assert_eq!(reason.as_deref(), Some(REASON_NO_TEXT));
        assert!(result.wrapped_lines.is_empty());
    }

    #[test]
    fn test_invalid_geometry_is_skipped() {
        let r = region(SemanticType::Body, (272.0, 600.0, 72.0, 650.0), "text");
        let (result, reason) = fit_region(&r, 0, &FitParams::default());
        assert_eq!(result.status, FitStatus::Skipped);
        assert_eq!(reason.as_deref(), Some(REASON_BAD_GEOMETRY));
    }

    #[test]
    fn test_chosen_size_never_exceeds_start() {
        let text = "some moderately long run of words that wraps a few times";
        for height in [12.0, 20.0, 30.0, 60.0, 200.0] {
            let r = region(SemanticType::Body, (0.0, 0.0, 150.0, height), text);
            let (result, _) = fit_region(&r, 0, &FitParams::default());
            assert!(result.chosen_font_size <= 10.5);
            assert!(result.chosen_font_size >= 3.0);
        }
    }

    #[test]
    fn test_fit_region_is_deterministic() {
        let text = "翻譯後的文字必須放回原本的版面位置 with some latin mixed in";
        let r = region(SemanticType::Body, (72.0, 600.0, 200.0, 640.0), text);
        let first = fit_region(&r, 0, &FitParams::default());
        let second = fit_region(&r, 0, &FitParams::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_alignment_carried_from_geometry() {
        let mut r = region(SemanticType::Body, (72.0, 500.0, 540.0, 700.0), "a few words here");
        r.original_lines = vec![
            (72.0, 672.0, 540.0, 684.0),
            (72.0, 658.0, 539.0, 670.0),
            (72.0, 644.0, 540.0, 656.0),
        ];
        let (result, _) = fit_region(&r, 0, &FitParams::default());
        assert_eq!(result.alignment, Alignment::Justified);
    }
}
