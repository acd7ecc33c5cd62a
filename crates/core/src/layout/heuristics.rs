//! Size heuristic and font-class policy.
//!
//! Chooses the fit search's first candidate size from a region's semantic
//! type and box dimensions, and picks the replacement font class from the
//! style hints. Headings start generous since they rarely sit in tight
//! diagrams; body and caption defaults are tuned to typical document
//! proportions; tight-space boxes are capped up front so the search does
//! not waste iterations walking down from sizes that obviously cannot fit.

use serde::{Deserialize, Serialize};

use crate::layout::params::FitParams;
use crate::model::{Region, SemanticType};
use crate::utils::{rect_height, rect_width};

/// Replacement font classes available to the rendering collaborator.
///
/// Serialized names match the writer's font registry keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontClass {
    #[default]
    #[serde(rename = "sans-reg")]
    SansRegular,
    #[serde(rename = "sans-bold")]
    SansBold,
    #[serde(rename = "serif")]
    Serif,
}

/// Chooses the fit search's starting font size for a region.
///
/// The rules form an ordered list and are evaluated top to bottom; the
/// tight-space cap applies last, over whatever the earlier rules chose:
///
/// 1. heading: first page gets the title size, later pages the section size
/// 2. caption: small size
/// 3. body: small size in narrow or short boxes, else the body size
/// 4. any other type: small size
/// 5. tight space: cap the result
///
/// When `honor_style_hints` is set and the region carries an extracted
/// size, that size (scaled) replaces the type-based choice before the cap.
pub fn start_size(
    region: &Region,
    page_index: usize,
    tight_space: bool,
    params: &FitParams,
) -> f64 {
    let width = rect_width(region.bbox);
    let height = rect_height(region.bbox);

    let mut size = match region.semantic_type {
        SemanticType::Heading => {
            if page_index == 0 {
                params.heading_first_page_size
            } else {
                params.heading_size
            }
        }
        SemanticType::Caption => params.small_size,
        SemanticType::Body => {
            if width < params.narrow_width || height < params.short_height {
                params.small_size
            } else {
                params.body_size
            }
        }
        _ => params.small_size,
    };

    if params.honor_style_hints
        && let Some(hint_size) = region.style_hint.as_ref().and_then(|h| h.size)
        && hint_size > 0.0
    {
        size = hint_size * params.style_hint_scale;
    }

    if tight_space {
        size = size.min(params.tight_cap);
    }

    size
}

/// Picks the replacement font class for a region.
///
/// Bold originals and headings map to the bold sans face; full-width body
/// paragraphs keep a serif face for readability; labels, captions, and
/// page furniture use the regular sans face. Body text in a narrow or
/// short box is treated as a label (table cell, chart node) rather than a
/// paragraph.
pub fn select_font(region: &Region, params: &FitParams) -> FontClass {
    let bold_hint = region.style_hint.as_ref().is_some_and(|h| h.bold);
    if bold_hint || region.semantic_type == SemanticType::Heading {
        return FontClass::SansBold;
    }
    if region.semantic_type == SemanticType::Body {
        let width = rect_width(region.bbox);
        let height = rect_height(region.bbox);
        if width >= params.narrow_width && height >= params.short_height {
            return FontClass::Serif;
        }
    }
    FontClass::SansRegular
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StyleHint;

    fn region(semantic_type: SemanticType, width: f64, height: f64) -> Region {
        Region {
            id: "r".into(),
            semantic_type,
            bbox: (0.0, 0.0, width, height),
            original_lines: vec![],
            translated_text: "text".into(),
            style_hint: None,
        }
    }

    #[test]
    fn test_heading_first_page() {
        let params = FitParams::default();
        let r = region(SemanticType::Heading, 400.0, 60.0);
        assert_eq!(start_size(&r, 0, false, &params), 24.0);
        assert_eq!(start_size(&r, 3, false, &params), 16.0);
    }

    #[test]
    fn test_caption_and_other_types() {
        let params = FitParams::default();
        assert_eq!(start_size(&region(SemanticType::Caption, 300.0, 40.0), 0, false, &params), 9.0);
        assert_eq!(start_size(&region(SemanticType::Label, 300.0, 40.0), 0, false, &params), 9.0);
        assert_eq!(start_size(&region(SemanticType::Sidebar, 300.0, 40.0), 0, false, &params), 9.0);
        assert_eq!(start_size(&region(SemanticType::Footer, 300.0, 40.0), 0, false, &params), 9.0);
        assert_eq!(start_size(&region(SemanticType::Other, 300.0, 40.0), 0, false, &params), 9.0);
    }

    #[test]
    fn test_body_narrow_and_short_boxes() {
        let params = FitParams::default();
        // Full-width paragraph.
        assert_eq!(start_size(&region(SemanticType::Body, 450.0, 120.0), 0, false, &params), 10.5);
        // Narrow box (table cell).
        assert_eq!(start_size(&region(SemanticType::Body, 120.0, 120.0), 0, false, &params), 9.0);
        // Short box (single ruled line).
        assert_eq!(start_size(&region(SemanticType::Body, 450.0, 18.0), 0, false, &params), 9.0);
    }

    #[test]
    fn test_tight_space_caps_any_type() {
        let params = FitParams::default();
        // Scenario B: a 35x10 box ends at or below 7 regardless of type.
        for ty in [
            SemanticType::Heading,
            SemanticType::Body,
            SemanticType::Caption,
            SemanticType::Label,
        ] {
            let size = start_size(&region(ty, 35.0, 10.0), 0, true, &params);
            assert!(size <= 7.0, "{ty:?} started at {size}");
        }
    }

    #[test]
    fn test_style_hint_ignored_by_default() {
        let params = FitParams::default();
        let mut r = region(SemanticType::Body, 450.0, 120.0);
        r.style_hint = Some(StyleHint {
            size: Some(14.0),
            ..Default::default()
        });
        assert_eq!(start_size(&r, 0, false, &params), 10.5);
    }

    #[test]
    fn test_style_hint_honored_when_enabled() {
        let params = FitParams {
            honor_style_hints: true,
            ..FitParams::default()
        };
        let mut r = region(SemanticType::Body, 450.0, 120.0);
        r.style_hint = Some(StyleHint {
            size: Some(14.0),
            ..Default::default()
        });
        let size = start_size(&r, 0, false, &params);
        assert!((size - 13.3).abs() < 1e-9);
        // The tight-space cap still wins over the hint.
        assert_eq!(start_size(&r, 0, true, &params), 7.0);
    }

    #[test]
    fn test_select_font_policy() {
        let params = FitParams::default();
        assert_eq!(select_font(&region(SemanticType::Heading, 400.0, 60.0), &params), FontClass::SansBold);
        assert_eq!(select_font(&region(SemanticType::Body, 450.0, 120.0), &params), FontClass::Serif);
        // Narrow body boxes are labels, not paragraphs.
        assert_eq!(select_font(&region(SemanticType::Body, 100.0, 120.0), &params), FontClass::SansRegular);
        assert_eq!(select_font(&region(SemanticType::Caption, 300.0, 40.0), &params), FontClass::SansRegular);

        let mut bold_caption = region(SemanticType::Caption, 300.0, 40.0);
        bold_caption.style_hint = Some(StyleHint {
            bold: true,
            ..Default::default()
        });
        assert_eq!(select_font(&bold_caption, &params), FontClass::SansBold);
    }
}
