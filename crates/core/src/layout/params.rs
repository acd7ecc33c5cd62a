//! Fit parameters.
//!
//! Contains the FitParams struct for controlling classification and
//! fit-search behavior.

/// Parameters for geometry classification and the fit search.
///
/// All heuristic constants live here so callers can tune them per document
/// family; the defaults were calibrated against typical single-column
/// technical documents. Passing the struct explicitly keeps the engine free
/// of ambient global state.
#[derive(Debug, Clone, PartialEq)]
pub struct FitParams {
    /// Maximum spread of line edges (max - min, in layout units) for an
    /// edge to count as aligned during alignment inference.
    pub alignment_tolerance: f64,

    /// Minimum overhang of the first line's left edge past the second
    /// line's, in layout units, to count as a first-line indent.
    pub indent_threshold: f64,

    /// Box width below which a region may be flagged as tight space.
    pub tight_width: f64,

    /// Box height below which a region may be flagged as tight space.
    pub tight_height: f64,

    /// Starting size for a heading on the first page.
    pub heading_first_page_size: f64,

    /// Starting size for headings on any later page.
    pub heading_size: f64,

    /// Starting size for full-width body paragraphs.
    pub body_size: f64,

    /// Starting size for captions, labels, and narrow body text.
    pub small_size: f64,

    /// Body boxes narrower than this take the small-text starting size.
    pub narrow_width: f64,

    /// Boxes shorter than this take the small-text starting size and the
    /// compressed line-height multiplier.
    pub short_height: f64,

    /// Ceiling applied to the starting size in tight-space boxes.
    pub tight_cap: f64,

    /// Floor for the fit search; text is force-placed at this size when
    /// nothing larger fits.
    pub min_size: f64,

    /// Horizontal interior padding, per side.
    pub pad_x: f64,

    /// Vertical interior padding, per side.
    pub pad_y: f64,

    /// Padding is only applied on an axis when the box extent on that axis
    /// exceeds this value; very small boxes are used as-is.
    pub pad_min_extent: f64,

    /// Font sizes below this take the near-compressed line-height
    /// multiplier.
    pub small_font_threshold: f64,

    /// Candidate sizes above this band shrink by `coarse_step`.
    pub coarse_above: f64,

    /// Candidate sizes above this band (and not in the coarse band) shrink
    /// by `medium_step`; below it they shrink by `fine_step`.
    pub medium_above: f64,

    /// Shrink step in the coarse band.
    pub coarse_step: f64,

    /// Shrink step in the medium band.
    pub medium_step: f64,

    /// Shrink step in the fine band.
    pub fine_step: f64,

    /// Estimated advance of a regular character, as a fraction of the font
    /// size.
    pub char_width_factor: f64,

    /// Estimated advance of a CJK/fullwidth character, as a fraction of the
    /// font size.
    pub cjk_width_factor: f64,

    /// When set, a region with an extracted size hint starts from that size
    /// scaled by `style_hint_scale` instead of the type-based default.
    pub honor_style_hints: bool,

    /// Scale applied to style-hint sizes; replacement glyphs tend to run
    /// slightly wider than the source.
    pub style_hint_scale: f64,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            alignment_tolerance: 5.0,
            indent_threshold: 15.0,
            tight_width: 40.0,
            tight_height: 15.0,
            heading_first_page_size: 24.0,
            heading_size: 16.0,
            body_size: 10.5,
            small_size: 9.0,
            narrow_width: 130.0,
            short_height: 20.0,
            tight_cap: 7.0,
            min_size: 3.0,
            pad_x: 2.0,
            pad_y: 1.0,
            pad_min_extent: 10.0,
            small_font_threshold: 8.0,
            coarse_above: 10.0,
            medium_above: 6.0,
            coarse_step: 0.5,
            medium_step: 0.25,
            fine_step: 0.1,
            char_width_factor: 0.6,
            cjk_width_factor: 1.0,
            honor_style_hints: false,
            style_hint_scale: 0.95,
        }
    }
}
