//! Region model - read-only input created by the extraction collaborator.

use serde::{Deserialize, Serialize};

use crate::utils::{Rect, is_valid_rect};

/// Semantic classification of a region, as assigned by the extraction
/// collaborator.
///
/// Only the first four variants carry their own sizing rules; everything
/// else (page furniture, table cells, margin notes) shares the small-text
/// default. Unknown type strings deserialize to `Other` so a newer
/// extractor cannot break the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Heading,
    #[default]
    Body,
    Caption,
    Label,
    Sidebar,
    Header,
    Footer,
    Table,
    Other,
}

impl<'de> Deserialize<'de> for SemanticType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(match name.as_str() {
            "heading" => Self::Heading,
            "body" => Self::Body,
            "caption" => Self::Caption,
            "label" => Self::Label,
            "sidebar" => Self::Sidebar,
            "header" => Self::Header,
            "footer" => Self::Footer,
            "table" => Self::Table,
            _ => Self::Other,
        })
    }
}

/// Advisory font metrics captured from the source document.
///
/// The size heuristic may override all of these; they never constrain the
/// fit search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleHint {
    /// Dominant font size of the original spans, in points.
    #[serde(default)]
    pub size: Option<f64>,

    /// Whether the dominant original font was bold.
    #[serde(default)]
    pub bold: bool,

    /// Whether the dominant original font was italic.
    #[serde(default)]
    pub italic: bool,

    /// Whether the dominant original font was a serif face.
    #[serde(default)]
    pub serif: bool,

    /// Dominant text color as a `#rrggbb` hex string.
    #[serde(default)]
    pub color: Option<String>,
}

/// One translatable unit on a page.
///
/// The geometry fields are original (untranslated) layout facts and are
/// never mutated by the engine. `translated_text` is filled in from the
/// translation mapping before the fit pass runs; an empty string means the
/// region is skipped, not that the pass failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Stable identifier, unique within a page.
    pub id: String,

    /// Semantic classification from the extraction collaborator.
    #[serde(rename = "type", default)]
    pub semantic_type: SemanticType,

    /// Axis-aligned bounding box (x0, y0, x1, y1) in page coordinates.
    pub bbox: Rect,

    /// Line bounding boxes from the source layout, in reading order.
    /// Used only for geometry classification.
    #[serde(default)]
    pub original_lines: Vec<Rect>,

    /// Replacement text for the region. The extraction layer's `content`
    /// field lands here so a pre-translated layer can be fed directly.
    #[serde(alias = "content", default)]
    pub translated_text: String,

    /// Original font metrics, advisory only.
    #[serde(rename = "style", default)]
    pub style_hint: Option<StyleHint>,
}

impl Region {
    /// Returns true when the bounding box has positive extent on both axes.
    pub fn has_valid_geometry(&self) -> bool {
        is_valid_rect(self.bbox)
    }
}

/// One page of extraction output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based page index within the document.
    pub page_index: usize,

    /// Page width in page coordinates.
    #[serde(default)]
    pub width: f64,

    /// Page height in page coordinates.
    #[serde(default)]
    pub height: f64,

    /// Regions on this page, in extraction order.
    #[serde(alias = "blocks", default)]
    pub regions: Vec<Region>,
}

/// The extraction collaborator's per-document record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Source document name, informational only.
    #[serde(default)]
    pub filename: String,

    /// Page count reported by the extractor.
    #[serde(default)]
    pub total_pages: usize,

    /// Pages in document order.
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl DocumentInput {
    /// Total number of regions across all pages.
    pub fn region_count(&self) -> usize {
        self.pages.iter().map(|p| p.regions.len()).sum()
    }

    /// Iterates over all regions in document order with their page index.
    pub fn regions(&self) -> impl Iterator<Item = (usize, &Region)> {
        self.pages
            .iter()
            .flat_map(|p| p.regions.iter().map(move |r| (p.page_index, r)))
    }

    /// Collects every region id in document order.
    pub fn region_ids(&self) -> Vec<String> {
        self.regions().map(|(_, r)| r.id.clone()).collect()
    }
}
