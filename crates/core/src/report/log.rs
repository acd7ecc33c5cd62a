//! Render log - per-pass record of every region outcome.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::layout::classify::Alignment;
use crate::layout::heuristics::FontClass;

/// Outcome of the fit search for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitStatus {
    /// The text fits the box at the chosen size.
    Fit,
    /// The text was placed at the floor size despite overflowing.
    Forced,
    /// The region was not typeset (no text, bad geometry, or a fault).
    Skipped,
}

/// Output of the fit search for one region.
///
/// Carries everything the rendering collaborator needs to paint the region
/// without re-deriving any sizing decision. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Id of the region this result belongs to.
    pub region_id: String,

    /// Final font size in points; 0.0 for skipped regions.
    pub chosen_font_size: f64,

    /// Absolute line height in layout units (size times leading).
    pub line_height: f64,

    /// Wrapped replacement text, one entry per output line.
    pub wrapped_lines: Vec<String>,

    /// Horizontal alignment, as inferred by the geometry classifier.
    pub alignment: Alignment,

    /// Whether the first output line should be indented.
    pub first_line_indent: bool,

    /// Replacement font class.
    pub font: FontClass,

    /// Text color as RGB in the 0.0-1.0 range.
    pub color: (f64, f64, f64),

    /// Fit outcome.
    pub status: FitStatus,
}

/// One render log entry: the fit result plus a diagnostic reason for
/// forced and skipped outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub result: FitResult,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Status counts derived from the entries at finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderSummary {
    pub total: usize,
    pub fit: usize,
    pub forced: usize,
    pub skipped: usize,
}

/// Process-scoped aggregate for one render pass.
///
/// Created at pass start, appended to as regions complete (in document
/// order - parallel runs merge results before recording), and finalized
/// exactly once at pass end. Entries preserve insertion order so reruns
/// serialize identically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderLog {
    entries: IndexMap<String, LogEntry>,

    #[serde(default)]
    summary: Option<RenderSummary>,
}

impl RenderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one region outcome.
    ///
    /// # Panics
    /// Panics if called after `finalize` - the log is append-only and
    /// frozen once the summary exists.
    pub fn record(&mut self, result: FitResult, reason: Option<String>) {
        assert!(self.summary.is_none(), "render log already finalized");
        self.entries
            .insert(result.region_id.clone(), LogEntry { result, reason });
    }

    /// Computes the summary and freezes the log. Idempotent.
    pub fn finalize(&mut self) {
        if self.summary.is_some() {
            return;
        }
        let mut summary = RenderSummary {
            total: self.entries.len(),
            ..Default::default()
        };
        for entry in self.entries.values() {
            match entry.result.status {
                FitStatus::Fit => summary.fit += 1,
                FitStatus::Forced => summary.forced += 1,
                FitStatus::Skipped => summary.skipped += 1,
            }
        }
        self.summary = Some(summary);
    }

    /// The summary, if the log has been finalized.
    pub fn summary(&self) -> Option<RenderSummary> {
        self.summary
    }

    /// Looks up the entry for a region id.
    pub fn get(&self, region_id: &str) -> Option<&LogEntry> {
        self.entries.get(region_id)
    }

    pub fn contains(&self, region_id: &str) -> bool {
        self.entries.contains_key(region_id)
    }

    /// Iterates entries in insertion (document) order.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.values()
    }

    /// The fit results in insertion (document) order - the stream handed
    /// to the rendering collaborator.
    pub fn results(&self) -> impl Iterator<Item = &FitResult> {
        self.entries.values().map(|e| &e.result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
