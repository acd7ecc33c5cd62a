//! Coverage validation.
//!
//! Cross-checks a finalized render log against the set of regions the
//! extraction collaborator produced, to catch content that was silently
//! dropped. A region that never reached the log at all ("missing") is a
//! more severe condition than a skipped one: skipped regions were seen and
//! rejected for a recorded reason, missing ones were never attempted.

use itertools::Itertools as _;
use serde::{Deserialize, Serialize};

use crate::report::log::{FitStatus, RenderLog};

/// Default coverage percentage required for a pass to gate as successful.
pub const DEFAULT_COVERAGE_THRESHOLD: f64 = 95.0;

/// Outcome of validating a render log against the extraction input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Number of regions the extraction collaborator produced.
    pub total_regions: usize,

    /// Regions placed at a fitting size.
    pub fit: usize,

    /// Regions force-placed at the floor size.
    pub forced: usize,

    /// Regions recorded but not typeset.
    pub skipped: usize,

    /// Fraction of extracted regions that were placed (fit or forced),
    /// in the 0.0-1.0 range.
    pub coverage: f64,

    /// Extracted region ids with no log entry at all - not attempted.
    pub missing: Vec<String>,

    /// Region ids that were force-placed, for operator follow-up.
    pub forced_ids: Vec<String>,
}

impl CoverageReport {
    /// Coverage as a percentage.
    pub fn coverage_percent(&self) -> f64 {
        self.coverage * 100.0
    }

    /// Whether the pass clears the given percentage threshold with no
    /// missing regions.
    pub fn passes(&self, threshold_percent: f64) -> bool {
        self.missing.is_empty() && self.coverage_percent() >= threshold_percent
    }
}

/// Validates a render log against the extracted region ids.
///
/// `extracted_ids` is the full id set the extraction collaborator reported
/// for the document, in any order; the missing list comes back sorted for
/// stable output.
pub fn validate_coverage(extracted_ids: &[String], log: &RenderLog) -> CoverageReport {
    let total_regions = extracted_ids.len();

    let mut fit = 0;
    let mut forced = 0;
    let mut skipped = 0;
    let mut forced_ids = Vec::new();
    for entry in log.entries() {
        match entry.result.status {
            FitStatus::Fit => fit += 1,
            FitStatus::Forced => {
                forced += 1;
                forced_ids.push(entry.result.region_id.clone());
            }
            FitStatus::Skipped => skipped += 1,
        }
    }

    let missing: Vec<String> = extracted_ids
        .iter()
        .filter(|id| !log.contains(id))
        .cloned()
        .sorted()
        .collect();

    let coverage = if total_regions > 0 {
        (fit + forced) as f64 / total_regions as f64
    } else {
        0.0
    };

    CoverageReport {
        total_regions,
        fit,
        forced,
        skipped,
        coverage,
        missing,
        forced_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::classify::Alignment;
    use crate::layout::heuristics::FontClass;
    use crate::report::log::FitResult;

    fn result(id: &str, status: FitStatus) -> FitResult {
        FitResult {
            region_id: id.into(),
            chosen_font_size: 9.0,
            line_height: 10.8,
            wrapped_lines: vec![],
            alignment: Alignment::Left,
            first_line_indent: false,
            font: FontClass::SansRegular,
            color: (0.0, 0.0, 0.0),
            status,
        }
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_coverage() {
        let mut log = RenderLog::new();
        log.record(result("a", FitStatus::Fit), None);
        log.record(result("b", FitStatus::Forced), Some("too tall".into()));
        log.finalize();

        let report = validate_coverage(&ids(&["a", "b"]), &log);
        assert_eq!(report.coverage, 1.0);
        assert!(report.missing.is_empty());
        assert_eq!(report.forced_ids, vec!["b".to_string()]);
        assert!(report.passes(95.0));
    }

    #[test]
    fn test_skipped_regions_lower_coverage_but_are_not_missing() {
        let mut log = RenderLog::new();
        log.record(result("a", FitStatus::Fit), None);
        log.record(result("b", FitStatus::Skipped), Some("no translated text supplied".into()));
        log.finalize();

        let report = validate_coverage(&ids(&["a", "b"]), &log);
        assert_eq!(report.coverage, 0.5);
        assert!(report.missing.is_empty());
        assert_eq!(report.skipped, 1);
        assert!(!report.passes(95.0));
    }

    #[test]
    fn test_missing_regions_detected_and_sorted() {
        let mut log = RenderLog::new();
        log.record(result("b", FitStatus::Fit), None);
        log.finalize();

        let report = validate_coverage(&ids(&["c", "b", "a"]), &log);
        assert_eq!(report.missing, ids(&["a", "c"]));
        // Even at high coverage, missing regions fail the gate.
        assert!(!report.passes(30.0));
    }

    #[test]
    fn test_empty_extraction_has_zero_coverage() {
        let mut log = RenderLog::new();
        log.finalize();
        let report = validate_coverage(&[], &log);
        assert_eq!(report.coverage, 0.0);
        assert_eq!(report.total_regions, 0);
    }

    #[test]
    fn test_threshold_boundary() {
        let mut log = RenderLog::new();
        for i in 0..19 {
            log.record(result(&format!("r{i:02}"), FitStatus::Fit), None);
        }
        log.record(result("r19", FitStatus::Skipped), Some("no text".into()));
        log.finalize();

        let extracted: Vec<String> = (0..20).map(|i| format!("r{i:02}")).collect();
        let report = validate_coverage(&extracted, &log);
        assert_eq!(report.coverage_percent(), 95.0);
        assert!(report.passes(95.0));
        assert!(!report.passes(96.0));
    }
}
