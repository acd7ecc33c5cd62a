//! High-level render-pass API.
//!
//! Provides the main public entry points:
//! - `apply_translations()` - resolve the translation mapping into regions
//! - `fit_page()` - fit one page's regions sequentially
//! - `fit_document()` - fit a whole document, fanning regions out across a
//!   thread pool and merging results back into document order
//!
//! Regions are independent, so the document-level pass is embarrassingly
//! parallel; results are collected and sorted back into document order
//! before the render log is populated, so log output is deterministic
//! regardless of completion order.

use std::panic::{AssertUnwindSafe, catch_unwind};

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{FitError, Result};
use crate::layout::fit::fit_region;
use crate::layout::params::FitParams;
use crate::model::{DocumentInput, Page, Region, TranslationMap};
use crate::report::log::{FitResult, FitStatus, RenderLog};

/// Options for a document-level fit pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Fit parameters shared by every region.
    pub params: FitParams,

    /// Worker thread count. None uses all available cores.
    pub threads: Option<usize>,

    /// Process regions in parallel. Sequential runs produce the same
    /// output; this exists for debugging and single-core environments.
    pub parallel: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            params: FitParams::default(),
            threads: None,
            parallel: true,
        }
    }
}

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Fills every region's `translated_text` from the translation mapping.
///
/// Ids missing from the mapping become empty text, which the fit search
/// records as skipped with a "no translated text supplied" reason.
pub fn apply_translations(doc: &mut DocumentInput, translations: &TranslationMap) {
    for page in &mut doc.pages {
        for region in &mut page.regions {
            region.translated_text = translations
                .get(&region.id)
                .map(str::to_owned)
                .unwrap_or_default();
        }
    }
}

/// Fits one region, containing any engine fault to that region.
///
/// A panic while wrapping or measuring becomes a skipped entry carrying
/// the fault message; a single bad region must never abort the document.
fn fit_region_guarded(
    region: &Region,
    page_index: usize,
    params: &FitParams,
) -> (FitResult, Option<String>) {
    match catch_unwind(AssertUnwindSafe(|| fit_region(region, page_index, params))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let message = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unexpected engine fault".to_string()
            };
            warn!(region_id = %region.id, fault = %message, "engine fault contained");
            (
                FitResult {
                    region_id: region.id.clone(),
                    chosen_font_size: 0.0,
                    line_height: 0.0,
                    wrapped_lines: Vec::new(),
                    alignment: Default::default(),
                    first_line_indent: false,
                    font: Default::default(),
                    color: (0.0, 0.0, 0.0),
                    status: FitStatus::Skipped,
                },
                Some(format!("engine fault: {message}")),
            )
        }
    }
}

/// Fits all regions of one page sequentially, in extraction order.
pub fn fit_page(page: &Page, params: &FitParams) -> Vec<(FitResult, Option<String>)> {
    page.regions
        .iter()
        .map(|region| fit_region_guarded(region, page.page_index, params))
        .collect()
}

/// Runs a full render pass over a document.
///
/// Returns the finalized render log. The only pass-level failure is an
/// input with no regions at all; every per-region problem is recorded in
/// the log instead.
pub fn fit_document(doc: &DocumentInput, options: &FitOptions) -> Result<RenderLog> {
    if doc.region_count() == 0 {
        return Err(FitError::EmptyInput);
    }

    let work: Vec<(usize, &Region)> = doc.regions().collect();

    let outcomes: Vec<(usize, (FitResult, Option<String>))> = if options.parallel {
        let thread_count = options.threads.unwrap_or_else(default_thread_count);
        let pool = ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .map_err(|e| FitError::ThreadPool(e.to_string()))?;

        let mut outcomes: Vec<(usize, (FitResult, Option<String>))> = pool.install(|| {
            work.into_par_iter()
                .enumerate()
                .map(|(ordinal, (page_index, region))| {
                    (ordinal, fit_region_guarded(region, page_index, &options.params))
                })
                .collect()
        });
        // Merge back into document order before touching the log.
        outcomes.sort_by_key(|(ordinal, _)| *ordinal);
        outcomes
    } else {
        work.into_iter()
            .enumerate()
            .map(|(ordinal, (page_index, region))| {
                (ordinal, fit_region_guarded(region, page_index, &options.params))
            })
            .collect()
    };

    let mut log = RenderLog::new();
    for (_, (result, reason)) in outcomes {
        debug!(
            region_id = %result.region_id,
            status = ?result.status,
            size = result.chosen_font_size,
            lines = result.wrapped_lines.len(),
            "region fitted"
        );
        if result.status == FitStatus::Forced {
            warn!(region_id = %result.region_id, "region force-placed at minimum size");
        }
        log.record(result, reason);
    }
    log.finalize();
    Ok(log)
}
