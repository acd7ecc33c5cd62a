//! boxfit - layout-preserving text fitting for translated documents.
//!
//! Given the geometry of an extracted document (regions with bounding
//! boxes and original line layout) and a translation mapping, the engine
//! decides per region the font size, line wrap, line spacing, and
//! alignment that place the replacement text back inside the original box,
//! and reports per-region success or failure for coverage gating.

pub mod api;
pub mod error;
pub mod layout;
pub mod model;
pub mod report;
pub mod utils;

pub use api::high_level::{FitOptions, apply_translations, fit_document, fit_page};
pub use error::{FitError, Result};
pub use layout::{Alignment, FitParams};
pub use model::{DocumentInput, Page, Region, SemanticType, StyleHint, TranslationMap};
pub use report::{CoverageReport, FitResult, FitStatus, RenderLog, validate_coverage};
