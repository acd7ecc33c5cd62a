//! High-level API module.

pub mod high_level;

pub use high_level::{FitOptions, apply_translations, fit_document, fit_page};
