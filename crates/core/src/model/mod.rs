//! Data model for the fitting engine.
//!
//! This module contains:
//! - Region types describing translatable units (Region, SemanticType, StyleHint)
//! - Document input structures matching the extraction collaborator's output
//! - The translation mapping consumed from the translation collaborator

pub mod region;
pub mod translation;

pub use region::{DocumentInput, Page, Region, SemanticType, StyleHint};
pub use translation::TranslationMap;
