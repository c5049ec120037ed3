//! Scoring module - preprocessing, prompts, and the CLIP engine

pub mod engine;
pub mod preprocess;
pub mod prompts;

use std::path::Path;

use crate::core::{Result, SectionKind, SectionScore};

pub use engine::ClipEngine;
pub use preprocess::preprocess_image;
pub use prompts::evaluation_prompt;

/// Scores one section image against a category
///
/// The comparison loop only depends on this seam, so it can run against a
/// stub in tests without model weights on disk.
pub trait SectionScorer {
    fn score_section(&self, image: &Path, kind: SectionKind, category: &str)
        -> Result<SectionScore>;
}
