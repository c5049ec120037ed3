//! CLIP scoring engine
//!
//! Owns the text and vision encoders. Weights are pulled from the Hugging
//! Face hub by model name when the engine is constructed, before the first
//! image is scored.

use std::path::Path;

use fastembed::{
    EmbeddingModel, ImageEmbedding, ImageEmbeddingModel, ImageInitOptions, InitOptions,
    TextEmbedding,
};

use crate::core::{CompareError, CriteriaScores, Result, ScoringConfig, SectionKind, SectionScore};
use crate::scoring::preprocess::preprocess_image;
use crate::scoring::prompts::evaluation_prompt;
use crate::scoring::SectionScorer;

/// Fixed sub-score offsets over the base similarity
const CLARITY_OFFSET: f64 = 0.10;
const MODERNITY_OFFSET: f64 = 0.05;
const RELEVANCE_OFFSET: f64 = 0.00;
const CONSISTENCY_OFFSET: f64 = 0.07;
const VISUAL_APPEAL_OFFSET: f64 = 0.08;

/// CLIP ViT-B/32 text + vision encoders sharing one embedding space
pub struct ClipEngine {
    text: TextEmbedding,
    image: ImageEmbedding,
}

impl ClipEngine {
    /// Construct the engine, downloading model weights if needed
    pub fn new(config: &ScoringConfig) -> Result<Self> {
        let mut text_options = InitOptions::new(EmbeddingModel::ClipVitB32)
            .with_show_download_progress(config.show_download_progress);
        let mut image_options = ImageInitOptions::new(ImageEmbeddingModel::ClipVitB32)
            .with_show_download_progress(config.show_download_progress);

        if let Some(dir) = &config.cache_dir {
            text_options = text_options.with_cache_dir(dir.clone());
            image_options = image_options.with_cache_dir(dir.clone());
        }

        let text = TextEmbedding::try_new(text_options)
            .map_err(|e| CompareError::scoring(format!("Failed to load CLIP text model: {}", e)))?;
        let image = ImageEmbedding::try_new(image_options).map_err(|e| {
            CompareError::scoring(format!("Failed to load CLIP vision model: {}", e))
        })?;

        Ok(Self { text, image })
    }

    fn embed_prompt(&self, prompt: String) -> Result<Vec<f32>> {
        let mut vectors = self
            .text
            .embed(vec![prompt], None)
            .map_err(|e| CompareError::scoring(format!("Text embedding failed: {}", e)))?;
        vectors
            .pop()
            .ok_or_else(|| CompareError::scoring("Text encoder returned no embedding"))
    }

    fn embed_image(&self, path: &Path) -> Result<Vec<f32>> {
        let mut vectors = self
            .image
            .embed(vec![path], None)
            .map_err(|e| CompareError::scoring(format!("Image embedding failed: {}", e)))?;
        vectors
            .pop()
            .ok_or_else(|| CompareError::scoring("Vision encoder returned no embedding"))
    }
}

impl SectionScorer for ClipEngine {
    fn score_section(&self, image: &Path, kind: SectionKind, category: &str) -> Result<SectionScore> {
        let prompt = evaluation_prompt(kind, category);
        let processed = preprocess_image(image)?;

        let text_embedding = self.embed_prompt(prompt)?;
        let image_embedding = self.embed_image(&processed)?;

        let base = rescale_similarity(cosine_similarity(&text_embedding, &image_embedding));
        Ok(SectionScore {
            similarity: base,
            criteria: derive_criteria(base),
        })
    }
}

/// Cosine similarity between two embedding vectors
///
/// Zero for mismatched dimensions or a zero-norm vector.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| f64::from(*x) * f64::from(*y)).sum();
    let norm_a: f64 = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Map raw cosine similarity from [-1, 1] onto [0, 1]
pub fn rescale_similarity(raw: f64) -> f64 {
    (raw + 1.0) / 2.0
}

/// Derive the five sub-scores from the base similarity
///
/// Each offset is non-negative and clamped at 1.0, so for a fixed base:
/// Relevance <= Modernity <= Consistency <= Visual Appeal <= Clarity.
pub fn derive_criteria(base: f64) -> CriteriaScores {
    let derived = |offset: f64| round2((base + offset).min(1.0));
    CriteriaScores {
        clarity: derived(CLARITY_OFFSET),
        modernity: derived(MODERNITY_OFFSET),
        relevance: derived(RELEVANCE_OFFSET),
        consistency: derived(CONSISTENCY_OFFSET),
        visual_appeal: derived(VISUAL_APPEAL_OFFSET),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_endpoints() {
        assert_eq!(rescale_similarity(-1.0), 0.0);
        assert_eq!(rescale_similarity(0.0), 0.5);
        assert_eq!(rescale_similarity(1.0), 1.0);
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.5f32, -0.25, 0.75];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0f32, 0.0];
        let b = vec![0.0f32, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_criteria_offsets() {
        let criteria = derive_criteria(0.5);
        assert_eq!(criteria.relevance, 0.5);
        assert_eq!(criteria.modernity, 0.55);
        assert_eq!(criteria.consistency, 0.57);
        assert_eq!(criteria.visual_appeal, 0.58);
        assert_eq!(criteria.clarity, 0.6);
    }

    #[test]
    fn test_criteria_clamped_at_one() {
        let criteria = derive_criteria(0.97);
        assert_eq!(criteria.relevance, 0.97);
        assert_eq!(criteria.clarity, 1.0);
        assert_eq!(criteria.visual_appeal, 1.0);
        assert_eq!(criteria.consistency, 1.0);
    }

    #[test]
    fn test_criteria_rounded_to_two_decimals() {
        let criteria = derive_criteria(0.333);
        assert_eq!(criteria.relevance, 0.33);
        assert_eq!(criteria.modernity, 0.38);
        assert_eq!(criteria.clarity, 0.43);
    }
}
