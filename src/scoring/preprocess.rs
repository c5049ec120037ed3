//! Image preprocessing for CLIP scoring
//!
//! Grayscale, histogram equalization for contrast normalization, resize to
//! the canonical resolution, back to three channels. The result is written
//! next to the input with a `_processed` suffix.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};

use crate::core::Result;

/// Canonical resolution every scored image is resized to
pub const CANONICAL_WIDTH: u32 = 1280;
pub const CANONICAL_HEIGHT: u32 = 720;

/// Enhance and normalize a screenshot, returning the processed file path
///
/// Deterministic for identical input bytes. Malformed input propagates the
/// decoder error; the caller treats that as fatal for the run.
pub fn preprocess_image(path: &Path) -> Result<PathBuf> {
    let gray = image::open(path)?.to_luma8();
    let equalized = equalize_histogram(&gray);
    let resized = image::imageops::resize(
        &equalized,
        CANONICAL_WIDTH,
        CANONICAL_HEIGHT,
        FilterType::Triangle,
    );
    let rgb = DynamicImage::ImageLuma8(resized).to_rgb8();

    let out = processed_path(path);
    rgb.save(&out)?;
    Ok(out)
}

/// `foo.png` -> `foo_processed.png`, preserving the directory
pub fn processed_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    path.with_file_name(format!("{}_processed.{}", stem, ext))
}

/// Classic CDF remap over the luma histogram
///
/// Uniform images map to themselves; everything else stretches toward the
/// full [0, 255] range.
fn equalize_histogram(gray: &GrayImage) -> GrayImage {
    let mut histogram = [0u64; 256];
    for pixel in gray.pixels() {
        histogram[pixel.0[0] as usize] += 1;
    }

    let total: u64 = gray.width() as u64 * gray.height() as u64;
    if total == 0 {
        return gray.clone();
    }

    let mut cdf = [0u64; 256];
    let mut running = 0u64;
    for (level, count) in histogram.iter().enumerate() {
        running += count;
        cdf[level] = running;
    }

    let cdf_min = cdf
        .iter()
        .copied()
        .find(|&c| c > 0)
        .unwrap_or(0);
    if total == cdf_min {
        // single-level image, nothing to stretch
        return gray.clone();
    }

    let mut lut = [0u8; 256];
    let denom = (total - cdf_min) as f64;
    for level in 0..256 {
        let scaled = (cdf[level].saturating_sub(cdf_min)) as f64 / denom * 255.0;
        lut[level] = scaled.round().min(255.0) as u8;
    }

    let mut out = gray.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = lut[pixel.0[0] as usize];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn gradient(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, _| Luma([(x % 256) as u8]))
    }

    #[test]
    fn test_processed_path_suffix() {
        let out = processed_path(Path::new("screenshots/amazon/amazon_header.png"));
        assert_eq!(
            out,
            Path::new("screenshots/amazon/amazon_header_processed.png")
        );
    }

    #[test]
    fn test_equalize_uniform_image_is_identity() {
        let flat = GrayImage::from_pixel(32, 32, Luma([128]));
        let out = equalize_histogram(&flat);
        assert_eq!(out, flat);
    }

    #[test]
    fn test_equalize_stretches_to_full_range() {
        // two-level image: dark half and mid half
        let img = GrayImage::from_fn(64, 2, |x, _| Luma([if x < 32 { 60 } else { 120 }]));
        let out = equalize_histogram(&img);
        let values: std::collections::BTreeSet<u8> = out.pixels().map(|p| p.0[0]).collect();
        // the lowest occupied level maps to 0, the highest toward 255
        assert!(values.contains(&0));
        assert!(values.iter().max().unwrap() >= &254);
    }

    #[test]
    fn test_preprocess_writes_canonical_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("band.png");
        DynamicImage::ImageLuma8(gradient(320, 200))
            .to_rgb8()
            .save(&input)
            .unwrap();

        let out = preprocess_image(&input).unwrap();
        assert!(out.ends_with("band_processed.png"));

        let processed = image::open(&out).unwrap();
        assert_eq!(processed.width(), CANONICAL_WIDTH);
        assert_eq!(processed.height(), CANONICAL_HEIGHT);
        assert_eq!(processed.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn test_preprocess_missing_file_is_an_error() {
        assert!(preprocess_image(Path::new("no/such/file.png")).is_err());
    }
}
