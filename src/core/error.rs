//! Custom error types for uxcompare
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for uxcompare operations
#[derive(Error, Debug)]
pub enum CompareError {
    /// Browser launch or CDP errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// CLIP engine or scoring errors
    #[error("Scoring error: {0}")]
    Scoring(String),

    /// Gemini narrative errors
    #[error("Narrative error: {0}")]
    Narrative(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Image decoding or encoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Gemini API key not configured
    #[error("Gemini API key not set. Export GEMINI_API_KEY or add it to the config file")]
    MissingApiKey,
}

/// Convenience Result type for uxcompare operations
pub type Result<T> = std::result::Result<T, CompareError>;

impl CompareError {
    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a scoring error
    pub fn scoring(msg: impl Into<String>) -> Self {
        Self::Scoring(msg.into())
    }

    /// Create a narrative error
    pub fn narrative(msg: impl Into<String>) -> Self {
        Self::Narrative(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
