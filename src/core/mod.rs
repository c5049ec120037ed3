//! Core module - shared types, configuration, and error handling

pub mod config;
pub mod error;
pub mod types;

pub use config::{BrowserConfig, CaptureConfig, ComparisonConfig, Config, GeminiConfig, ScoringConfig};
pub use error::{CompareError, Result};
pub use types::{
    CaptureOutcome, ComparisonReport, ComparisonRun, CriteriaScores, ScoreRecord, SectionKind,
    SectionScore, SectionSet, Site, SiteCapture, SkipReason,
};
