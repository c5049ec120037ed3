//! uxcompare - Visual UI/UX comparison of competing websites
//!
//! Screenshots each site's header, main band, footer, and full page with
//! headless Chrome, scores every section against a category-specific prompt
//! using CLIP embeddings, and can ask Gemini for a free-text comparison of
//! the two full-page screenshots.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Capture**: Browser session and per-site section screenshots
//! - **Scoring**: Image preprocessing, prompt table, and the CLIP engine
//! - **Narrative**: Gemini generateContent client
//! - **CLI**: Run rendering for the console and JSON output
//!
//! # Usage
//!
//! ```rust,no_run
//! use uxcompare::{ClipEngine, ComparisonRunner, Config};
//!
//! fn main() -> uxcompare::Result<()> {
//!     let config = Config::load();
//!     let engine = ClipEngine::new(&config.scoring)?;
//!     let run = ComparisonRunner::new(config).run(&engine)?;
//!     println!("{} sites captured", run.captures.len());
//!     Ok(())
//! }
//! ```

pub mod capture;
pub mod cli;
pub mod compare;
pub mod core;
pub mod narrative;
pub mod scoring;

// Re-export commonly used items
pub use compare::ComparisonRunner;
pub use core::{CompareError, Config, Result};
pub use narrative::GeminiClient;
pub use scoring::ClipEngine;
