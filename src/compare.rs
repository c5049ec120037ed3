//! Comparison orchestration
//!
//! One browser per run, one tab per site, strictly sequential: capture a
//! site, score its sections, move on. Skipped sites contribute no records
//! and only a diagnostic line.

use crate::capture::{capture_sections, BrowserSession};
use crate::core::{
    CaptureOutcome, ComparisonReport, ComparisonRun, Config, Result, ScoreRecord, SectionKind,
    SiteCapture, SkipReason,
};
use crate::scoring::SectionScorer;

/// Drives capture and scoring across the configured site list
pub struct ComparisonRunner {
    config: Config,
}

impl ComparisonRunner {
    /// Create a runner over a configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the full sweep and return scores plus per-site outcomes
    ///
    /// Capture problems degrade to skipped sites; scoring errors abort the
    /// run.
    pub fn run(&self, scorer: &dyn SectionScorer) -> Result<ComparisonRun> {
        let session = BrowserSession::launch(&self.config.browser)?;
        let category = &self.config.comparison.category;

        let mut captures = Vec::new();
        let mut scores = ComparisonReport::default();

        for site in &self.config.comparison.sites {
            println!("🌐 Capturing {} ({})", site.name, site.url);

            let outcome = match session.new_tab() {
                Ok(tab) => {
                    let outcome = capture_sections(&tab, site, &self.config);
                    let _ = tab.close(true);
                    outcome
                }
                Err(e) => CaptureOutcome::Skipped {
                    reason: SkipReason::Capture(e.to_string()),
                },
            };

            if let CaptureOutcome::Skipped { reason } = &outcome {
                println!("❌ Skipping {}: {}", site.name, reason);
            }

            let capture = SiteCapture {
                site: site.clone(),
                outcome,
            };
            score_captured_sections(&capture, scorer, category, &mut scores)?;
            captures.push(capture);
        }

        Ok(ComparisonRun { captures, scores })
    }
}

/// Score every present section of one captured site into the report
///
/// Sites that were skipped during capture add nothing. Sections are scored
/// in the fixed header/main/footer/full order so the per-section record
/// lists stay in site input order.
pub fn score_captured_sections(
    capture: &SiteCapture,
    scorer: &dyn SectionScorer,
    category: &str,
    report: &mut ComparisonReport,
) -> Result<()> {
    let Some(sections) = capture.sections() else {
        return Ok(());
    };

    for kind in SectionKind::ALL {
        let Some(path) = sections.get(kind) else {
            continue;
        };

        let scored = scorer.score_section(path, kind, category)?;
        report.push(
            kind,
            ScoreRecord {
                name: capture.site.name.clone(),
                path: path.to_path_buf(),
                score: scored.similarity,
                criteria: scored.criteria,
            },
        );
    }

    Ok(())
}
