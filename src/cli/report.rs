//! Comparison run rendering
//!
//! Per-section rankings plus a skipped-site list, or the whole run as JSON
//! for downstream consumers.

use crate::core::{CaptureOutcome, ComparisonRun, Result, ScoreRecord, SectionKind};

/// Print a run to stdout, as JSON or as a console summary
pub fn print_run(run: &ComparisonRun, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(run)?);
    } else {
        print!("{}", render_run(run));
    }
    Ok(())
}

/// Render the console summary
pub fn render_run(run: &ComparisonRun) -> String {
    let mut out = String::new();

    for kind in SectionKind::ALL {
        let records = run.scores.records(kind);
        if records.is_empty() {
            continue;
        }

        out.push_str(&format!("\n📊 {} section\n", kind));
        for record in ranked(records) {
            out.push_str(&format!(
                "  {}  score {:.3}  (Clarity {:.2}, Modernity {:.2}, Relevance {:.2}, \
                 Consistency {:.2}, Visual Appeal {:.2})\n",
                record.name,
                record.score,
                record.criteria.clarity,
                record.criteria.modernity,
                record.criteria.relevance,
                record.criteria.consistency,
                record.criteria.visual_appeal,
            ));
        }
    }

    if let Some(winner) = overall_winner(run) {
        out.push_str(&format!("\n🏆 Overall: {}\n", winner));
    }

    let skipped: Vec<&str> = run
        .captures
        .iter()
        .filter(|c| matches!(c.outcome, CaptureOutcome::Skipped { .. }))
        .map(|c| c.site.name.as_str())
        .collect();
    if !skipped.is_empty() {
        out.push_str(&format!("\n⚠️ Skipped: {}\n", skipped.join(", ")));
    }

    if run.scores.is_empty() {
        out.push_str("\n❌ No sections were scored.\n");
    }

    out
}

/// Records sorted by score, best first; stored order is left untouched
fn ranked(records: &[ScoreRecord]) -> Vec<&ScoreRecord> {
    let mut sorted: Vec<&ScoreRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Site with the best full-page score, falling back to header
fn overall_winner(run: &ComparisonRun) -> Option<String> {
    let pool = if run.scores.records(SectionKind::Full).is_empty() {
        run.scores.records(SectionKind::Header)
    } else {
        run.scores.records(SectionKind::Full)
    };
    ranked(pool).first().map(|r| r.name.clone())
}
