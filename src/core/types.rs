//! Shared types used across uxcompare modules
//!
//! Contains site descriptors, section identifiers, capture outcomes, and
//! the accumulated score report.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A website under comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Short name used for directories and file prefixes
    pub name: String,
    /// Homepage URL
    pub url: String,
}

impl Site {
    /// Create a new site descriptor
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One of the four captured page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    Main,
    Footer,
    Full,
}

impl SectionKind {
    /// All sections in scoring order
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Header,
        SectionKind::Main,
        SectionKind::Footer,
        SectionKind::Full,
    ];

    /// File suffix and prompt-table key for this section
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Main => "main",
            SectionKind::Footer => "footer",
            SectionKind::Full => "full",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Screenshot files captured for one site
///
/// `main` is absent when the band between header and footer is too short;
/// `full` is absent when the full-page write did not produce a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSet {
    pub header: PathBuf,
    pub main: Option<PathBuf>,
    pub footer: PathBuf,
    pub full: Option<PathBuf>,
}

impl SectionSet {
    /// Path for a section, if that section was captured
    pub fn get(&self, kind: SectionKind) -> Option<&Path> {
        match kind {
            SectionKind::Header => Some(self.header.as_path()),
            SectionKind::Main => self.main.as_deref(),
            SectionKind::Footer => Some(self.footer.as_path()),
            SectionKind::Full => self.full.as_deref(),
        }
    }
}

/// Why a site was skipped during capture
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Navigation failed or timed out
    Navigation(String),
    /// No header selector candidate matched
    HeaderNotFound,
    /// No footer selector candidate matched
    FooterNotFound,
    /// Header or footer matched but exposed no bounding box
    MissingGeometry,
    /// Screenshot capture or file write failed
    Capture(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Navigation(e) => write!(f, "navigation failed: {}", e),
            SkipReason::HeaderNotFound => write!(f, "couldn't find a header element"),
            SkipReason::FooterNotFound => write!(f, "couldn't find a footer element"),
            SkipReason::MissingGeometry => write!(f, "couldn't retrieve bounding boxes"),
            SkipReason::Capture(e) => write!(f, "screenshot failed: {}", e),
        }
    }
}

/// Tagged per-site capture result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CaptureOutcome {
    /// All required sections were written to disk
    Captured { sections: SectionSet },
    /// The site was skipped; no sections were scored
    Skipped { reason: SkipReason },
}

/// A site paired with its capture outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteCapture {
    pub site: Site,
    pub outcome: CaptureOutcome,
}

impl SiteCapture {
    /// Section set if the capture succeeded
    pub fn sections(&self) -> Option<&SectionSet> {
        match &self.outcome {
            CaptureOutcome::Captured { sections } => Some(sections),
            CaptureOutcome::Skipped { .. } => None,
        }
    }
}

/// Five cosmetic sub-scores derived from the base similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriteriaScores {
    #[serde(rename = "Clarity")]
    pub clarity: f64,
    #[serde(rename = "Modernity")]
    pub modernity: f64,
    #[serde(rename = "Relevance")]
    pub relevance: f64,
    #[serde(rename = "Consistency")]
    pub consistency: f64,
    #[serde(rename = "Visual Appeal")]
    pub visual_appeal: f64,
}

/// Base similarity plus derived sub-scores for one section image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    /// Cosine similarity rescaled to [0, 1], unrounded
    pub similarity: f64,
    pub criteria: CriteriaScores,
}

/// Scored entry for one (site, section) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Site name
    pub name: String,
    /// Screenshot the score was computed from
    pub path: PathBuf,
    /// Base similarity in [0, 1]
    pub score: f64,
    pub criteria: CriteriaScores,
}

/// Per-section score lists, insertion order = site list order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub header: Vec<ScoreRecord>,
    pub main: Vec<ScoreRecord>,
    pub footer: Vec<ScoreRecord>,
    pub full: Vec<ScoreRecord>,
}

impl ComparisonReport {
    /// Records for one section, in site order
    pub fn records(&self, kind: SectionKind) -> &[ScoreRecord] {
        match kind {
            SectionKind::Header => &self.header,
            SectionKind::Main => &self.main,
            SectionKind::Footer => &self.footer,
            SectionKind::Full => &self.full,
        }
    }

    /// Append a record to a section's list
    pub fn push(&mut self, kind: SectionKind, record: ScoreRecord) {
        match kind {
            SectionKind::Header => self.header.push(record),
            SectionKind::Main => self.main.push(record),
            SectionKind::Footer => self.footer.push(record),
            SectionKind::Full => self.full.push(record),
        }
    }

    /// True when no section holds any record
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.main.is_empty() && self.footer.is_empty() && self.full.is_empty()
    }
}

/// Full result of one comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRun {
    /// Tagged outcome per site, in input order
    pub captures: Vec<SiteCapture>,
    /// Accumulated scores
    pub scores: ComparisonReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_set_lookup() {
        let set = SectionSet {
            header: PathBuf::from("a_header.png"),
            main: None,
            footer: PathBuf::from("a_footer.png"),
            full: Some(PathBuf::from("a_full.png")),
        };
        assert!(set.get(SectionKind::Header).is_some());
        assert!(set.get(SectionKind::Main).is_none());
        assert!(set.get(SectionKind::Footer).is_some());
        assert_eq!(set.get(SectionKind::Full).unwrap(), Path::new("a_full.png"));
    }

    #[test]
    fn test_report_push_preserves_order() {
        let mut report = ComparisonReport::default();
        for name in ["amazon", "flipkart"] {
            report.push(
                SectionKind::Header,
                ScoreRecord {
                    name: name.to_string(),
                    path: PathBuf::from(format!("{}_header.png", name)),
                    score: 0.5,
                    criteria: CriteriaScores {
                        clarity: 0.6,
                        modernity: 0.55,
                        relevance: 0.5,
                        consistency: 0.57,
                        visual_appeal: 0.58,
                    },
                },
            );
        }
        let names: Vec<_> = report
            .records(SectionKind::Header)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["amazon", "flipkart"]);
    }

    #[test]
    fn test_skipped_capture_has_no_sections() {
        let capture = SiteCapture {
            site: Site::new("broken", "https://broken.example"),
            outcome: CaptureOutcome::Skipped {
                reason: SkipReason::HeaderNotFound,
            },
        };
        assert!(capture.sections().is_none());
    }

    #[test]
    fn test_criteria_serializes_display_names() {
        let criteria = CriteriaScores {
            clarity: 1.0,
            modernity: 0.95,
            relevance: 0.9,
            consistency: 0.97,
            visual_appeal: 0.98,
        };
        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["Visual Appeal"], 0.98);
        assert_eq!(json["Clarity"], 1.0);
    }
}
