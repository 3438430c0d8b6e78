//! Exportable comparison report: statistics, summary and section titles only.

use serde::{Deserialize, Serialize};

use redline_types::{ContentId, DocumentDiff, DocumentStats, SectionDiff};

use crate::error::{EngineError, EngineResult};

/// How a section changed between the two revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Added,
    Removed,
    Modified,
    Unchanged,
}

impl SectionStatus {
    pub fn of(section: &SectionDiff) -> Self {
        if section.is_added() {
            Self::Added
        } else if section.is_removed() {
            Self::Removed
        } else if section.has_changes() {
            Self::Modified
        } else {
            Self::Unchanged
        }
    }
}

/// Per-section line of a report. Carries no document text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReport {
    pub path: String,
    pub title: String,
    pub level: usize,
    pub status: SectionStatus,
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

/// A comparison report suitable for download or archival.
///
/// The compared revisions are identified by content hash only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffReport {
    pub original: ContentId,
    pub revised: ContentId,
    pub stats: DocumentStats,
    pub summary: Vec<String>,
    pub sections: Vec<SectionReport>,
}

impl DiffReport {
    pub fn new(original: &str, revised: &str, diff: &DocumentDiff, summary: Vec<String>) -> Self {
        let sections = diff
            .sections
            .iter()
            .map(|s| SectionReport {
                path: s.path.clone(),
                title: s.title.clone(),
                level: s.level,
                status: SectionStatus::of(s),
                additions: s.stats.additions,
                deletions: s.stats.deletions,
                unchanged: s.stats.unchanged,
            })
            .collect();

        Self {
            original: ContentId::of_text(original),
            revised: ContentId::of_text(revised),
            stats: diff.stats,
            summary,
            sections,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::diff_documents;
    use crate::summary::generate_change_summary;

    fn report(original: &str, revised: &str) -> DiffReport {
        let diff = diff_documents(original, revised, true);
        let summary = generate_change_summary(&diff);
        DiffReport::new(original, revised, &diff, summary)
    }

    #[test]
    fn statuses_cover_every_case() {
        let r = report(
            "# Same\nx\n# Edit\nold\n# Gone\nbye",
            "# Same\nx\n# Edit\nnew\n# Fresh\nhi",
        );
        let statuses: Vec<_> = r.sections.iter().map(|s| (s.path.as_str(), s.status)).collect();
        assert_eq!(
            statuses,
            vec![
                ("Same", SectionStatus::Unchanged),
                ("Edit", SectionStatus::Modified),
                ("Gone", SectionStatus::Removed),
                ("Fresh", SectionStatus::Added),
            ]
        );
    }

    #[test]
    fn json_has_no_document_text() {
        let r = report("# Fees\nsecret thirty", "# Fees\nsecret sixty");
        let json = r.to_json_pretty().unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"sectionsChanged\": 1"));
        assert!(json.contains(&r.original.to_hex()));
    }

    #[test]
    fn json_roundtrip() {
        let r = report("2.1 Payment\nNet 30", "2.1 Payment\nNet 60");
        let parsed: DiffReport = serde_json::from_str(&r.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, r);
    }
}
