use serde::{Deserialize, Serialize};

use crate::change::{DiffLine, DiffStats};

/// A titled, leveled unit of document structure.
///
/// `path` is the key used to pair sections across two revisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub level: usize,
    pub content: String,
    pub path: String,
}

impl Section {
    pub fn new(
        title: impl Into<String>,
        level: usize,
        content: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            level: level.max(1),
            content: content.into(),
            path: path.into(),
        }
    }
}

/// The line diff of one aligned section pair.
///
/// A section absent from one revision is represented by an empty text on
/// that side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDiff {
    pub path: String,
    pub title: String,
    pub level: usize,
    pub original_text: String,
    pub revised_text: String,
    pub diff: Vec<DiffLine>,
    pub stats: DiffStats,
}

impl SectionDiff {
    /// The section exists only in the revised document.
    pub fn is_added(&self) -> bool {
        self.original_text.is_empty() && !self.revised_text.is_empty()
    }

    /// The section exists only in the original document.
    pub fn is_removed(&self) -> bool {
        !self.original_text.is_empty() && self.revised_text.is_empty()
    }

    /// Returns `true` if any line was added or removed.
    pub fn has_changes(&self) -> bool {
        self.stats.has_changes()
    }
}
