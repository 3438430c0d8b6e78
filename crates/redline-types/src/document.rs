use serde::{Deserialize, Serialize};

use crate::block::DiffBlock;
use crate::section::SectionDiff;

/// Whole-document counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub total_additions: usize,
    pub total_deletions: usize,
    pub total_unchanged: usize,
    /// Number of section diffs with at least one added or removed line.
    pub sections_changed: usize,
}

impl DocumentStats {
    /// Returns `true` if the whole-document diff contains any change.
    pub fn has_changes(&self) -> bool {
        self.total_additions > 0 || self.total_deletions > 0
    }
}

/// The complete result of comparing two document revisions.
///
/// `blocks` is the whole-document line diff. `sections` holds the
/// section-aligned redline ordered by ascending level; it is empty when
/// section alignment was not requested.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDiff {
    pub blocks: Vec<DiffBlock>,
    pub stats: DocumentStats,
    pub sections: Vec<SectionDiff>,
}

impl DocumentDiff {
    /// Section diffs with at least one added or removed line.
    pub fn changed_sections(&self) -> impl Iterator<Item = &SectionDiff> {
        self.sections.iter().filter(|s| s.has_changes())
    }
}
