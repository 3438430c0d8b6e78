//! Line- and token-level change records.

use serde::{Deserialize, Serialize};

/// How a line or token relates the original revision to the revised one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present only in the revised text.
    Added,
    /// Present only in the original text.
    Removed,
    /// Present in both texts.
    Unchanged,
}

impl ChangeKind {
    /// Returns `true` for `Added` and `Unchanged` (lines that exist on the revised side).
    pub fn in_revised(self) -> bool {
        matches!(self, Self::Added | Self::Unchanged)
    }

    /// Returns `true` for `Removed` and `Unchanged` (lines that exist on the original side).
    pub fn in_original(self) -> bool {
        matches!(self, Self::Removed | Self::Unchanged)
    }

    /// The inverse change, as seen when the two revisions are swapped.
    pub fn inverse(self) -> Self {
        match self {
            Self::Added => Self::Removed,
            Self::Removed => Self::Added,
            Self::Unchanged => Self::Unchanged,
        }
    }
}

/// A single line of a line-level diff.
///
/// Line numbers are 1-based and relative to their own side. `Removed` lines
/// carry only `old_line_number`, `Added` lines only `new_line_number`, and
/// `Unchanged` lines carry both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line_number: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line_number: Option<usize>,
}

impl DiffLine {
    /// A line only in the revised text, at `new_line` (1-based).
    pub fn added(text: impl Into<String>, new_line: usize) -> Self {
        Self {
            kind: ChangeKind::Added,
            text: text.into(),
            old_line_number: None,
            new_line_number: Some(new_line),
        }
    }

    /// A line only in the original text, at `old_line` (1-based).
    pub fn removed(text: impl Into<String>, old_line: usize) -> Self {
        Self {
            kind: ChangeKind::Removed,
            text: text.into(),
            old_line_number: Some(old_line),
            new_line_number: None,
        }
    }

    /// A line common to both texts.
    pub fn unchanged(text: impl Into<String>, old_line: usize, new_line: usize) -> Self {
        Self {
            kind: ChangeKind::Unchanged,
            text: text.into(),
            old_line_number: Some(old_line),
            new_line_number: Some(new_line),
        }
    }
}

/// A single token of a word-level diff. Whitespace runs are tokens too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffToken {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub text: String,
}

/// Per-kind line counts of a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

impl DiffStats {
    /// Count the lines of each kind.
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        lines.iter().fold(Self::default(), |mut stats, line| {
            match line.kind {
                ChangeKind::Added => stats.additions += 1,
                ChangeKind::Removed => stats.deletions += 1,
                ChangeKind::Unchanged => stats.unchanged += 1,
            }
            stats
        })
    }

    /// Returns `true` if anything was added or removed.
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Added plus removed lines.
    pub fn changed_lines(&self) -> usize {
        self.additions + self.deletions
    }
}
