use serde::{Deserialize, Serialize};

use crate::change::{ChangeKind, DiffLine};

/// A maximal run of same-kind diff lines.
///
/// Line ranges are 1-based and half-open. A block of `Added` lines has an
/// empty old range whose start is the insertion point in the original text;
/// a block of `Removed` lines has an empty new range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffBlock {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub old_start: usize,
    pub old_end: usize,
    pub new_start: usize,
    pub new_end: usize,
    pub lines: Vec<DiffLine>,
}

impl DiffBlock {
    /// Number of original-side lines covered by this block.
    pub fn old_len(&self) -> usize {
        self.old_end - self.old_start
    }

    /// Number of revised-side lines covered by this block.
    pub fn new_len(&self) -> usize {
        self.new_end - self.new_start
    }

    /// Returns `true` unless the block is a run of unchanged lines.
    pub fn is_change(&self) -> bool {
        self.kind != ChangeKind::Unchanged
    }
}
