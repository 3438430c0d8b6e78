//! Diff engine for Redline.
//!
//! Computes line- and word-level diffs between two texts with a classical
//! longest-common-subsequence backtrack, and groups line diffs into display
//! blocks.
//!
//! # Key Functions
//!
//! - [`lcs`] -- Longest common subsequence over any comparable tokens
//! - [`line_diff`] -- Ordered added/removed/unchanged lines with per-side numbers
//! - [`word_diff`] -- Whitespace-preserving token diff for inline highlighting
//! - [`group_into_blocks`] -- Maximal same-kind runs with line ranges

pub mod blocks;
pub mod lcs;
pub mod line_diff;
pub mod word_diff;

pub use blocks::group_into_blocks;
pub use lcs::{lcs, LcsMatch};
pub use line_diff::{diff_lines, line_diff, line_diff_with_stats, split_lines};
pub use word_diff::{tokenize_words, word_diff};
