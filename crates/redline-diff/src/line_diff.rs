//! Line-level diff: line-by-line comparison of two texts.

use redline_types::{DiffLine, DiffStats};

use crate::lcs::lcs;

/// Split a text into lines on `\n`.
///
/// The empty string has no lines. Any other text yields one more line than it
/// has newlines, so joining the result with `\n` reproduces the input exactly.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

/// Compute a line-by-line diff between two texts.
///
/// Lines not in the common subsequence are emitted before the next matched
/// line, removals first, then additions. Trailing unmatched lines are flushed
/// the same way after the last match.
pub fn line_diff(original: &str, revised: &str) -> Vec<DiffLine> {
    diff_lines(&split_lines(original), &split_lines(revised))
}

/// Same as [`line_diff`] for inputs that are already split.
pub fn diff_lines(old: &[&str], new: &[&str]) -> Vec<DiffLine> {
    let matches = lcs(old, new);
    let mut out = Vec::with_capacity(old.len() + new.len() - matches.len());
    let mut old_idx = 0;
    let mut new_idx = 0;

    for m in &matches {
        flush_removed(&mut out, old, &mut old_idx, m.a_idx);
        flush_added(&mut out, new, &mut new_idx, m.b_idx);
        out.push(DiffLine::unchanged(old[m.a_idx], m.a_idx + 1, m.b_idx + 1));
        old_idx = m.a_idx + 1;
        new_idx = m.b_idx + 1;
    }

    flush_removed(&mut out, old, &mut old_idx, old.len());
    flush_added(&mut out, new, &mut new_idx, new.len());
    out
}

/// Diff two texts and count the result.
pub fn line_diff_with_stats(original: &str, revised: &str) -> (Vec<DiffLine>, DiffStats) {
    let lines = line_diff(original, revised);
    let stats = DiffStats::from_lines(&lines);
    (lines, stats)
}

fn flush_removed(out: &mut Vec<DiffLine>, old: &[&str], idx: &mut usize, until: usize) {
    while *idx < until {
        out.push(DiffLine::removed(old[*idx], *idx + 1));
        *idx += 1;
    }
}

fn flush_added(out: &mut Vec<DiffLine>, new: &[&str], idx: &mut usize, until: usize) {
    while *idx < until {
        out.push(DiffLine::added(new[*idx], *idx + 1));
        *idx += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use redline_types::ChangeKind;

    fn kinds(lines: &[DiffLine]) -> Vec<(ChangeKind, &str)> {
        lines.iter().map(|l| (l.kind, l.text.as_str())).collect()
    }

    fn reconstruct(lines: &[DiffLine], keep: fn(ChangeKind) -> bool) -> String {
        lines
            .iter()
            .filter(|l| keep(l.kind))
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn split_lines_of_empty_text_is_empty() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
    }

    #[test]
    fn single_line_modification() {
        let (diff, stats) = line_diff_with_stats("line1\nline2\nline3", "line1\nlineX\nline3");
        assert_eq!(
            kinds(&diff),
            vec![
                (ChangeKind::Unchanged, "line1"),
                (ChangeKind::Removed, "line2"),
                (ChangeKind::Added, "lineX"),
                (ChangeKind::Unchanged, "line3"),
            ]
        );
        assert_eq!(
            stats,
            DiffStats {
                additions: 1,
                deletions: 1,
                unchanged: 2
            }
        );
    }

    #[test]
    fn line_numbers_are_per_side() {
        let diff = line_diff("a\nb\nc", "a\nc\nd");
        assert_eq!(diff[0], DiffLine::unchanged("a", 1, 1));
        assert_eq!(diff[1], DiffLine::removed("b", 2));
        assert_eq!(diff[2], DiffLine::unchanged("c", 3, 2));
        assert_eq!(diff[3], DiffLine::added("d", 3));
    }

    #[test]
    fn identical_texts_are_all_unchanged() {
        let (diff, stats) = line_diff_with_stats("x\ny", "x\ny");
        assert_eq!(diff.len(), 2);
        assert_eq!(stats.additions, 0);
        assert_eq!(stats.deletions, 0);
    }

    #[test]
    fn empty_to_content_is_all_added() {
        let (diff, stats) = line_diff_with_stats("", "new\ncontent");
        assert_eq!(stats.additions, 2);
        assert_eq!(stats.deletions, 0);
        assert_eq!(diff[1], DiffLine::added("content", 2));
    }

    #[test]
    fn content_to_empty_is_all_removed() {
        let (_, stats) = line_diff_with_stats("old\ncontent", "");
        assert_eq!(stats.deletions, 2);
        assert_eq!(stats.additions, 0);
    }

    #[test]
    fn swapped_lines_keep_the_earlier_original_line() {
        let diff = line_diff("a\nb", "b\na");
        assert_eq!(
            kinds(&diff),
            vec![
                (ChangeKind::Added, "b"),
                (ChangeKind::Unchanged, "a"),
                (ChangeKind::Removed, "b"),
            ]
        );
    }

    #[test]
    fn trailing_newline_is_a_line() {
        let (_, stats) = line_diff_with_stats("a", "a\n");
        assert_eq!(stats.additions, 1);
        assert_eq!(stats.unchanged, 1);
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "", "d e"]), 0..12)
            .prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn round_trip_reconstructs_both_sides(a in text_strategy(), b in text_strategy()) {
            let diff = line_diff(&a, &b);
            prop_assert_eq!(reconstruct(&diff, ChangeKind::in_original), a);
            prop_assert_eq!(reconstruct(&diff, ChangeKind::in_revised), b);
        }

        #[test]
        fn diff_with_itself_is_unchanged(a in text_strategy()) {
            let (diff, stats) = line_diff_with_stats(&a, &a);
            prop_assert_eq!(diff.len(), split_lines(&a).len());
            prop_assert!(diff.iter().all(|l| l.kind == ChangeKind::Unchanged));
            prop_assert!(!stats.has_changes());
        }

        #[test]
        fn swapping_inputs_mirrors_changes(a in text_strategy(), b in text_strategy()) {
            let (forward, fwd) = line_diff_with_stats(&a, &b);
            let (backward, bwd) = line_diff_with_stats(&b, &a);
            prop_assert_eq!(forward.len(), backward.len());
            prop_assert_eq!(fwd.additions, bwd.deletions);
            prop_assert_eq!(fwd.deletions, bwd.additions);
            prop_assert_eq!(fwd.unchanged, bwd.unchanged);
        }
    }
}
