//! Grouping of diff lines into display blocks.

use redline_types::{DiffBlock, DiffLine};

/// Collapse consecutive same-kind lines into blocks.
///
/// The blocks partition `lines`: concatenating their `lines` yields the input
/// again. Each block records half-open, 1-based line ranges on both sides,
/// tracked with running counters that only advance on lines carrying that
/// side's number.
pub fn group_into_blocks(lines: &[DiffLine]) -> Vec<DiffBlock> {
    let mut blocks: Vec<DiffBlock> = Vec::new();
    let mut old_line = 1;
    let mut new_line = 1;

    for line in lines {
        let starts_block = blocks.last().map_or(true, |b| b.kind != line.kind);
        if starts_block {
            blocks.push(DiffBlock {
                kind: line.kind,
                old_start: old_line,
                old_end: old_line,
                new_start: new_line,
                new_end: new_line,
                lines: Vec::new(),
            });
        }

        if let Some(n) = line.old_line_number {
            old_line = n + 1;
        }
        if let Some(n) = line.new_line_number {
            new_line = n + 1;
        }

        // Just pushed or matched above, so a current block always exists.
        if let Some(block) = blocks.last_mut() {
            block.old_end = old_line;
            block.new_end = new_line;
            block.lines.push(line.clone());
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_diff::line_diff;
    use proptest::prelude::*;
    use redline_types::ChangeKind;

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(group_into_blocks(&[]).is_empty());
    }

    #[test]
    fn replacement_produces_four_blocks() {
        let diff = line_diff("line1\nline2\nline3", "line1\nlineX\nline3");
        let blocks = group_into_blocks(&diff);
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::Unchanged,
                ChangeKind::Removed,
                ChangeKind::Added,
                ChangeKind::Unchanged,
            ]
        );

        let removed = &blocks[1];
        assert_eq!((removed.old_start, removed.old_end), (2, 3));
        assert_eq!(removed.new_len(), 0);
        assert_eq!(removed.new_start, 2);

        let added = &blocks[2];
        assert_eq!((added.new_start, added.new_end), (2, 3));
        assert_eq!((added.old_start, added.old_end), (3, 3));
    }

    #[test]
    fn consecutive_changes_share_a_block() {
        let diff = line_diff("a", "a\nb\nc");
        let blocks = group_into_blocks(&diff);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].kind, ChangeKind::Added);
        assert_eq!(blocks[1].lines.len(), 2);
        assert_eq!((blocks[1].new_start, blocks[1].new_end), (2, 4));
        assert_eq!(blocks[1].old_len(), 0);
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(vec!["x", "y", "z"]), 0..10)
            .prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn blocks_partition_the_diff(a in text_strategy(), b in text_strategy()) {
            let diff = line_diff(&a, &b);
            let blocks = group_into_blocks(&diff);

            let flattened: Vec<DiffLine> = blocks.iter().flat_map(|b| b.lines.clone()).collect();
            prop_assert_eq!(&flattened, &diff);

            for pair in blocks.windows(2) {
                prop_assert_ne!(pair[0].kind, pair[1].kind);
                prop_assert_eq!(pair[0].old_end, pair[1].old_start);
                prop_assert_eq!(pair[0].new_end, pair[1].new_start);
            }
            for block in &blocks {
                prop_assert!(!block.lines.is_empty());
                let old_lines = block.lines.iter().filter(|l| l.old_line_number.is_some()).count();
                let new_lines = block.lines.iter().filter(|l| l.new_line_number.is_some()).count();
                prop_assert_eq!(block.old_len(), old_lines);
                prop_assert_eq!(block.new_len(), new_lines);
            }
        }
    }
}
