//! Section alignment: pair sections of two revisions by path and diff each pair.

use std::collections::HashMap;

use tracing::debug;

use redline_diff::line_diff_with_stats;
use redline_types::{Section, SectionDiff};

/// Sections of one revision keyed by path, remembering first-seen order.
///
/// A repeated path keeps its first position but the last section with that
/// path wins.
struct PathIndex<'a> {
    order: Vec<&'a str>,
    by_path: HashMap<&'a str, &'a Section>,
}

impl<'a> PathIndex<'a> {
    fn new(sections: &'a [Section]) -> Self {
        let mut order = Vec::with_capacity(sections.len());
        let mut by_path = HashMap::with_capacity(sections.len());
        for section in sections {
            if by_path.insert(section.path.as_str(), section).is_none() {
                order.push(section.path.as_str());
            }
        }
        Self { order, by_path }
    }

    fn get(&self, path: &str) -> Option<&'a Section> {
        self.by_path.get(path).copied()
    }

    fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }
}

/// Align two section lists by path and diff every aligned pair.
///
/// Every path seen on either side yields exactly one [`SectionDiff`]. A
/// section missing on one side is diffed against the empty text. The result
/// is ordered by ascending level; within a level, original-document paths
/// come first in their order, then paths only in the revision.
pub fn align_sections(original: &[Section], revised: &[Section]) -> Vec<SectionDiff> {
    let old_index = PathIndex::new(original);
    let new_index = PathIndex::new(revised);

    let union = old_index.order.iter().copied().chain(
        new_index
            .order
            .iter()
            .copied()
            .filter(|p| !old_index.contains(p)),
    );

    let mut diffs: Vec<SectionDiff> = union
        .filter_map(|path| {
            let old = old_index.get(path);
            let new = new_index.get(path);
            let anchor = old.or(new)?;

            let original_text = old.map(|s| s.content.clone()).unwrap_or_default();
            let revised_text = new.map(|s| s.content.clone()).unwrap_or_default();
            let (diff, stats) = line_diff_with_stats(&original_text, &revised_text);

            Some(SectionDiff {
                path: path.to_string(),
                title: anchor.title.clone(),
                level: anchor.level,
                original_text,
                revised_text,
                diff,
                stats,
            })
        })
        .collect();

    diffs.sort_by_key(|d| d.level);

    debug!(
        original = old_index.order.len(),
        revised = new_index.order.len(),
        aligned = diffs.len(),
        "sections aligned"
    );
    diffs
}
