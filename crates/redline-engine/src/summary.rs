//! Human-readable change summary of a document comparison.

use redline_types::{DocumentDiff, SectionDiff};

use crate::config::SummaryConfig;

/// The only summary line produced for identical documents.
pub const NO_CHANGES: &str = "No changes detected between the documents.";

/// Summarize `diff` with the default limits.
pub fn generate_change_summary(diff: &DocumentDiff) -> Vec<String> {
    summarize(diff, &SummaryConfig::default())
}

/// Summarize the most significant changes of `diff`.
///
/// Lists a header with the number of changed sections, the changed sections
/// with the most added plus removed lines, then counts of wholly new and
/// wholly removed sections. The result never exceeds `config.max_entries`.
pub fn summarize(diff: &DocumentDiff, config: &SummaryConfig) -> Vec<String> {
    if !diff.stats.has_changes() {
        return vec![NO_CHANGES.to_string()];
    }

    let mut lines = vec![plural(diff.stats.sections_changed, "section changed", "sections changed")];

    let mut changed: Vec<&SectionDiff> = diff.changed_sections().collect();
    changed.sort_by(|a, b| b.stats.changed_lines().cmp(&a.stats.changed_lines()));
    lines.extend(
        changed
            .into_iter()
            .take(config.max_sections)
            .map(describe_section),
    );

    let added = diff.sections.iter().filter(|s| s.is_added()).count();
    if added > 0 {
        lines.push(plural(added, "new section added", "new sections added"));
    }
    let removed = diff.sections.iter().filter(|s| s.is_removed()).count();
    if removed > 0 {
        lines.push(plural(removed, "section removed", "sections removed"));
    }

    lines.truncate(config.max_entries);
    lines
}

fn describe_section(section: &SectionDiff) -> String {
    let mut parts = Vec::with_capacity(2);
    if section.stats.additions > 0 {
        parts.push(format!("{} lines added", section.stats.additions));
    }
    if section.stats.deletions > 0 {
        parts.push(format!("{} lines removed", section.stats.deletions));
    }
    format!("{}: {}", section.title, parts.join(", "))
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}
