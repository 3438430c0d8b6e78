//! Terminal rendering of comparison results.

use std::fmt::Write;

use colored::Colorize;

use redline_diff::word_diff;
use redline_sections::Extraction;
use redline_types::{ChangeKind, DiffBlock, DiffLine, DocumentStats, SectionDiff};

/// Unchanged lines kept on each side of a change.
pub const CONTEXT_LINES: usize = 3;

fn sign(kind: ChangeKind) -> char {
    match kind {
        ChangeKind::Added => '+',
        ChangeKind::Removed => '-',
        ChangeKind::Unchanged => ' ',
    }
}

fn plain_line(out: &mut String, line: &DiffLine) {
    let text = format!("{} {}", sign(line.kind), line.text);
    let _ = match line.kind {
        ChangeKind::Added => writeln!(out, "{}", text.green()),
        ChangeKind::Removed => writeln!(out, "{}", text.red()),
        ChangeKind::Unchanged => writeln!(out, "{}", text.dimmed()),
    };
}

/// One side of a replaced line, with the words that differ emphasized.
fn highlighted_line(out: &mut String, old: &str, new: &str, side: ChangeKind) {
    let mut rendered = String::new();
    for token in word_diff(old, new) {
        if token.kind == side {
            let emphasized = match side {
                ChangeKind::Added => token.text.green().bold().underline(),
                _ => token.text.red().bold().underline(),
            };
            rendered.push_str(&emphasized.to_string());
        } else if token.kind == ChangeKind::Unchanged {
            let base = match side {
                ChangeKind::Added => token.text.green(),
                _ => token.text.red(),
            };
            rendered.push_str(&base.to_string());
        }
    }
    let prefix = format!("{} ", sign(side));
    let prefix = match side {
        ChangeKind::Added => prefix.green(),
        _ => prefix.red(),
    };
    let _ = writeln!(out, "{prefix}{rendered}");
}

fn collapsed(out: &mut String, hidden: usize) {
    let _ = writeln!(out, "{}", format!("  ... {hidden} unchanged lines ...").dimmed());
}

/// Render diff blocks as a unified redline.
///
/// Long unchanged runs are collapsed to [`CONTEXT_LINES`] on the side of each
/// neighbouring change. A removed block followed by an added block of the
/// same length is shown line by line with word-level emphasis.
pub fn render_blocks(blocks: &[DiffBlock]) -> String {
    let mut out = String::new();
    if !blocks.iter().any(DiffBlock::is_change) {
        for line in blocks.iter().flat_map(|b| &b.lines) {
            plain_line(&mut out, line);
        }
        return out;
    }
    let last = blocks.len().saturating_sub(1);
    let mut i = 0;

    while i < blocks.len() {
        let block = &blocks[i];
        match block.kind {
            ChangeKind::Unchanged => {
                // Context is only trimmed on a side that has a neighbouring change.
                let keep_head = if i == 0 { 0 } else { CONTEXT_LINES };
                let keep_tail = if i == last { 0 } else { CONTEXT_LINES };
                let n = block.lines.len();
                if n > keep_head + keep_tail {
                    for line in &block.lines[..keep_head] {
                        plain_line(&mut out, line);
                    }
                    collapsed(&mut out, n - keep_head - keep_tail);
                    for line in &block.lines[n - keep_tail..] {
                        plain_line(&mut out, line);
                    }
                } else {
                    block.lines.iter().for_each(|l| plain_line(&mut out, l));
                }
            }
            ChangeKind::Removed => {
                let paired = blocks
                    .get(i + 1)
                    .filter(|next| {
                        next.kind == ChangeKind::Added && next.lines.len() == block.lines.len()
                    });
                if let Some(added) = paired {
                    for (old, new) in block.lines.iter().zip(&added.lines) {
                        highlighted_line(&mut out, &old.text, &new.text, ChangeKind::Removed);
                    }
                    for (old, new) in block.lines.iter().zip(&added.lines) {
                        highlighted_line(&mut out, &old.text, &new.text, ChangeKind::Added);
                    }
                    i += 1;
                } else {
                    block.lines.iter().for_each(|l| plain_line(&mut out, l));
                }
            }
            ChangeKind::Added => block.lines.iter().for_each(|l| plain_line(&mut out, l)),
        }
        i += 1;
    }
    out
}

/// Render every changed section as a titled redline.
pub fn render_sections_diff(sections: &[SectionDiff]) -> String {
    let mut out = String::new();
    for section in sections.iter().filter(|s| s.has_changes()) {
        let status = if section.is_added() {
            "added".green()
        } else if section.is_removed() {
            "removed".red()
        } else {
            "modified".yellow()
        };
        let _ = writeln!(
            out,
            "{} [{}] {}",
            "§".cyan(),
            status,
            section.path.bold()
        );
        for line in section.diff.iter().filter(|l| l.kind != ChangeKind::Unchanged) {
            plain_line(&mut out, line);
        }
        out.push('\n');
    }
    out
}

pub fn render_stats(stats: &DocumentStats) -> String {
    format!(
        "{} {}, {} unchanged, {} sections changed",
        format!("+{}", stats.total_additions).green(),
        format!("-{}", stats.total_deletions).red(),
        stats.total_unchanged,
        stats.sections_changed.to_string().bold(),
    )
}

pub fn render_summary(summary: &[String]) -> String {
    summary
        .iter()
        .map(|entry| format!("  • {entry}\n"))
        .collect()
}

/// Outline of an extraction: one line per section, indented by level.
pub fn render_outline(extraction: &Extraction) -> String {
    let mut out = format!("Strategy: {}\n", extraction.strategy.cyan());
    for section in &extraction.sections {
        let indent = "  ".repeat(section.level.saturating_sub(1));
        let lines = section.content.lines().filter(|l| !l.trim().is_empty()).count();
        let _ = writeln!(
            out,
            "{indent}{} {}",
            section.title.bold(),
            format!("({lines} lines)").dimmed()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline_diff::{group_into_blocks, line_diff};
    use redline_sections::extract_sections;
    use redline_types::DiffStats;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn blocks(a: &str, b: &str) -> Vec<DiffBlock> {
        group_into_blocks(&line_diff(a, b))
    }

    #[test]
    fn replaced_line_is_paired() {
        no_color();
        let out = render_blocks(&blocks("keep\nNet 30 days", "keep\nNet 60 days"));
        assert_eq!(out, "  keep\n- Net 30 days\n+ Net 60 days\n");
    }

    #[test]
    fn unpaired_blocks_render_plainly() {
        no_color();
        let out = render_blocks(&blocks("a", "a\nb\nc"));
        assert_eq!(out, "  a\n+ b\n+ c\n");
    }

    #[test]
    fn long_unchanged_runs_collapse() {
        no_color();
        let original: Vec<String> = (1..=20).map(|i| format!("line {i}")).collect();
        let mut revised = original.clone();
        revised[10] = "changed".into();
        let out = render_blocks(&blocks(&original.join("\n"), &revised.join("\n")));

        assert!(out.contains("... 7 unchanged lines ..."));
        assert!(out.contains("... 6 unchanged lines ..."));
        assert!(out.contains("  line 8\n"));
        assert!(out.contains("  line 14\n"));
        assert!(!out.contains("  line 1\n"));
        assert!(!out.contains("line 20"));
    }

    #[test]
    fn identical_documents_render_as_context() {
        no_color();
        assert_eq!(render_blocks(&blocks("x\ny", "x\ny")), "  x\n  y\n");
    }

    #[test]
    fn long_identical_document_is_not_collapsed() {
        no_color();
        let text: Vec<String> = (1..=12).map(|i| format!("line {i}")).collect();
        let text = text.join("\n");
        let out = render_blocks(&blocks(&text, &text));
        assert!(!out.contains("unchanged lines"));
        assert_eq!(out.lines().count(), 12);
    }

    #[test]
    fn section_redline_skips_unchanged() {
        no_color();
        let section = |path: &str, original: &str, revised: &str| {
            let diff = line_diff(original, revised);
            SectionDiff {
                path: path.into(),
                title: path.into(),
                level: 1,
                original_text: original.into(),
                revised_text: revised.into(),
                stats: DiffStats::from_lines(&diff),
                diff,
            }
        };
        let out = render_sections_diff(&[
            section("Same", "x", "x"),
            section("Fees", "Net 30\nkept", "Net 60\nkept"),
        ]);
        assert!(!out.contains("Same"));
        assert!(out.starts_with("§ [modified] Fees\n"));
        assert!(out.contains("- Net 30\n+ Net 60\n"));
        assert!(!out.contains("kept"));
    }

    #[test]
    fn stats_line() {
        no_color();
        let stats = DocumentStats {
            total_additions: 2,
            total_deletions: 1,
            total_unchanged: 5,
            sections_changed: 1,
        };
        assert_eq!(render_stats(&stats), "+2 -1, 5 unchanged, 1 sections changed");
    }

    #[test]
    fn summary_bullets() {
        let out = render_summary(&["1 section changed".into()]);
        assert_eq!(out, "  • 1 section changed\n");
    }

    #[test]
    fn outline_indents_by_level() {
        no_color();
        let extraction = Extraction {
            strategy: "markdown".into(),
            sections: extract_sections("# Terms\nintro\n## Fees\nNet 30\nlate fee"),
        };
        let out = render_outline(&extraction);
        assert_eq!(
            out,
            "Strategy: markdown\nTerms (1 lines)\n  Fees (2 lines)\n"
        );
    }
}
