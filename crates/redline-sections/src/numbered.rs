//! Numbered legal clause strategy.

use redline_types::Section;

use crate::strategy::{parse_numbered, SectionStrategy};

/// Splits a document at numbered clauses (`1`, `2.1`, `2.1.7`, …).
///
/// The level is the number of dot-separated groups. Paths are flat: a clause
/// is keyed by its own `number title` line and is never nested under its
/// parent clause. Lines before the first clause are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberedClauseStrategy;

impl SectionStrategy for NumberedClauseStrategy {
    fn name(&self) -> &str {
        "numbered"
    }

    fn detect(&self, lines: &[&str]) -> bool {
        lines.iter().any(|l| parse_numbered(l).is_some())
    }

    fn extract(&self, lines: &[&str]) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut current: Option<(String, usize, Vec<&str>)> = None;

        for &line in lines {
            if let Some(clause) = parse_numbered(line) {
                if let Some(done) = current.take() {
                    sections.push(close(done));
                }
                current = Some((line.trim().to_string(), clause.level, Vec::new()));
            } else if let Some((_, _, content)) = current.as_mut() {
                content.push(line);
            }
        }

        if let Some(done) = current {
            sections.push(close(done));
        }
        sections
    }
}

fn close((heading, level, content): (String, usize, Vec<&str>)) -> Section {
    Section::new(heading.clone(), level, content.join("\n"), heading)
}
