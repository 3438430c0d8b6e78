//! Plain-line strategy for documents without recognisable structure.

use redline_types::Section;

use crate::strategy::{starts_new_section, SectionStrategy};

/// Maximum number of characters of a line used as a fallback section title.
pub const TITLE_CHARS: usize = 50;

/// Lines shorter than this cannot open the first section.
pub const MIN_SECTION_LINE_CHARS: usize = 3;

/// Groups unstructured lines into sections.
///
/// The first line of at least three characters opens a section. Following
/// lines are appended to it until one that would start a section under any
/// strategy (in practice an ALL-CAPS line, since headings and clauses select
/// their own strategies). The opening line is part of the content and, as
/// written, is the path. Always applicable, so it belongs at the end of a
/// strategy cascade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineFallbackStrategy;

impl SectionStrategy for LineFallbackStrategy {
    fn name(&self) -> &str {
        "lines"
    }

    fn detect(&self, _lines: &[&str]) -> bool {
        true
    }

    fn extract(&self, lines: &[&str]) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut current: Option<Vec<&str>> = None;

        for &line in lines {
            let opens = match current {
                None => line.trim().chars().count() >= MIN_SECTION_LINE_CHARS,
                Some(_) => starts_new_section(line),
            };
            if opens {
                if let Some(done) = current.take() {
                    sections.push(close(done));
                }
                current = Some(vec![line]);
            } else if let Some(content) = current.as_mut() {
                content.push(line);
            }
        }

        if let Some(done) = current {
            sections.push(close(done));
        }
        sections
    }
}

fn close(content: Vec<&str>) -> Section {
    let opening = content.first().copied().unwrap_or_default();
    let title: String = opening.chars().take(TITLE_CHARS).collect();
    Section::new(title, 1, content.join("\n"), opening)
}
