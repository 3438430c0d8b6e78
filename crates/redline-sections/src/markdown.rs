//! Markdown heading strategy.

use redline_types::Section;

use crate::strategy::{parse_heading, SectionStrategy};

/// Separator between ancestor titles in a markdown section path.
pub const PATH_SEPARATOR: &str = " > ";

/// Splits a document at `#`..`######` headings.
///
/// Open sections are tracked as a stack of indices into the output. A heading
/// closes every open section at the same or a deeper level, and its path is
/// the breadcrumb of the titles still open plus its own. Text before the
/// first heading belongs to no section and is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownStrategy;

impl SectionStrategy for MarkdownStrategy {
    fn name(&self) -> &str {
        "markdown"
    }

    fn detect(&self, lines: &[&str]) -> bool {
        lines.iter().any(|l| parse_heading(l).is_some())
    }

    fn extract(&self, lines: &[&str]) -> Vec<Section> {
        let mut open: Vec<OpenSection<'_>> = Vec::new();
        let mut stack: Vec<usize> = Vec::new();

        for &line in lines {
            match parse_heading(line) {
                Some(heading) => {
                    while stack
                        .last()
                        .is_some_and(|&idx| open[idx].level >= heading.level)
                    {
                        stack.pop();
                    }

                    let mut path: Vec<&str> = stack.iter().map(|&idx| open[idx].title).collect();
                    path.push(heading.title);

                    stack.push(open.len());
                    open.push(OpenSection {
                        title: heading.title,
                        level: heading.level,
                        path: path.join(PATH_SEPARATOR),
                        content: Vec::new(),
                    });
                }
                None => {
                    if let Some(&idx) = stack.last() {
                        open[idx].content.push(line);
                    }
                }
            }
        }

        open.into_iter().map(OpenSection::close).collect()
    }
}

struct OpenSection<'a> {
    title: &'a str,
    level: usize,
    path: String,
    content: Vec<&'a str>,
}

impl OpenSection<'_> {
    fn close(self) -> Section {
        Section::new(self.title, self.level, self.content.join("\n"), self.path)
    }
}
