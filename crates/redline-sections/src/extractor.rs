use tracing::debug;

use redline_types::Section;

use crate::fallback::LineFallbackStrategy;
use crate::markdown::MarkdownStrategy;
use crate::numbered::NumberedClauseStrategy;
use crate::strategy::{content_lines, SectionStrategy};

/// Title and path of the section emitted when no strategy finds any.
pub const WHOLE_DOCUMENT_TITLE: &str = "Document";

/// Result of running the extractor over one text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    /// Name of the strategy that produced the sections.
    pub strategy: String,
    pub sections: Vec<Section>,
}

/// A priority cascade of section strategies.
///
/// The first strategy whose `detect` accepts the document's non-blank lines
/// extracts the sections. If that yields nothing, a single whole-document
/// section is returned instead, so extraction never produces an empty list.
pub struct SectionExtractor {
    strategies: Vec<Box<dyn SectionStrategy>>,
}

impl SectionExtractor {
    /// Create an extractor with an empty cascade.
    ///
    /// Use [`Self::add_strategy`] to add strategies, or
    /// [`Self::with_default_strategies`] for the standard cascade.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Markdown headings -> numbered clauses -> plain lines.
    pub fn with_default_strategies() -> Self {
        let mut extractor = Self::new();
        extractor.add_strategy(Box::new(MarkdownStrategy));
        extractor.add_strategy(Box::new(NumberedClauseStrategy));
        extractor.add_strategy(Box::new(LineFallbackStrategy));
        extractor
    }

    /// Append a strategy to the end of the cascade.
    pub fn add_strategy(&mut self, strategy: Box<dyn SectionStrategy>) {
        self.strategies.push(strategy);
    }

    /// Number of strategies in the cascade.
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Extract sections from `text`.
    pub fn extract(&self, text: &str) -> Vec<Section> {
        self.extract_detailed(text).sections
    }

    /// Extract sections and report which strategy was used.
    pub fn extract_detailed(&self, text: &str) -> Extraction {
        let lines = content_lines(text);

        let chosen = self.strategies.iter().find(|s| s.detect(&lines));
        let (strategy, mut sections) = match chosen {
            Some(s) => (s.name().to_string(), s.extract(&lines)),
            None => (WHOLE_DOCUMENT_TITLE.to_lowercase(), Vec::new()),
        };

        if sections.is_empty() {
            debug!(%strategy, lines = lines.len(), "no sections found; using whole document");
            sections.push(Section::new(
                WHOLE_DOCUMENT_TITLE,
                1,
                lines.join("\n"),
                WHOLE_DOCUMENT_TITLE,
            ));
        }

        debug!(%strategy, sections = sections.len(), "sections extracted");
        Extraction { strategy, sections }
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::with_default_strategies()
    }
}

impl std::fmt::Debug for SectionExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("SectionExtractor")
            .field("strategies", &names)
            .finish()
    }
}

/// Extract sections with the default cascade.
pub fn extract_sections(text: &str) -> Vec<Section> {
    SectionExtractor::with_default_strategies().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strategy_of(text: &str) -> String {
        SectionExtractor::default().extract_detailed(text).strategy
    }

    #[test]
    fn markdown_wins_over_numbered() {
        assert_eq!(strategy_of("1 Intro\n# Title\nBody"), "markdown");
    }

    #[test]
    fn numbered_used_without_headings() {
        assert_eq!(strategy_of("Preface\n2.1 Payment\nNet 30"), "numbered");
    }

    #[test]
    fn plain_text_uses_lines() {
        assert_eq!(strategy_of("Prashant\nEngineer\nNLP"), "lines");
    }

    #[test]
    fn numbered_clause_scenario() {
        let sections = extract_sections("2.1 Payment\nNet 30");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].level, 2);
        assert_eq!(sections[0].path, "2.1 Payment");
    }

    #[test]
    fn empty_input_yields_whole_document_section() {
        let sections = extract_sections("");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, WHOLE_DOCUMENT_TITLE);
        assert_eq!(sections[0].content, "");
    }

    #[test]
    fn short_lines_yield_whole_document_section() {
        let sections = extract_sections("a\n\nbc");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].path, WHOLE_DOCUMENT_TITLE);
        assert_eq!(sections[0].content, "a\nbc");
    }

    #[test]
    fn empty_cascade_still_returns_document() {
        let extraction = SectionExtractor::new().extract_detailed("Hello there");
        assert_eq!(extraction.strategy, "document");
        assert_eq!(extraction.sections[0].content, "Hello there");
    }

    #[test]
    fn debug_lists_strategy_names() {
        let debug = format!("{:?}", SectionExtractor::default());
        assert!(debug.contains("markdown"));
        assert!(debug.contains("numbered"));
        assert!(debug.contains("lines"));
    }

    proptest! {
        #[test]
        fn never_empty(text in "[#0-9. a-zA-Z\n]{0,80}") {
            prop_assert!(!extract_sections(&text).is_empty());
        }
    }
}
