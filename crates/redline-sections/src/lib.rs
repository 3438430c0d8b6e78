//! Section extraction for Redline.
//!
//! Recovers the logical structure of a text or markdown document so two
//! revisions can be compared section by section. Three strategies are tried
//! in order:
//!
//! 1. [`MarkdownStrategy`] -- `#` headings, nested into breadcrumb paths
//! 2. [`NumberedClauseStrategy`] -- `2.1.7`-style legal clauses, flat paths
//! 3. [`LineFallbackStrategy`] -- plain lines grouped at ALL-CAPS breaks
//!
//! [`SectionExtractor`] runs the cascade and guarantees a non-empty result.

pub mod extractor;
pub mod fallback;
pub mod markdown;
pub mod numbered;
pub mod strategy;

pub use extractor::{extract_sections, Extraction, SectionExtractor, WHOLE_DOCUMENT_TITLE};
pub use fallback::LineFallbackStrategy;
pub use markdown::{MarkdownStrategy, PATH_SEPARATOR};
pub use numbered::NumberedClauseStrategy;
pub use strategy::{
    content_lines, is_all_caps, parse_heading, parse_numbered, starts_new_section, Heading,
    NumberedClause, SectionStrategy,
};
