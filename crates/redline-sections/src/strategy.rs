use std::sync::LazyLock;

use regex::Regex;

use redline_types::Section;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is valid"));

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)*)\s+(.+)$").expect("clause pattern is valid"));

// ---------------------------------------------------------------------------
// SectionStrategy trait
// ---------------------------------------------------------------------------

/// One way of recovering document structure from plain lines.
///
/// Strategies are tried in priority order by the extractor; the first one
/// whose [`detect`](Self::detect) returns `true` produces the sections.
///
/// The trait is object-safe and `Send + Sync` so strategies can be stored in
/// a `Vec<Box<dyn SectionStrategy>>`.
pub trait SectionStrategy: Send + Sync {
    /// Human-readable name of this strategy (e.g., "markdown", "numbered").
    fn name(&self) -> &str;

    /// Returns `true` if this strategy recognises structure in `lines`.
    ///
    /// `lines` contains only the non-blank lines of the document.
    fn detect(&self, lines: &[&str]) -> bool;

    /// Turn `lines` into ordered sections.
    fn extract(&self, lines: &[&str]) -> Vec<Section>;
}

// ---------------------------------------------------------------------------
// Line classification
// ---------------------------------------------------------------------------

/// A markdown ATX heading: `#` count and trimmed title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub title: &'a str,
}

/// A numbered clause such as `2.1.7 Late fees`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberedClause<'a> {
    /// Count of dot-separated numeric groups.
    pub level: usize,
    pub number: &'a str,
    pub title: &'a str,
}

/// Parse a markdown heading (`#` to `######` followed by whitespace and text).
pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let caps = HEADING.captures(line.trim())?;
    let hashes = caps.get(1)?.as_str();
    let title = caps.get(2)?.as_str().trim();
    Some(Heading {
        level: hashes.len(),
        title,
    })
}

/// Parse a numbered clause (`N`, `N.N`, `N.N.N`, … followed by whitespace and text).
pub fn parse_numbered(line: &str) -> Option<NumberedClause<'_>> {
    let caps = NUMBERED.captures(line.trim())?;
    let number = caps.get(1)?.as_str();
    let title = caps.get(2)?.as_str().trim();
    Some(NumberedClause {
        level: number.split('.').count(),
        number,
        title,
    })
}

/// An upper-case line longer than three characters, e.g. `DEFINITIONS`.
pub fn is_all_caps(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() > 3
        && trimmed.chars().any(char::is_alphabetic)
        && !trimmed.chars().any(char::is_lowercase)
}

/// Returns `true` for lines that open a new section under any strategy.
pub fn starts_new_section(line: &str) -> bool {
    parse_heading(line).is_some() || parse_numbered(line).is_some() || is_all_caps(line)
}

/// The non-blank lines of `text`, in order.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|l| !l.trim().is_empty()).collect()
}
