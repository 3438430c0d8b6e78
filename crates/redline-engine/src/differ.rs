//! Document comparison: whole-document diff plus section-aligned redlines.

use std::sync::Arc;

use tracing::{debug, warn};

use redline_diff::{group_into_blocks, line_diff, split_lines};
use redline_sections::SectionExtractor;
use redline_types::{DiffStats, DocumentDiff, DocumentStats};

use crate::align::align_sections;
use crate::cache::{DiffCache, DiffKey};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult, Side};
use crate::report::DiffReport;
use crate::source::DocumentSource;
use crate::summary::summarize;

/// Compare two document revisions with the default section strategies.
///
/// Total over all inputs. Memory stays near-linear in the input, but time
/// grows with the product of both line counts; see [`DocumentDiffer`] for the
/// guarded entry point.
pub fn diff_documents(original: &str, revised: &str, align_by_headings: bool) -> DocumentDiff {
    diff_with_extractor(
        &SectionExtractor::with_default_strategies(),
        original,
        revised,
        align_by_headings,
    )
}

fn diff_with_extractor(
    extractor: &SectionExtractor,
    original: &str,
    revised: &str,
    align_by_headings: bool,
) -> DocumentDiff {
    let lines = line_diff(original, revised);
    let line_stats = DiffStats::from_lines(&lines);
    let blocks = group_into_blocks(&lines);

    let sections = if align_by_headings {
        align_sections(&extractor.extract(original), &extractor.extract(revised))
    } else {
        Vec::new()
    };

    let stats = DocumentStats {
        total_additions: line_stats.additions,
        total_deletions: line_stats.deletions,
        total_unchanged: line_stats.unchanged,
        sections_changed: sections.iter().filter(|s| s.has_changes()).count(),
    };

    debug!(
        blocks = blocks.len(),
        additions = stats.total_additions,
        deletions = stats.total_deletions,
        sections = sections.len(),
        sections_changed = stats.sections_changed,
        "documents compared"
    );

    DocumentDiff {
        blocks,
        stats,
        sections,
    }
}

/// Configured, size-guarded document comparison with an optional cache.
///
/// Comparisons are pure and synchronous; a differ can be shared between
/// threads and used concurrently.
pub struct DocumentDiffer {
    config: EngineConfig,
    extractor: SectionExtractor,
    cache: Option<Arc<dyn DiffCache>>,
}

impl DocumentDiffer {
    /// Create a differ with the default section strategies and no cache.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            extractor: SectionExtractor::with_default_strategies(),
            cache: None,
        }
    }

    /// Use `cache` to reuse results of identical comparisons.
    pub fn with_cache(mut self, cache: Arc<dyn DiffCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replace the section extractor.
    pub fn with_extractor(mut self, extractor: SectionExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// The current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare two revisions.
    ///
    /// Fails only when an input exceeds the configured ceilings.
    pub fn compare(&self, original: &str, revised: &str) -> EngineResult<DocumentDiff> {
        self.check_input(Side::Original, original)?;
        self.check_input(Side::Revised, revised)?;

        let align = self.config.align_by_headings;
        let key = self
            .cache
            .as_ref()
            .map(|_| DiffKey::new(original, revised, align));

        if let (Some(cache), Some(key)) = (&self.cache, &key) {
            if let Some(hit) = cache.get(key) {
                debug!(key = %key.id().short_hex(), "diff cache hit");
                return Ok(hit);
            }
        }

        let diff = diff_with_extractor(&self.extractor, original, revised, align);

        if let (Some(cache), Some(key)) = (&self.cache, key) {
            cache.put(key, diff.clone());
        }
        Ok(diff)
    }

    /// Resolve two document identifiers and compare their markdown.
    pub fn compare_sources(
        &self,
        source: &dyn DocumentSource,
        original_id: &str,
        revised_id: &str,
    ) -> EngineResult<DocumentDiff> {
        let original = source.fetch(original_id)?;
        let revised = source.fetch(revised_id)?;
        self.compare(&original.markdown, &revised.markdown)
    }

    /// Summarize a comparison with the configured limits.
    pub fn summarize(&self, diff: &DocumentDiff) -> Vec<String> {
        summarize(diff, &self.config.summary)
    }

    /// Compare two revisions and build an exportable report.
    pub fn report(&self, original: &str, revised: &str) -> EngineResult<DiffReport> {
        let diff = self.compare(original, revised)?;
        let summary = self.summarize(&diff);
        Ok(DiffReport::new(original, revised, &diff, summary))
    }

    fn check_input(&self, side: Side, text: &str) -> EngineResult<()> {
        let byte_limit = self.config.max_input_bytes;
        if byte_limit > 0 && text.len() > byte_limit {
            warn!(%side, bytes = text.len(), limit = byte_limit, "input rejected");
            return Err(EngineError::InputTooLarge {
                side,
                bytes: text.len(),
                limit: byte_limit,
            });
        }

        let line_limit = self.config.max_input_lines;
        if line_limit > 0 {
            let lines = split_lines(text).len();
            if lines > line_limit {
                warn!(%side, lines, limit = line_limit, "input rejected");
                return Err(EngineError::TooManyLines {
                    side,
                    lines,
                    limit: line_limit,
                });
            }
        }
        Ok(())
    }
}

impl Default for DocumentDiffer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl std::fmt::Debug for DocumentDiffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentDiffer")
            .field("config", &self.config)
            .field("extractor", &self.extractor)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}
