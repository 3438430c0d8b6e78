//! Document comparison engine for Redline.
//!
//! Compares two revisions of a text or markdown document: a whole-document
//! line diff grouped into blocks, a section-aware redline built by aligning
//! extracted sections by path, and a short natural-language change summary.
//!
//! # Key Types
//!
//! - [`diff_documents`] -- Total, unguarded comparison of two strings
//! - [`DocumentDiffer`] -- Configured comparison with input ceilings and an optional cache
//! - [`align_sections`] -- Path-keyed pairing of sections across revisions
//! - [`generate_change_summary`] -- Capped list of the most significant changes
//! - [`DiffReport`] -- Serializable export without document text
//! - [`DiffCache`] / [`InMemoryDiffCache`] -- Injected result caching
//! - [`DocumentSource`] -- Upstream lookup of document content by identifier

pub mod align;
pub mod cache;
pub mod config;
pub mod differ;
pub mod error;
pub mod report;
pub mod source;
pub mod summary;

pub use align::align_sections;
pub use cache::{DiffCache, DiffKey, InMemoryDiffCache};
pub use config::{EngineConfig, SummaryConfig};
pub use differ::{diff_documents, DocumentDiffer};
pub use error::{EngineError, EngineResult, Side};
pub use report::{DiffReport, SectionReport, SectionStatus};
pub use source::{DocumentContent, DocumentSource, InMemoryDocumentSource};
pub use summary::{generate_change_summary, summarize, NO_CHANGES};
