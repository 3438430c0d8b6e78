//! Value types for the Redline document comparison engine.
//!
//! Every type here is an immutable, serializable value produced by a single
//! comparison. Nothing is persisted between invocations.
//!
//! # Key Types
//!
//! - [`DiffLine`] / [`DiffStats`] -- Line-level diff records and their counts
//! - [`DiffToken`] -- Word-level diff record for inline highlighting
//! - [`DiffBlock`] -- Maximal run of same-kind lines with line ranges
//! - [`Section`] / [`SectionDiff`] -- Document structure and per-section redlines
//! - [`DocumentDiff`] / [`DocumentStats`] -- Full comparison result
//! - [`ContentId`] -- BLAKE3 content hash used for cache keys and reports

pub mod block;
pub mod change;
pub mod content_id;
pub mod document;
pub mod error;
pub mod section;

pub use block::DiffBlock;
pub use change::{ChangeKind, DiffLine, DiffStats, DiffToken};
pub use content_id::ContentId;
pub use document::{DocumentDiff, DocumentStats};
pub use error::TypeError;
pub use section::{Section, SectionDiff};
