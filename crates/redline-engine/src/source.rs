//! Resolution of document identifiers to comparable content.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The renderings of one stored document revision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Markdown rendering; this is what gets compared.
    pub markdown: String,
    /// Plain-text rendering.
    pub text: String,
}

impl DocumentContent {
    /// Content whose markdown and plain-text renderings are the same string.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            markdown: text.clone(),
            text,
        }
    }
}

/// Looks up document revisions by identifier.
pub trait DocumentSource: Send + Sync {
    /// Fetch a document's content.
    ///
    /// Returns `Err(EngineError::DocumentNotFound)` for unknown identifiers.
    fn fetch(&self, id: &str) -> EngineResult<DocumentContent>;
}

/// In-memory document source for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryDocumentSource {
    documents: RwLock<HashMap<String, DocumentContent>>,
}

impl InMemoryDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document.
    pub fn insert(&self, id: impl Into<String>, content: DocumentContent) {
        if let Ok(mut docs) = self.documents.write() {
            docs.insert(id.into(), content);
        }
    }
}

impl DocumentSource for InMemoryDocumentSource {
    fn fetch(&self, id: &str) -> EngineResult<DocumentContent> {
        let docs = self.documents.read().map_err(|e| EngineError::Source {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        docs.get(id)
            .cloned()
            .ok_or_else(|| EngineError::DocumentNotFound(id.to_string()))
    }
}
