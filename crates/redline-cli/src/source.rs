use std::io::ErrorKind;
use std::path::Path;

use redline_engine::{DocumentContent, DocumentSource, EngineError, EngineResult};

/// Resolves document identifiers as file paths.
///
/// Text and markdown files are compared as-is, so both renderings are the
/// file contents.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSource;

impl DocumentSource for FileSource {
    fn fetch(&self, id: &str) -> EngineResult<DocumentContent> {
        let path = Path::new(id);
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(DocumentContent::plain(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(EngineError::DocumentNotFound(path.display().to_string()))
            }
            Err(e) => Err(EngineError::Source {
                id: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
