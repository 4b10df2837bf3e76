//! Document sources.

use super::{BoxFuture, DocError, DocResult, DocumentSource};
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

/// Reads documents from a directory. Ids are relative paths.
pub struct FileSource {
    base_path: PathBuf,
}

impl FileSource {
    /// Create a source rooted at `base_path`.
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve an id to a path inside the base directory.
    fn document_path(&self, id: &str) -> DocResult<PathBuf> {
        let relative = Path::new(id);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if id.is_empty() || escapes {
            return Err(DocError::InvalidId(id.to_string()));
        }
        Ok(self.base_path.join(relative))
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self, id: &str) -> BoxFuture<'_, DocResult<String>> {
        let path = self.document_path(id);
        let id = id.to_string();
        Box::pin(async move {
            let path = path?;
            if !path.is_file() {
                return Err(DocError::NotFound(id));
            }
            fs::read_to_string(&path)
                .map_err(|e| DocError::Io(format!("Failed to read {}: {}", path.display(), e)))
        })
    }
}

/// In-memory documents for testing and embedded content.
#[derive(Default)]
pub struct MemorySource {
    documents: RwLock<HashMap<String, String>>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document.
    pub fn insert(&self, id: &str, text: &str) {
        if let Ok(mut docs) = self.documents.write() {
            docs.insert(id.to_string(), text.to_string());
        }
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, id: &str) -> BoxFuture<'_, DocResult<String>> {
        let id = id.to_string();
        Box::pin(async move {
            let docs = self
                .documents
                .read()
                .map_err(|e| DocError::Other(format!("Lock error: {}", e)))?;
            docs.get(&id).cloned().ok_or(DocError::NotFound(id))
        })
    }
}
