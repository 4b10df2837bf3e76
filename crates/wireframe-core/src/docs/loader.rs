//! Document loading with cache lookup and failure fallback.

use super::{DocumentCache, DocumentSource, MarkupRenderer};

/// Markup shown in place of a document that could not be loaded.
pub const ERROR_MARKUP: &str = "<p>Error loading document</p>";

/// How a document was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetched from the source and cached.
    Fetched,
    /// Served from the cache.
    Cached,
    /// Loading failed; the markup is [`ERROR_MARKUP`].
    Failed,
}

/// A rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub id: String,
    pub markup: String,
    pub status: LoadStatus,
}

/// Loads documents through the cache and renders them.
pub struct DocumentLoader {
    source: Box<dyn DocumentSource>,
    renderer: Box<dyn MarkupRenderer>,
    cache: DocumentCache,
}

impl DocumentLoader {
    /// Create a loader with an empty cache.
    pub fn new(source: Box<dyn DocumentSource>, renderer: Box<dyn MarkupRenderer>) -> Self {
        Self {
            source,
            renderer,
            cache: DocumentCache::new(),
        }
    }

    /// The loader's cache.
    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Load and render a document.
    ///
    /// The cache is consulted first and filled after every successful fetch.
    /// Failures are logged and produce [`ERROR_MARKUP`]; they are never
    /// returned as errors.
    pub async fn load(&self, id: &str) -> LoadedDocument {
        let (text, status) = match self.cache.get(id) {
            Some(text) => (text, LoadStatus::Cached),
            None => match self.source.fetch(id).await {
                Ok(text) => {
                    self.cache.insert(id, text.clone());
                    (text, LoadStatus::Fetched)
                }
                Err(e) => {
                    log::error!("Error loading document {id}: {e}");
                    return LoadedDocument {
                        id: id.to_string(),
                        markup: ERROR_MARKUP.to_string(),
                        status: LoadStatus::Failed,
                    };
                }
            },
        };

        LoadedDocument {
            id: id.to_string(),
            markup: self.renderer.render(&text),
            status,
        }
    }
}
