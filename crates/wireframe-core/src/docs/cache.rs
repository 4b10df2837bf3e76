//! Document cache.

use std::collections::HashMap;
use std::sync::RwLock;

/// Raw document text keyed by id.
///
/// Entries are never evicted for the lifetime of the cache.
#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: RwLock<HashMap<String, String>>,
}

impl DocumentCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached document.
    pub fn get(&self, id: &str) -> Option<String> {
        self.entries.read().ok()?.get(id).cloned()
    }

    /// Cache a document, replacing any previous text for `id`.
    pub fn insert(&self, id: &str, text: String) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(id.to_string(), text);
            }
            Err(e) => log::warn!("document cache unavailable: {e}"),
        }
    }

    /// Check if a document is cached.
    pub fn contains(&self, id: &str) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(id))
            .unwrap_or(false)
    }

    /// Number of cached documents.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
