// file: src/store.rs
// description: In-memory key-value store for raw text documents
// reference: internal data structures

use std::collections::HashMap;
use tracing::debug;

/// A simple in-memory data store mapping string keys to document bodies.
///
/// Documents are opaque text; no structure is imposed on keys or content,
/// and both may be empty. Entries live for the lifetime of the store
/// instance. Single-threaded mutation is assumed; callers needing shared
/// access must synchronize externally.
#[derive(Debug, Default)]
pub struct MemoryDataStore {
    store: HashMap<String, String>,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    /// Insert a document under `key`, overwriting any previous entry for
    /// the same key (last write wins).
    pub fn add_document(&mut self, key: impl Into<String>, document: impl Into<String>) {
        let key = key.into();
        debug!("Storing document under key '{}'", key);
        self.store.insert(key, document.into());
    }

    /// Look up the document stored under `key`. Absence is an expected
    /// outcome, not an error.
    pub fn get_document(&self, key: &str) -> Option<&str> {
        self.store.get(key).map(String::as_str)
    }

}
