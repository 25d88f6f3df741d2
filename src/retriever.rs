// file: src/retriever.rs
// description: Retrieval adapter bridging the document store to a search index
// reference: single-hop lookup and delegation

use crate::error::Result;
use crate::index::SearchIndex;
use crate::store::MemoryDataStore;
use tracing::debug;

/// Bridges a [`MemoryDataStore`] to an external [`SearchIndex`].
///
/// The adapter owns neither collaborator; both are borrowed at construction
/// and must outlive it. No validation happens up front, and no state is kept
/// between calls: every `retrieve` re-reads the store and re-invokes the
/// index.
pub struct IndexRetriever<'a, I: SearchIndex> {
    index: &'a I,
    store: &'a MemoryDataStore,
}

impl<'a, I: SearchIndex> IndexRetriever<'a, I> {
    pub fn new(index: &'a I, store: &'a MemoryDataStore) -> Self {
        Self { index, store }
    }

    /// Resolve `key` to a document and delegate search over its body.
    ///
    /// Returns `Ok(None)` when no document exists for `key`; the index is
    /// not invoked in that case. On a hit, the index's output is forwarded
    /// verbatim, and any failure it raises propagates unchanged.
    pub fn retrieve(&self, key: &str) -> Result<Option<I::Matches>> {
        match self.store.get_document(key) {
            Some(document) => {
                debug!("Document found for key '{}', delegating search", key);
                let matches = self.index.search(document)?;
                Ok(Some(matches))
            }
            None => {
                debug!("No document stored under key '{}'", key);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use std::cell::{Cell, RefCell};

    /// Test double that records every search invocation and returns a
    /// canned match list.
    struct RecordingIndex {
        calls: Cell<usize>,
        seen: RefCell<Vec<String>>,
        matches: Vec<String>,
    }

    impl RecordingIndex {
        fn returning(matches: &[&str]) -> Self {
            Self {
                calls: Cell::new(0),
                seen: RefCell::new(Vec::new()),
                matches: matches.iter().map(|m| m.to_string()).collect(),
            }
        }
    }

    impl SearchIndex for RecordingIndex {
        type Matches = Vec<String>;

        fn search(&self, content: &str) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(content.to_string());
            Ok(self.matches.clone())
        }
    }

    struct FailingIndex;

    impl SearchIndex for FailingIndex {
        type Matches = Vec<String>;

        fn search(&self, _content: &str) -> Result<Vec<String>> {
            Err(BridgeError::SearchIndex("backend unavailable".to_string()))
        }
    }

    #[test]
    fn test_retrieve_absent_key_skips_index() {
        let store = MemoryDataStore::new();
        let index = RecordingIndex::returning(&["match-A"]);
        let retriever = IndexRetriever::new(&index, &store);

        let result = retriever.retrieve("missing").unwrap();

        assert_eq!(result, None);
        assert_eq!(index.calls.get(), 0);
    }

    #[test]
    fn test_retrieve_invokes_index_once_with_stored_body() {
        let mut store = MemoryDataStore::new();
        store.add_document("doc1", "This is the content of document 1.");
        let index = RecordingIndex::returning(&["match-A"]);
        let retriever = IndexRetriever::new(&index, &store);

        let result = retriever.retrieve("doc1").unwrap();

        assert_eq!(result, Some(vec!["match-A".to_string()]));
        assert_eq!(index.calls.get(), 1);
        assert_eq!(
            index.seen.borrow().as_slice(),
            ["This is the content of document 1."]
        );
    }

    #[test]
    fn test_retrieve_forwards_latest_document_body() {
        let mut store = MemoryDataStore::new();
        store.add_document("doc1", "X");
        store.add_document("doc1", "Y");
        let index = RecordingIndex::returning(&[]);
        let retriever = IndexRetriever::new(&index, &store);

        retriever.retrieve("doc1").unwrap();

        assert_eq!(index.seen.borrow().as_slice(), ["Y"]);
    }

    #[test]
    fn test_index_failure_propagates_unchanged() {
        let mut store = MemoryDataStore::new();
        store.add_document("doc1", "body");
        let retriever = IndexRetriever::new(&FailingIndex, &store);

        let err = retriever.retrieve("doc1").unwrap_err();

        assert!(matches!(err, BridgeError::SearchIndex(ref msg) if msg == "backend unavailable"));
    }

    #[test]
    fn test_repeated_retrieve_refetches_each_time() {
        let mut store = MemoryDataStore::new();
        store.add_document("doc1", "body");
        let index = RecordingIndex::returning(&["m"]);
        let retriever = IndexRetriever::new(&index, &store);

        retriever.retrieve("doc1").unwrap();
        retriever.retrieve("doc1").unwrap();

        // No caching: two calls mean two index invocations
        assert_eq!(index.calls.get(), 2);
    }
}
