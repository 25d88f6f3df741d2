// file: src/index.rs
// description: External search index capability trait
// reference: injected capability seam, substitutable with test doubles

use crate::error::Result;

/// The external search capability this crate delegates to.
///
/// Implementations perform content search over a document body and return
/// matches in whatever shape they define; this crate makes no assumption
/// about ranking, scoring, or result structure. A failing implementation
/// surfaces [`crate::BridgeError::SearchIndex`], which callers of the
/// retrieval adapter receive untranslated.
pub trait SearchIndex {
    /// The index-defined match collection, forwarded verbatim to callers.
    type Matches;

    fn search(&self, content: &str) -> Result<Self::Matches>;
}
