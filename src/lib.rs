// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod error;
pub mod index;
pub mod retriever;
pub mod store;
pub mod utils;

pub use error::{BridgeError, Result};
pub use index::SearchIndex;
pub use retriever::IndexRetriever;
pub use store::MemoryDataStore;
