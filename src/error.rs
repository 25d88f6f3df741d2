// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Error, Debug)]
pub enum BridgeError {
    /// Failure raised by an external search index implementation. The
    /// retrieval adapter never constructs this variant; it only propagates
    /// it to the caller unchanged.
    #[error("Search index error: {0}")]
    SearchIndex(String),
}
