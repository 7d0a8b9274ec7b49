//! Persistence of raw input text across sessions.
//!
//! The calculator itself never reads or writes a store. Front ends hold an
//! [`InputStore`] and keep the text the user typed, keyed by field name.

mod memory;

use thiserror::Error;

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store contents could not be decoded: {0}")]
    Decode(String),

    #[error("store contents could not be encoded: {0}")]
    Encode(String),
}

/// A string-keyed store of string values.
///
/// Callers treat every failure as recoverable: a failed `get` falls back to
/// a default and a failed `set` keeps the in-memory value.
pub trait InputStore {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError>;

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError>;
}
