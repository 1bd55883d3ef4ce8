//! Error types for the `menagerie-feeding` crate.
//!
//! Selecting a strategy from a free-text category key is the only fallible
//! step in the whole taxonomy. Everything downstream of a built strategy is
//! total.

use menagerie_types::TypeError;

/// Errors that can occur while selecting a feeding strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedingError {
    /// The category key is outside the fixed set
    /// (`hunting`, `scavenger`, `herbivores`, `livestock`, `pet`).
    #[error("unknown feeding type: {0}")]
    UnknownCategory(String),
}

impl From<TypeError> for FeedingError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::UnknownFeedingCategory(key) => Self::UnknownCategory(key),
        }
    }
}
