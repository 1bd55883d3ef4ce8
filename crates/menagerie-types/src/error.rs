//! Error types for the `menagerie-types` crate.

/// Errors produced while parsing text keys into closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The key is not one of the fixed feeding category keys.
    #[error("unknown feeding category: {0}")]
    UnknownFeedingCategory(String),
}
