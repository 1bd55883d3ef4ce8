//! Error types for the menagerie binary.

use menagerie_feeding::FeedingError;

/// Errors that can occur while configuring and running the report.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An environment variable held a value the binary does not understand.
    #[error("config error: {0}")]
    Config(String),

    /// The sample roster asked the factory for an unknown feeding category.
    #[error("feeding error: {0}")]
    Feeding(#[from] FeedingError),

    /// Writing the report failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON snapshot could not be rendered.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
