//! Predator feeding and its staged builder.
//!
//! A predator either hunts, in which case it carries a description of the
//! hunting process, or scavenges, in which case that description stays empty.
//!
//! # Order sensitivity
//!
//! [`PredatorFeedingBuilder::hunting_process`] reads the hunting flag as it
//! stands *at the moment it is called*. The flag must therefore be set first:
//!
//! ```
//! use menagerie_feeding::{Feeding, PredatorFeeding};
//!
//! let kept = PredatorFeeding::builder().hunting(true).hunting_process("A").build();
//! assert_eq!(kept.feed(), "A");
//!
//! let lost = PredatorFeeding::builder().hunting_process("A").hunting(true).build();
//! assert_eq!(lost.feed(), "");
//! ```

use menagerie_types::FeedingCategory;
use tracing::debug;

use crate::strategy::Feeding;

/// Feeding for wild meat eaters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredatorFeeding {
    is_hunting: bool,
    hunting_process: String,
}

impl PredatorFeeding {
    /// Start a new builder with `hunting = false` and an empty process.
    pub const fn builder() -> PredatorFeedingBuilder {
        PredatorFeedingBuilder::new()
    }

    /// Whether this predator hunts rather than scavenges.
    pub const fn is_hunting(&self) -> bool {
        self.is_hunting
    }
}

impl Feeding for PredatorFeeding {
    fn feed(&self) -> &str {
        &self.hunting_process
    }

    fn category(&self) -> FeedingCategory {
        if self.is_hunting {
            FeedingCategory::Hunting
        } else {
            FeedingCategory::Scavenger
        }
    }
}

/// Builder for [`PredatorFeeding`].
///
/// The hunting process text is accepted only while the hunting flag is
/// already `true`; otherwise it is discarded. See the
/// [module documentation](crate::predator) for the exact ordering contract.
#[derive(Debug, Clone, Default)]
pub struct PredatorFeedingBuilder {
    is_hunting: bool,
    hunting_process: String,
}

impl PredatorFeedingBuilder {
    /// Create a builder for a scavenger with no process text.
    pub const fn new() -> Self {
        Self {
            is_hunting: false,
            hunting_process: String::new(),
        }
    }

    /// Set whether the predator hunts.
    ///
    /// Does not touch any process text recorded earlier.
    #[must_use]
    pub fn hunting(mut self, is_hunting: bool) -> Self {
        self.is_hunting = is_hunting;
        self
    }

    /// Record how the predator hunts.
    ///
    /// Takes effect only if [`hunting`](Self::hunting) has already been set
    /// to `true` on this builder. Otherwise the text is dropped.
    #[must_use]
    pub fn hunting_process(mut self, process: impl Into<String>) -> Self {
        if self.is_hunting {
            self.hunting_process = process.into();
        } else {
            debug!("hunting process ignored: predator is not hunting");
        }
        self
    }

    /// Produce the immutable strategy.
    pub fn build(self) -> PredatorFeeding {
        PredatorFeeding {
            is_hunting: self.is_hunting,
            hunting_process: self.hunting_process,
        }
    }
}
