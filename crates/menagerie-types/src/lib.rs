//! Shared type definitions for the Menagerie animal taxonomy.
//!
//! Every closed set used across the workspace lives here so that the feeding
//! strategies and the animal hierarchy agree on the same vocabulary.
//!
//! # Modules
//!
//! - [`enums`] -- Feeding categories, animal kinds, lineages, and behaviors
//! - [`error`] -- Parse errors for the text keys of those enumerations

pub mod enums;
pub mod error;

pub use enums::{AnimalKind, Behavior, FeedingCategory, Lineage};
pub use error::TypeError;
