//! Feeding strategies for the Menagerie animal taxonomy.
//!
//! Every animal answers "how do you eat" through an exclusively owned
//! [`Feeding`] strategy. Strategies are chosen once, at construction time,
//! by the [`FeedingFactory`] from a fixed category key, and never change
//! afterwards.
//!
//! # Modules
//!
//! - [`error`] -- Error types for strategy selection ([`FeedingError`])
//! - [`factory`] -- Category-keyed construction ([`FeedingFactory`])
//! - [`predator`] -- Predator feeding and its builder ([`PredatorFeedingBuilder`])
//! - [`strategy`] -- The [`Feeding`] trait and the plain description strategies
//!
//! # Usage
//!
//! ```
//! use menagerie_feeding::{Feeding, FeedingFactory};
//!
//! let lion = FeedingFactory::create("hunting", "Stalks zebra at dusk");
//! assert_eq!(lion.map(|f| f.feed().to_owned()).ok().as_deref(), Some("Stalks zebra at dusk"));
//!
//! let vulture = FeedingFactory::create("scavenger", "Circles over carcasses");
//! assert_eq!(vulture.map(|f| f.feed().is_empty()).ok(), Some(true));
//!
//! assert!(FeedingFactory::create("photosynthesis", "").is_err());
//! ```

pub mod error;
pub mod factory;
pub mod predator;
pub mod strategy;

pub use error::FeedingError;
pub use factory::FeedingFactory;
pub use predator::{PredatorFeeding, PredatorFeedingBuilder};
pub use strategy::{Feeding, HerbivoreFeeding, LivestockFeeding, PetFeeding};
