//! Category-keyed construction of feeding strategies.
//!
//! | Key | Strategy | Description |
//! |-----|----------|-------------|
//! | `hunting` | [`PredatorFeeding`], hunting | kept as the hunting process |
//! | `scavenger` | [`PredatorFeeding`], not hunting | discarded |
//! | `herbivores` | [`HerbivoreFeeding`] | kept verbatim |
//! | `livestock` | [`LivestockFeeding`] | kept verbatim |
//! | `pet` | [`PetFeeding`] | kept verbatim |
//!
//! Any other key is rejected with [`FeedingError::UnknownCategory`].

use menagerie_types::FeedingCategory;
use tracing::debug;

use crate::error::FeedingError;
use crate::predator::PredatorFeeding;
use crate::strategy::{Feeding, HerbivoreFeeding, LivestockFeeding, PetFeeding};

/// Selects and builds feeding strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedingFactory;

impl FeedingFactory {
    /// Build the strategy registered under `key`, carrying `description`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedingError::UnknownCategory`] if `key` is not one of the
    /// fixed category keys.
    pub fn create(key: &str, description: &str) -> Result<Box<dyn Feeding>, FeedingError> {
        let category: FeedingCategory = key.parse()?;
        Ok(Self::create_for(category, description))
    }

    /// Build the strategy for an already-parsed category. Total.
    pub fn create_for(category: FeedingCategory, description: &str) -> Box<dyn Feeding> {
        debug!(category = %category, "building feeding strategy");
        match category {
            FeedingCategory::Hunting => Box::new(
                PredatorFeeding::builder()
                    .hunting(true)
                    .hunting_process(description)
                    .build(),
            ),
            FeedingCategory::Scavenger => {
                if !description.is_empty() {
                    debug!("scavenger description discarded");
                }
                Box::new(PredatorFeeding::builder().hunting(false).build())
            }
            FeedingCategory::Herbivores => Box::new(HerbivoreFeeding::new(description)),
            FeedingCategory::Livestock => Box::new(LivestockFeeding::new(description)),
            FeedingCategory::Pet => Box::new(PetFeeding::new(description)),
        }
    }
}
