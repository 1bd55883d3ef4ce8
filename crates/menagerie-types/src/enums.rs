//! Enumeration types for the Menagerie taxonomy.
//!
//! The feeding category keys are fixed at compile time. Their serde names and
//! their [`FromStr`] spellings are the same lowercase keys accepted by the
//! feeding factory.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

// ---------------------------------------------------------------------------
// Feeding categories
// ---------------------------------------------------------------------------

/// The closed set of keys a feeding strategy can be selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedingCategory {
    /// A predator that actively hunts; keeps its hunting description.
    Hunting,
    /// A predator that scavenges; never carries a hunting description.
    Scavenger,
    /// A wild plant eater.
    Herbivores,
    /// Farm animals fed by their keepers.
    Livestock,
    /// Household pets.
    Pet,
}

impl FeedingCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Hunting,
        Self::Scavenger,
        Self::Herbivores,
        Self::Livestock,
        Self::Pet,
    ];

    /// The text key this category is selected by.
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Hunting => "hunting",
            Self::Scavenger => "scavenger",
            Self::Herbivores => "herbivores",
            Self::Livestock => "livestock",
            Self::Pet => "pet",
        }
    }

    /// Whether this category is served by the predator feeding strategy.
    pub const fn is_predatory(self) -> bool {
        matches!(self, Self::Hunting | Self::Scavenger)
    }
}

impl fmt::Display for FeedingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for FeedingCategory {
    type Err = TypeError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_key() == key)
            .ok_or_else(|| TypeError::UnknownFeedingCategory(key.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Animal kinds and lineages
// ---------------------------------------------------------------------------

/// The concrete category of a leaf animal.
///
/// Husbandry and pet animals are domesticated; predators and herbivores are
/// wild. The two axes carry different descriptive flags, see [`Lineage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalKind {
    /// Farm animal kept for husbandry.
    Husbandry,
    /// Companion animal.
    Pet,
    /// Wild meat eater.
    Predator,
    /// Wild plant eater.
    Herbivore,
}

impl AnimalKind {
    /// Human-readable label used in rendered descriptions.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Husbandry => "husbandry",
            Self::Pet => "pet",
            Self::Predator => "predator",
            Self::Herbivore => "herbivore",
        }
    }

    /// Whether the kind belongs to the domesticated axis.
    pub const fn is_domesticated(self) -> bool {
        matches!(self, Self::Husbandry | Self::Pet)
    }

    /// Attach the axis-specific flag to this kind.
    ///
    /// For domesticated kinds the flag means "vaccinated"; for wild kinds it
    /// means "lives in a pack".
    pub const fn lineage(self, flag: bool) -> Lineage {
        if self.is_domesticated() {
            Lineage::Domesticated { vaccinated: flag }
        } else {
            Lineage::Wild { pack_animal: flag }
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The categorization axis of a leaf, with its descriptive flag.
///
/// No behavior branches on the flag. It is kept for descriptive completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "axis")]
pub enum Lineage {
    /// Kept by people.
    Domesticated {
        /// Whether the animal has been vaccinated.
        vaccinated: bool,
    },
    /// Lives in the wild.
    Wild {
        /// Whether the animal lives in a pack.
        pack_animal: bool,
    },
}

impl Lineage {
    /// The vaccination flag, present only on the domesticated axis.
    pub const fn is_vaccinated(self) -> Option<bool> {
        match self {
            Self::Domesticated { vaccinated } => Some(vaccinated),
            Self::Wild { .. } => None,
        }
    }

    /// The pack flag, present only on the wild axis.
    pub const fn is_pack_animal(self) -> Option<bool> {
        match self {
            Self::Wild { pack_animal } => Some(pack_animal),
            Self::Domesticated { .. } => None,
        }
    }
}

impl fmt::Display for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domesticated { vaccinated } => write!(f, "domesticated, vaccinated={vaccinated}"),
            Self::Wild { pack_animal } => write!(f, "wild, packAnimal={pack_animal}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Behaviors
// ---------------------------------------------------------------------------

/// One of the operations fanned out across the animal tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// Locomotion.
    Move,
    /// Vocalization and body language.
    Communicate,
    /// Feeding.
    Eat,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Move => "move",
            Self::Communicate => "communicate",
            Self::Eat => "eat",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feeding_category_keys_round_trip_through_from_str() {
        for category in FeedingCategory::ALL {
            assert_eq!(category.as_key().parse::<FeedingCategory>(), Ok(category));
        }
    }

    #[test]
    fn unknown_feeding_key_is_rejected() {
        let result = "omnivore".parse::<FeedingCategory>();
        assert_eq!(
            result,
            Err(TypeError::UnknownFeedingCategory(String::from("omnivore")))
        );
    }

    #[test]
    fn feeding_keys_are_case_sensitive() {
        assert!("Hunting".parse::<FeedingCategory>().is_err());
    }

    #[test]
    fn serde_names_match_factory_keys() {
        let json = serde_json::to_string(&FeedingCategory::Herbivores).unwrap_or_default();
        assert_eq!(json, "\"herbivores\"");
    }

    #[test]
    fn only_hunting_and_scavenger_are_predatory() {
        let predatory: Vec<_> = FeedingCategory::ALL
            .into_iter()
            .filter(|c| c.is_predatory())
            .collect();
        assert_eq!(predatory, vec![FeedingCategory::Hunting, FeedingCategory::Scavenger]);
    }

    #[test]
    fn lineage_follows_kind_axis() {
        assert_eq!(
            AnimalKind::Pet.lineage(true),
            Lineage::Domesticated { vaccinated: true }
        );
        assert_eq!(
            AnimalKind::Predator.lineage(true),
            Lineage::Wild { pack_animal: true }
        );
        assert_eq!(AnimalKind::Husbandry.lineage(false).is_vaccinated(), Some(false));
        assert_eq!(AnimalKind::Herbivore.lineage(false).is_vaccinated(), None);
        assert_eq!(AnimalKind::Herbivore.lineage(false).is_pack_animal(), Some(false));
    }
}
