//! Serializable, full-depth view of an animal tree.
//!
//! Unlike [`AnimalComposite::all_info`](crate::AnimalComposite::all_info), a
//! snapshot descends into every nested group. It is a display aid for the
//! `json` report, not a persistence format; nothing deserializes it back.

use menagerie_types::{AnimalKind, FeedingCategory, Lineage};
use serde::Serialize;

use crate::animal::Animal;
use crate::component::AnimalComponent;

/// Snapshot of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum NodeSnapshot {
    /// A single animal.
    Leaf(AnimalSnapshot),
    /// A group and all of its descendants.
    Group {
        /// Label of the group.
        name: String,
        /// Children, in insertion order.
        children: Vec<NodeSnapshot>,
    },
}

/// Snapshot of one animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalSnapshot {
    /// Display name.
    pub name: String,
    /// Concrete category.
    pub kind: AnimalKind,
    /// Axis and its flag.
    pub lineage: Lineage,
    /// How the animal moves.
    pub move_method: String,
    /// How the animal communicates.
    pub communicate_method: String,
    /// Category of the feeding strategy.
    pub feeding_category: FeedingCategory,
    /// Text returned by the feeding strategy.
    pub feeding: String,
}

impl From<&Animal> for AnimalSnapshot {
    fn from(animal: &Animal) -> Self {
        let feeding = animal.feeding_strategy();
        Self {
            name: animal.name().to_owned(),
            kind: animal.kind(),
            lineage: animal.lineage(),
            move_method: animal.move_method().to_owned(),
            communicate_method: animal.communicate_method().to_owned(),
            feeding_category: feeding.category(),
            feeding: feeding.feed().to_owned(),
        }
    }
}
