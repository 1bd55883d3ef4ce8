//! The node union of the animal tree.

use core::fmt;

use menagerie_feeding::Feeding;

use crate::animal::Animal;
use crate::component::AnimalComponent;
use crate::composite::AnimalComposite;
use crate::narration::Narrator;
use crate::snapshot::{AnimalSnapshot, NodeSnapshot};

/// A node of the animal tree: a single animal or a group.
#[derive(Debug)]
pub enum Node {
    /// A terminal node describing one animal.
    Leaf(Animal),
    /// A group of further nodes.
    Group(AnimalComposite),
}

impl Node {
    /// Whether this node is a leaf.
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Number of leaves in this subtree, counting this node if it is one.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Group(group) => group.leaf_count(),
        }
    }

    /// Full-depth serializable view of this subtree.
    pub fn snapshot(&self) -> NodeSnapshot {
        match self {
            Self::Leaf(animal) => NodeSnapshot::Leaf(AnimalSnapshot::from(animal)),
            Self::Group(group) => NodeSnapshot::Group {
                name: group.name().to_owned(),
                children: group.children().iter().map(Self::snapshot).collect(),
            },
        }
    }

    fn component(&self) -> &dyn AnimalComponent {
        match self {
            Self::Leaf(animal) => animal,
            Self::Group(group) => group,
        }
    }
}

impl AnimalComponent for Node {
    fn name(&self) -> &str {
        self.component().name()
    }

    fn feeding(&self) -> Option<&dyn Feeding> {
        self.component().feeding()
    }

    fn move_about(&self, narrator: &mut dyn Narrator) {
        self.component().move_about(narrator);
    }

    fn communicate(&self, narrator: &mut dyn Narrator) {
        self.component().communicate(narrator);
    }

    fn eat(&self, narrator: &mut dyn Narrator) {
        self.component().eat(narrator);
    }

    fn describe(&self) -> String {
        self.component().describe()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(animal) => fmt::Display::fmt(animal, f),
            Self::Group(group) => fmt::Display::fmt(group, f),
        }
    }
}

impl From<Animal> for Node {
    fn from(animal: Animal) -> Self {
        Self::Leaf(animal)
    }
}

impl From<AnimalComposite> for Node {
    fn from(group: AnimalComposite) -> Self {
        Self::Group(group)
    }
}
