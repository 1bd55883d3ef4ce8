//! The leaf node of the animal tree.
//!
//! A single [`Animal`] struct covers all four concrete categories. The
//! [`AnimalKind`] tag names the category and the [`Lineage`] carries the
//! flag of its axis: vaccination for domesticated animals, pack life for
//! wild ones. Nothing validates that the kind and the feeding strategy make
//! sense together; a wild animal with pet feeding is accepted as is.

use core::fmt;

use menagerie_feeding::Feeding;
use menagerie_types::{AnimalKind, Behavior, Lineage};
use tracing::trace;

use crate::component::AnimalComponent;
use crate::narration::Narrator;

/// One concrete animal.
///
/// Immutable after construction.
#[derive(Debug)]
pub struct Animal {
    kind: AnimalKind,
    lineage: Lineage,
    name: String,
    move_method: String,
    communicate_method: String,
    feeding: Box<dyn Feeding>,
}

impl Animal {
    /// Create an animal of any kind.
    ///
    /// `flag` is interpreted along the axis of `kind`; see
    /// [`AnimalKind::lineage`].
    pub fn new(
        kind: AnimalKind,
        name: impl Into<String>,
        flag: bool,
        feeding: Box<dyn Feeding>,
        move_method: impl Into<String>,
        communicate_method: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            lineage: kind.lineage(flag),
            name: name.into(),
            move_method: move_method.into(),
            communicate_method: communicate_method.into(),
            feeding,
        }
    }

    /// A domesticated farm animal.
    pub fn husbandry(
        name: impl Into<String>,
        is_vaccinated: bool,
        feeding: Box<dyn Feeding>,
        move_method: impl Into<String>,
        communicate_method: impl Into<String>,
    ) -> Self {
        Self::new(
            AnimalKind::Husbandry,
            name,
            is_vaccinated,
            feeding,
            move_method,
            communicate_method,
        )
    }

    /// A domesticated companion animal.
    pub fn pet(
        name: impl Into<String>,
        is_vaccinated: bool,
        feeding: Box<dyn Feeding>,
        move_method: impl Into<String>,
        communicate_method: impl Into<String>,
    ) -> Self {
        Self::new(
            AnimalKind::Pet,
            name,
            is_vaccinated,
            feeding,
            move_method,
            communicate_method,
        )
    }

    /// A wild meat eater.
    pub fn predator(
        name: impl Into<String>,
        is_pack_animal: bool,
        feeding: Box<dyn Feeding>,
        move_method: impl Into<String>,
        communicate_method: impl Into<String>,
    ) -> Self {
        Self::new(
            AnimalKind::Predator,
            name,
            is_pack_animal,
            feeding,
            move_method,
            communicate_method,
        )
    }

    /// A wild plant eater.
    pub fn herbivore(
        name: impl Into<String>,
        is_pack_animal: bool,
        feeding: Box<dyn Feeding>,
        move_method: impl Into<String>,
        communicate_method: impl Into<String>,
    ) -> Self {
        Self::new(
            AnimalKind::Herbivore,
            name,
            is_pack_animal,
            feeding,
            move_method,
            communicate_method,
        )
    }

    /// The concrete category.
    pub const fn kind(&self) -> AnimalKind {
        self.kind
    }

    /// The categorization axis and its flag.
    pub const fn lineage(&self) -> Lineage {
        self.lineage
    }

    /// Vaccination flag; `None` for wild animals.
    pub const fn is_vaccinated(&self) -> Option<bool> {
        self.lineage.is_vaccinated()
    }

    /// Pack flag; `None` for domesticated animals.
    pub const fn is_pack_animal(&self) -> Option<bool> {
        self.lineage.is_pack_animal()
    }

    /// How the animal moves.
    pub fn move_method(&self) -> &str {
        &self.move_method
    }

    /// How the animal communicates.
    pub fn communicate_method(&self) -> &str {
        &self.communicate_method
    }

    /// The feeding strategy.
    pub fn feeding_strategy(&self) -> &dyn Feeding {
        self.feeding.as_ref()
    }
}

impl AnimalComponent for Animal {
    fn name(&self) -> &str {
        &self.name
    }

    fn feeding(&self) -> Option<&dyn Feeding> {
        Some(self.feeding.as_ref())
    }

    fn move_about(&self, narrator: &mut dyn Narrator) {
        trace!(animal = %self.name, "move");
        narrator.narrate(&self.name, Behavior::Move, &self.move_method);
    }

    fn communicate(&self, narrator: &mut dyn Narrator) {
        trace!(animal = %self.name, "communicate");
        narrator.narrate(&self.name, Behavior::Communicate, &self.communicate_method);
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Animal {{")?;
        writeln!(f, "\tname='{}'", self.name)?;
        writeln!(f, "\tkind={} ({})", self.kind, self.lineage)?;
        writeln!(f, "\tmoveMethod='{}'", self.move_method)?;
        writeln!(f, "\tcommunicateMethod='{}'", self.communicate_method)?;
        writeln!(f, "\tfeeding={}", self.feeding.feed())?;
        write!(f, "}}")
    }
}
