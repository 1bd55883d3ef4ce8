//! The capability shared by every node of the animal tree.

use menagerie_feeding::Feeding;
use menagerie_types::Behavior;

use crate::narration::Narrator;

/// Uniform behavior of leaves and groups.
///
/// `move_about` and `communicate` have no default: every implementor states
/// how it handles them. `eat` defaults to narrating the held feeding
/// strategy, which is exactly what a leaf needs; groups override it to fan
/// out instead.
pub trait AnimalComponent {
    /// Display name of the node.
    fn name(&self) -> &str;

    /// The feeding strategy held by this node, if it describes one animal.
    fn feeding(&self) -> Option<&dyn Feeding>;

    /// Narrate how the node moves.
    fn move_about(&self, narrator: &mut dyn Narrator);

    /// Narrate how the node communicates.
    fn communicate(&self, narrator: &mut dyn Narrator);

    /// Narrate how the node eats.
    fn eat(&self, narrator: &mut dyn Narrator) {
        if let Some(feeding) = self.feeding() {
            narrator.narrate(self.name(), Behavior::Eat, feeding.feed());
        }
    }

    /// Multi-line, human-readable rendering of the node.
    fn describe(&self) -> String;

    /// Dispatch one of the three behaviors by value.
    fn perform(&self, behavior: Behavior, narrator: &mut dyn Narrator) {
        match behavior {
            Behavior::Move => self.move_about(narrator),
            Behavior::Communicate => self.communicate(narrator),
            Behavior::Eat => self.eat(narrator),
        }
    }
}
