//! Groups of animal nodes.
//!
//! A group owns its children exclusively and only ever grows: there is no
//! removal, reordering, or reparenting. Behaviors descend the whole tree;
//! [`AnimalComposite::all_info`] stops at the first level.

use core::fmt;

use menagerie_feeding::Feeding;
use tracing::trace;

use crate::component::AnimalComponent;
use crate::narration::Narrator;
use crate::node::Node;

/// Label given to groups created without one.
pub const DEFAULT_GROUP_NAME: &str = "group";

/// An ordered, append-only group of nodes.
///
/// Duplicates are allowed and insertion order is preserved.
#[derive(Debug)]
pub struct AnimalComposite {
    name: String,
    children: Vec<Node>,
}

impl AnimalComposite {
    /// Create an empty group with the given label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a group holding `children`, in order.
    pub fn with_children<I, N>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        let mut group = Self::new(name);
        group.add_all(children);
        group
    }

    /// Append one child.
    pub fn add(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Append every child of `children`, in order.
    pub fn add_all<I, N>(&mut self, children: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
    }

    /// The immediate children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of immediate children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of leaves anywhere below this group.
    pub fn leaf_count(&self) -> usize {
        self.children.iter().map(Node::leaf_count).sum()
    }

    /// Describe each immediate child, in order.
    ///
    /// Nested groups are rendered by their own summary only; their members
    /// are not listed.
    pub fn all_info(&self) -> Vec<String> {
        self.children.iter().map(AnimalComponent::describe).collect()
    }
}

impl Default for AnimalComposite {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_NAME)
    }
}

impl AnimalComponent for AnimalComposite {
    fn name(&self) -> &str {
        &self.name
    }

    fn feeding(&self) -> Option<&dyn Feeding> {
        None
    }

    fn move_about(&self, narrator: &mut dyn Narrator) {
        trace!(group = %self.name, children = self.children.len(), "move");
        for child in &self.children {
            child.move_about(narrator);
        }
    }

    fn communicate(&self, narrator: &mut dyn Narrator) {
        trace!(group = %self.name, children = self.children.len(), "communicate");
        for child in &self.children {
            child.communicate(narrator);
        }
    }

    fn eat(&self, narrator: &mut dyn Narrator) {
        trace!(group = %self.name, children = self.children.len(), "eat");
        for child in &self.children {
            child.eat(narrator);
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnimalComposite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AnimalComposite {{")?;
        writeln!(f, "\tname='{}'", self.name)?;
        writeln!(f, "\tchildren={}", self.children.len())?;
        write!(f, "}}")
    }
}
