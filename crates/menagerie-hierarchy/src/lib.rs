//! Composite tree of animal components for the Menagerie taxonomy.
//!
//! Every node in the tree, whether a single [`Animal`] or an
//! [`AnimalComposite`] group, answers the same [`AnimalComponent`]
//! capability set: move, communicate, eat, describe. Groups fan each
//! behavior out to their children recursively, depth-first, in insertion
//! order. Reporting with [`AnimalComposite::all_info`] is deliberately
//! shallow and lists only the immediate children.
//!
//! Behaviors do not print. They speak into a [`Narrator`], which lets the
//! binary write to the terminal while tests record a [`Transcript`].
//!
//! # Modules
//!
//! - [`animal`] -- The leaf node ([`Animal`]) and its four kinds
//! - [`component`] -- The shared capability trait ([`AnimalComponent`])
//! - [`composite`] -- Groups of nodes ([`AnimalComposite`])
//! - [`narration`] -- Behavior sinks ([`Narrator`], [`Transcript`])
//! - [`node`] -- The tree node union ([`Node`])
//! - [`snapshot`] -- Serializable full-depth view of a tree ([`NodeSnapshot`])

pub mod animal;
pub mod component;
pub mod composite;
pub mod narration;
pub mod node;
pub mod snapshot;

pub use animal::Animal;
pub use component::AnimalComponent;
pub use composite::AnimalComposite;
pub use narration::{Narrator, Transcript, Utterance};
pub use node::Node;
pub use snapshot::{AnimalSnapshot, NodeSnapshot};
