//! Sinks that receive the text produced by behaviors.

use menagerie_types::Behavior;
use serde::Serialize;

/// Receives one line of text per leaf behavior.
pub trait Narrator {
    /// Record that `animal` performed `behavior`, described by `text`.
    fn narrate(&mut self, animal: &str, behavior: Behavior, text: &str);
}

/// A single recorded behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Utterance {
    /// Name of the leaf that performed the behavior.
    pub animal: String,
    /// Which behavior was performed.
    pub behavior: Behavior,
    /// The text the leaf produced.
    pub text: String,
}

/// A [`Narrator`] that keeps every utterance in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    utterances: Vec<Utterance>,
}

impl Transcript {
    /// Create an empty transcript.
    pub const fn new() -> Self {
        Self {
            utterances: Vec::new(),
        }
    }

    /// All utterances, in the order they were narrated.
    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    /// Names of the animals that spoke, in order.
    pub fn animals(&self) -> Vec<&str> {
        self.utterances.iter().map(|u| u.animal.as_str()).collect()
    }

    /// Texts that were narrated, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.utterances.iter().map(|u| u.text.as_str()).collect()
    }

    /// Number of recorded utterances.
    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    /// Whether nothing has been narrated yet.
    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }
}

impl Narrator for Transcript {
    fn narrate(&mut self, animal: &str, behavior: Behavior, text: &str) {
        self.utterances.push(Utterance {
            animal: animal.to_owned(),
            behavior,
            text: text.to_owned(),
        });
    }
}
