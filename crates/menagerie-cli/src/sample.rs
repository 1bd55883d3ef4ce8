//! The sample roster printed by the binary.

use menagerie_feeding::FeedingFactory;
use menagerie_hierarchy::{Animal, AnimalComposite};
use menagerie_types::AnimalKind;

use crate::error::CliError;

/// One row of the roster: how to build a single leaf.
struct RosterEntry {
    kind: AnimalKind,
    name: &'static str,
    flag: bool,
    feeding_key: &'static str,
    feeding: &'static str,
    move_method: &'static str,
    communicate_method: &'static str,
}

const ROSTER: [RosterEntry; 4] = [
    RosterEntry {
        kind: AnimalKind::Husbandry,
        name: "Cow",
        flag: true,
        feeding_key: "herbivores",
        feeding: "Cows usually eat grass, hay, and grain",
        move_method: "They move on all four legs",
        communicate_method: "Communicate with each other using various sounds such as mooing.",
    },
    RosterEntry {
        kind: AnimalKind::Pet,
        name: "Cat",
        flag: true,
        feeding_key: "pet",
        feeding: "Cats are obligate carnivores and require meat-based diets.",
        move_method: "They move on all four legs and can jump high",
        communicate_method: "Cats communicate with meows, purrs, and body language.",
    },
    RosterEntry {
        kind: AnimalKind::Predator,
        name: "Lion",
        flag: true,
        feeding_key: "hunting",
        feeding: "Lions are apex predators and require meat-based diets.",
        move_method: "They move on all four legs and can run up to 50 mph",
        communicate_method: "Lions communicate with roars and body language.",
    },
    RosterEntry {
        kind: AnimalKind::Herbivore,
        name: "Rabbit",
        flag: false,
        feeding_key: "herbivores",
        feeding: "Rabbits usually eat grass, hay, and vegetables",
        move_method: "They move by hopping",
        communicate_method: "Rabbits communicate through sounds and gestures.",
    },
];

/// Build the sample group: Cow, Cat, Lion, Rabbit, in that order.
///
/// # Errors
///
/// Returns [`CliError::Feeding`] if a roster row names an unknown feeding
/// category.
pub fn build_sample(group_name: &str) -> Result<AnimalComposite, CliError> {
    let mut group = AnimalComposite::new(group_name);
    for entry in &ROSTER {
        let feeding = FeedingFactory::create(entry.feeding_key, entry.feeding)?;
        group.add(Animal::new(
            entry.kind,
            entry.name,
            entry.flag,
            feeding,
            entry.move_method,
            entry.communicate_method,
        ));
    }
    Ok(group)
}
