//! Integration tests for behavior traversal and reporting across whole trees.
//!
//! Trees are built the way a caller would: feeding strategies come from the
//! factory by category key, leaves are grouped into composites, and the root
//! is driven through the shared component interface.

#![allow(clippy::unwrap_used)]

use menagerie_feeding::FeedingFactory;
use menagerie_hierarchy::{Animal, AnimalComponent, AnimalComposite, Node, Transcript};
use menagerie_types::Behavior;

fn sample_herd() -> AnimalComposite {
    AnimalComposite::with_children(
        "farm and wild",
        [
            Animal::husbandry(
                "Cow",
                true,
                FeedingFactory::create("herbivores", "Cows usually eat grass, hay, and grain")
                    .unwrap(),
                "They move on all four legs",
                "Communicate with each other using various sounds such as mooing.",
            ),
            Animal::pet(
                "Cat",
                true,
                FeedingFactory::create(
                    "pet",
                    "Cats are obligate carnivores and require meat-based diets.",
                )
                .unwrap(),
                "They move on all four legs and can jump high",
                "Cats communicate with meows, purrs, and body language.",
            ),
            Animal::predator(
                "Lion",
                true,
                FeedingFactory::create(
                    "hunting",
                    "Lions are apex predators and require meat-based diets.",
                )
                .unwrap(),
                "They move on all four legs and can run up to 50 mph",
                "Lions communicate with roars and body language.",
            ),
            Animal::herbivore(
                "Rabbit",
                false,
                FeedingFactory::create("herbivores", "Rabbits usually eat grass, hay, and vegetables")
                    .unwrap(),
                "They move by hopping",
                "Rabbits communicate through sounds and gestures.",
            ),
        ],
    )
}

fn leaf(name: &str) -> Animal {
    Animal::herbivore(
        name,
        true,
        FeedingFactory::create("herbivores", &format!("{name} eats")).unwrap(),
        format!("{name} moves"),
        format!("{name} speaks"),
    )
}

/// root -> [A, mid -> [B, deep -> [C, D]], E]
fn three_levels() -> Node {
    let deep = AnimalComposite::with_children("deep", [leaf("C"), leaf("D")]);
    let mut mid = AnimalComposite::new("mid");
    mid.add(leaf("B"));
    mid.add(deep);

    let mut root = AnimalComposite::new("root");
    root.add(leaf("A"));
    root.add(mid);
    root.add(leaf("E"));
    Node::from(root)
}

#[test]
fn sample_scenario_renders_four_descriptions_in_order() {
    let herd = sample_herd();
    let info = herd.all_info();

    assert_eq!(info.len(), 4);
    let expected = [
        ("Cow", "Cows usually eat grass, hay, and grain"),
        ("Cat", "Cats are obligate carnivores and require meat-based diets."),
        ("Lion", "Lions are apex predators and require meat-based diets."),
        ("Rabbit", "Rabbits usually eat grass, hay, and vegetables"),
    ];
    for (entry, (name, feeding)) in info.iter().zip(expected) {
        assert!(entry.contains(name), "{entry} should name {name}");
        assert!(entry.contains(feeding), "{entry} should contain its feeding");
    }
}

#[test]
fn move_reaches_leaves_three_levels_down() {
    let tree = three_levels();
    assert!(!tree.is_leaf());
    let mut transcript = Transcript::new();
    tree.move_about(&mut transcript);

    assert_eq!(
        transcript.texts(),
        vec!["A moves", "B moves", "C moves", "D moves", "E moves"]
    );
}

#[test]
fn communicate_reaches_leaves_three_levels_down() {
    let tree = three_levels();
    let mut transcript = Transcript::new();
    tree.communicate(&mut transcript);

    assert_eq!(transcript.animals(), vec!["A", "B", "C", "D", "E"]);
    assert!(
        transcript
            .utterances()
            .iter()
            .all(|u| u.behavior == Behavior::Communicate)
    );
}

#[test]
fn eat_reaches_leaves_three_levels_down() {
    let tree = three_levels();
    let mut transcript = Transcript::new();
    tree.eat(&mut transcript);

    assert_eq!(
        transcript.texts(),
        vec!["A eats", "B eats", "C eats", "D eats", "E eats"]
    );
}

#[test]
fn all_info_on_nested_tree_lists_only_immediate_children() {
    let Node::Group(root) = three_levels() else {
        return;
    };
    let info = root.all_info();

    assert_eq!(info.len(), 3);
    assert!(info.iter().all(|entry| !entry.contains("'C'") && !entry.contains("'D'")));
    assert!(info.iter().all(|entry| !entry.contains("'B'")));
    assert_eq!(root.leaf_count(), 5);
}

#[test]
fn scavenger_in_tree_eats_silently() {
    let mut group = AnimalComposite::new("carrion");
    group.add(Animal::predator(
        "Hyena",
        true,
        FeedingFactory::create("scavenger", "Picks at leftovers").unwrap(),
        "Lopes",
        "Laughs",
    ));
    let mut transcript = Transcript::new();
    group.eat(&mut transcript);

    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.texts(), vec![""]);
}

#[test]
fn snapshot_of_sample_serializes_every_leaf() {
    let herd = Node::from(sample_herd());
    let json = serde_json::to_value(herd.snapshot()).unwrap();

    let names: Vec<_> = json["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|child| child["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, vec!["Cow", "Cat", "Lion", "Rabbit"]);
}
