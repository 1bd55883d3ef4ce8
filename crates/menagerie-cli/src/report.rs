//! Rendering the configured report to an output stream.

use std::io::{self, Write};

use menagerie_hierarchy::{AnimalComponent, AnimalComposite, Narrator, Node};
use menagerie_types::Behavior;
use tracing::debug;

use crate::config::ReportMode;
use crate::error::CliError;

/// A [`Narrator`] that writes one line per utterance.
///
/// Narration itself cannot fail, so the first write error is held until
/// [`finish`](Self::finish) and later lines are skipped.
pub struct ConsoleNarrator<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleNarrator<W> {
    /// Wrap an output stream.
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Return the first write error, if any.
    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn narrate(&mut self, animal: &str, behavior: Behavior, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "[{animal}] {behavior}: {text}") {
            self.error = Some(e);
        }
    }
}

/// Write the report selected by `mode` for `group` to `out`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails, or [`CliError::Serde`] if the
/// JSON snapshot cannot be rendered.
pub fn write_report<W: Write>(
    mode: ReportMode,
    group: AnimalComposite,
    out: &mut W,
) -> Result<(), CliError> {
    if mode == ReportMode::Json {
        let snapshot = Node::from(group).snapshot();
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        writeln!(out)?;
        return Ok(());
    }

    if mode.includes_info() {
        debug!(children = group.len(), "writing shallow listing");
        for entry in group.all_info() {
            writeln!(out, "{entry}")?;
        }
    }

    if mode.includes_traversal() {
        debug!(leaves = group.leaf_count(), "writing behavior narration");
        let mut narrator = ConsoleNarrator::new(&mut *out);
        for behavior in [Behavior::Move, Behavior::Communicate, Behavior::Eat] {
            group.perform(behavior, &mut narrator);
        }
        narrator.finish()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::build_sample;

    fn render(mode: ReportMode) -> String {
        let mut out = Vec::new();
        let written = build_sample("zoo").and_then(|group| write_report(mode, group, &mut out));
        assert!(written.is_ok());
        String::from_utf8(out).unwrap_or_default()
    }

    #[test]
    fn info_lists_each_animal_once() {
        let text = render(ReportMode::Info);
        assert_eq!(text.matches("Animal {").count(), 4);
        assert!(text.contains("Lions are apex predators"));
        assert!(!text.contains("] move:"));
    }

    #[test]
    fn traverse_narrates_every_behavior_for_every_leaf() {
        let text = render(ReportMode::Traverse);
        assert_eq!(text.lines().count(), 12);
        assert!(text.starts_with("[Cow] move: They move on all four legs"));
        assert!(text.contains("[Rabbit] eat: Rabbits usually eat grass, hay, and vegetables"));
    }

    #[test]
    fn all_prints_listing_before_narration() {
        let text = render(ReportMode::All);
        let listing = text.find("Animal {");
        let narration = text.find("[Cow] move:");
        assert!(listing.is_some() && narration.is_some());
        assert!(listing < narration);
    }

    #[test]
    fn json_renders_full_snapshot() {
        let text = render(ReportMode::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap_or_default();
        assert_eq!(value["node"], "group");
        assert_eq!(value["name"], "zoo");
        assert_eq!(value["children"].as_array().map(Vec::len), Some(4));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn narrator_surfaces_first_write_error() {
        let mut narrator = ConsoleNarrator::new(FailingWriter);
        narrator.narrate("Cow", Behavior::Move, "walks");
        narrator.narrate("Cow", Behavior::Eat, "grazes");
        assert!(narrator.finish().is_err());
    }
}
