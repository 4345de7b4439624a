//! `read`: build a deck package from a markdown outline.

use anyhow::{Context, Result};
use flashcard_core::{build_deck_with, generate_identifier, BuildEvent, RandomIds};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::package::{Exporter, NoteModel};

/// Read the outline, build its deck and write the package. Returns the package path.
pub fn run(file_path: &Path, config: &BuildConfig) -> Result<PathBuf> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;

    let deck = build_deck_with(&content, &mut RandomIds::new(), &mut |event| {
        println!("{}", progress_line(event));
    })
    .with_context(|| format!("failed to build deck from {}", file_path.display()))?;

    let model = NoteModel::simple(generate_identifier(), config.model_name.as_str());
    let package_path = Exporter::new(&config.output_dir, model)
        .export(&deck)
        .with_context(|| format!("failed to write package for deck \"{}\"", deck.name))?;

    println!("Package: {}", package_path.display());
    Ok(package_path)
}

/// Human-readable progress line for a newly created entity.
pub fn progress_line(event: BuildEvent<'_>) -> String {
    match event {
        BuildEvent::Deck(name) => format!("Deck: {}", name),
        BuildEvent::SubDeck(name) => format!("Subdeck: {}", name),
        BuildEvent::Card(front) => format!("Card: {}", front),
    }
}
