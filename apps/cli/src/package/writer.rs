//! Deck export to `.apkg` files.

use chrono::{DateTime, Utc};
use flashcard_core::Deck;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::collection::{Collection, CollectionHeader, NewNote};
use super::error::{PackageError, Result};
use super::model::{collection_conf, deck_options, decks_json, models_json, DeckEntry, NoteModel};
use super::schema::{COLLECTION_FILE, MEDIA_FILE};

/// Writes decks as Anki packages into one output directory.
pub struct Exporter {
    output_dir: PathBuf,
    model: NoteModel,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>, model: NoteModel) -> Self {
        Self {
            output_dir: output_dir.into(),
            model,
        }
    }

    /// Path the package for `deck` is written to.
    ///
    /// The file name must be a single plain path component, so the package
    /// always lands directly inside the output directory.
    pub fn package_path(&self, deck: &Deck) -> Result<PathBuf> {
        let stem = deck.file_name();
        let file_name = format!("{}.apkg", stem);
        if stem.trim().is_empty() || !is_plain_file_name(&file_name) {
            return Err(PackageError::InvalidFileName(deck.name.clone()));
        }
        Ok(self.output_dir.join(file_name))
    }

    /// Write the deck, creating the output directory if needed.
    pub fn export(&self, deck: &Deck) -> Result<PathBuf> {
        let output_path = self.package_path(deck)?;
        fs::create_dir_all(&self.output_dir)?;

        let staging = tempfile::tempdir()?;
        let collection_path = staging.path().join(COLLECTION_FILE);

        let collection = Collection::create(&collection_path)?;
        populate(&collection, deck, &self.model, Utc::now())?;
        collection.close()?;

        zip_package(&collection_path, &output_path)?;
        tracing::info!(
            path = %output_path.display(),
            sub_decks = deck.sub_decks.len(),
            cards = deck.card_count(),
            "package written"
        );
        Ok(output_path)
    }
}

/// Fill a fresh collection with the deck, its sub-decks and one note per card.
pub fn populate(
    collection: &Collection,
    deck: &Deck,
    model: &NoteModel,
    now: DateTime<Utc>,
) -> Result<()> {
    let modified = now.timestamp();

    let mut model = model.clone();
    model.modified = modified;
    model.did = deck.id;

    let decks: Vec<DeckEntry> = std::iter::once(DeckEntry::new(deck.id, deck.name.as_str(), modified))
        .chain(
            deck.sub_decks
                .iter()
                .map(|sub| DeckEntry::new(sub.id, sub.qualified_name(deck), modified)),
        )
        .collect();

    collection.write_header(&CollectionHeader {
        created: now.timestamp() - now.timestamp().rem_euclid(86_400),
        modified_ms: now.timestamp_millis(),
        conf: collection_conf(model.id, deck.id).to_string(),
        models: models_json(std::slice::from_ref(&model))?,
        decks: decks_json(&decks, modified)?,
        dconf: deck_options().to_string(),
    })?;

    let mut due = 0;
    for sub in &deck.sub_decks {
        for card in &sub.cards {
            due += 1;
            collection.add_note(&NewNote {
                id: card.id,
                model_id: model.id,
                deck_id: sub.id,
                fields: vec![card.front.clone(), card.back.clone()],
                tags: card.tags.clone(),
                due,
                modified,
            })?;
        }
    }

    Ok(())
}

fn is_plain_file_name(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn zip_package(collection_path: &Path, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(COLLECTION_FILE, options)?;
    zip.write_all(&fs::read(collection_path)?)?;

    zip.start_file(MEDIA_FILE, options)?;
    zip.write_all(b"{}")?;

    zip.finish()?;
    Ok(())
}
