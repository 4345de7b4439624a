//! Common test utilities for integration tests.
//!
//! Provides outline fixtures and helpers to open a written `.apkg` and read
//! back what the collection holds.

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;
use zip::ZipArchive;

/// Generate an outline with one deck, `sub_decks` sub-decks and `cards` cards each.
pub fn sample_outline(name: &str, sub_decks: usize, cards: usize) -> String {
    let mut md = format!("# {}\n\n", name);
    for s in 0..sub_decks {
        md.push_str(&format!("## Topic {}\n\n", s + 1));
        for c in 0..cards {
            md.push_str(&format!(
                "### Question {}.{}?\n\n- Answer {}\n  - detail a\n  - detail b\n\n",
                s + 1,
                c + 1,
                c + 1
            ));
        }
    }
    md
}

/// Write markdown into a fresh temp dir; returns the dir and the file path.
pub fn write_outline(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("outline.md");
    fs::write(&path, content).expect("write outline");
    (dir, path)
}

/// Contents of a package, read back from its collection.
pub struct PackageContents {
    pub entries: Vec<String>,
    pub media: String,
    /// Deck names from the `decks` column, sorted.
    pub deck_names: Vec<String>,
    /// (deck name, front, back) per card, sorted.
    pub cards: Vec<(String, String, String)>,
    pub note_ids: Vec<i64>,
    pub model_names: Vec<String>,
}

/// Open a package and read its collection.
pub fn read_package(path: &Path) -> PackageContents {
    let mut archive = ZipArchive::new(File::open(path).expect("open package")).expect("read zip");
    let entries: Vec<String> = archive.file_names().map(str::to_string).collect();

    let mut media = String::new();
    archive
        .by_name("media")
        .expect("media entry")
        .read_to_string(&mut media)
        .expect("read media");

    let mut collection = Vec::new();
    archive
        .by_name("collection.anki2")
        .expect("collection entry")
        .read_to_end(&mut collection)
        .expect("read collection");

    let scratch = tempfile::tempdir().expect("create temp dir");
    let db_path = scratch.path().join("collection.anki2");
    fs::write(&db_path, collection).expect("write collection");
    let conn = Connection::open(&db_path).expect("open collection");

    let (decks, models): (String, String) = conn
        .query_row("SELECT decks, models FROM col", [], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("col row");
    let decks: serde_json::Value = serde_json::from_str(&decks).expect("decks json");
    let models: serde_json::Value = serde_json::from_str(&models).expect("models json");

    let deck_name = |id: i64| -> String {
        decks[id.to_string()]["name"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    };

    let mut deck_names: Vec<String> = decks
        .as_object()
        .expect("decks object")
        .values()
        .filter_map(|d| d["name"].as_str().map(str::to_string))
        .collect();
    deck_names.sort();

    let mut model_names: Vec<String> = models
        .as_object()
        .expect("models object")
        .values()
        .filter_map(|m| m["name"].as_str().map(str::to_string))
        .collect();
    model_names.sort();

    let mut stmt = conn
        .prepare("SELECT n.id, n.flds, c.did FROM notes n JOIN cards c ON c.nid = n.id")
        .expect("prepare");
    let rows: Vec<(i64, String, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("rows");

    let mut note_ids = Vec::new();
    let mut cards = Vec::new();
    for (id, flds, did) in rows {
        note_ids.push(id);
        let mut fields = flds.split('\x1f');
        let front = fields.next().unwrap_or_default().to_string();
        let back = fields.next().unwrap_or_default().to_string();
        cards.push((deck_name(did), front, back));
    }
    cards.sort();
    note_ids.sort();

    PackageContents {
        entries,
        media,
        deck_names,
        cards,
        note_ids,
        model_names,
    }
}
