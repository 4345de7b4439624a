//! Collection database written into the package.

use rusqlite::{params, Connection};
use std::path::Path;

use super::error::Result;
use super::guid::{field_checksum, guid_for};
use super::schema::{FIELD_SEPARATOR, SCHEMA, SCHEMA_VERSION};

/// Values for the single `col` row.
#[derive(Debug, Clone)]
pub struct CollectionHeader {
    /// Creation time, seconds.
    pub created: i64,
    /// Modification time, milliseconds.
    pub modified_ms: i64,
    pub conf: String,
    pub models: String,
    pub decks: String,
    pub dconf: String,
}

/// A note and its single card, ready to insert.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub id: i64,
    pub model_id: i64,
    pub deck_id: i64,
    pub fields: Vec<String>,
    pub tags: Vec<String>,
    /// Position in the new-card queue.
    pub due: i64,
    /// Modification time, seconds.
    pub modified: i64,
}

impl NewNote {
    fn guid(&self) -> String {
        let fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        guid_for(&fields)
    }

    fn joined_fields(&self) -> String {
        self.fields.join(&FIELD_SEPARATOR.to_string())
    }

    fn sort_field(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    fn tags_column(&self) -> String {
        if self.tags.is_empty() {
            String::new()
        } else {
            format!(" {} ", self.tags.join(" "))
        }
    }
}

/// SQLite collection in the legacy `.anki2` layout.
pub struct Collection {
    conn: Connection,
}

impl Collection {
    /// Create a collection at path.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let collection = Self { conn };
        collection.initialize()?;
        Ok(collection)
    }

    /// Open in-memory collection (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let collection = Self { conn };
        collection.initialize()?;
        Ok(collection)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Insert the collection row.
    pub fn write_header(&self, header: &CollectionHeader) -> Result<()> {
        self.conn.execute(
            "INSERT INTO col (id, crt, mod, scm, ver, dty, usn, ls, conf, models, decks, dconf, tags)
             VALUES (1, ?1, ?2, ?3, ?4, 0, 0, 0, ?5, ?6, ?7, ?8, '{}')",
            params![
                header.created,
                header.modified_ms,
                header.modified_ms,
                SCHEMA_VERSION,
                header.conf,
                header.models,
                header.decks,
                header.dconf,
            ],
        )?;
        Ok(())
    }

    /// Insert a note and its card.
    pub fn add_note(&self, note: &NewNote) -> Result<()> {
        self.conn.execute(
            "INSERT INTO notes (id, guid, mid, mod, usn, tags, flds, sfld, csum, flags, data)
             VALUES (?1, ?2, ?3, ?4, -1, ?5, ?6, ?7, ?8, 0, '')",
            params![
                note.id,
                note.guid(),
                note.model_id,
                note.modified,
                note.tags_column(),
                note.joined_fields(),
                note.sort_field(),
                field_checksum(note.sort_field()),
            ],
        )?;

        self.conn.execute(
            "INSERT INTO cards (id, nid, did, ord, mod, usn, type, queue, due, ivl, factor, reps, lapses, left, odue, odid, flags, data)
             VALUES (?1, ?2, ?3, 0, ?4, -1, 0, 0, ?5, 0, 0, 0, 0, 0, 0, 0, 0, '')",
            params![note.id, note.id, note.deck_id, note.modified, note.due],
        )?;
        Ok(())
    }

    /// Number of notes written so far.
    pub fn note_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Flush and close the database file.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    #[cfg(test)]
    fn connection(&self) -> &Connection {
        &self.conn
    }
}
