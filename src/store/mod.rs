//! Entry store over a key-addressed blob store.
//!
//! The [`EntryStore`] owns the in-memory collection and is the only writer
//! to it. Every mutation replaces the collection, recomputes the recent view
//! and rewrites the whole collection under a single key.
//!
//! # Module Structure
//!
//! - `file`: blob store backed by one JSON file per key
//! - `memory`: in-process blob store for tests and tooling

pub mod file;
pub mod memory;

use crate::constants::{ENTRIES_KEY, RECENT_ENTRIES_LIMIT};
use crate::errors::StoreError;
use crate::journal_core::query::most_recent;
use crate::journal_core::{EntryId, JournalEntry};
use tracing::{debug, info, warn};

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

/// Read/write contract of the persistence medium.
///
/// A missing key is a valid, empty state and reads as `Ok(None)`.
pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError>;
}

/// The journal's collection and its recent view.
///
/// # Examples
///
/// ```
/// use moodlog::store::{EntryStore, MemoryBlobStore};
///
/// let mut store = EntryStore::new(MemoryBlobStore::new());
/// assert!(store.load().is_empty());
/// assert!(store.recent().is_empty());
/// ```
#[derive(Debug)]
pub struct EntryStore<B: BlobStore> {
    blobs: B,
    key: String,
    entries: Vec<JournalEntry>,
    recent: Vec<JournalEntry>,
}

impl<B: BlobStore> EntryStore<B> {
    pub fn new(blobs: B) -> Self {
        Self::with_key(blobs, ENTRIES_KEY)
    }

    pub fn with_key(blobs: B, key: &str) -> Self {
        EntryStore {
            blobs,
            key: key.to_string(),
            entries: Vec::new(),
            recent: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The most recently dated entries, newest first.
    pub fn recent(&self) -> &[JournalEntry] {
        &self.recent
    }

    pub fn get(&self, id: &EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    pub fn blobs_mut(&mut self) -> &mut B {
        &mut self.blobs
    }

    /// Reads the persisted collection.
    ///
    /// A missing key loads an empty collection. An unreadable or malformed
    /// blob is logged and also loads as empty; it is never returned as an
    /// error.
    pub fn load(&mut self) -> &[JournalEntry] {
        let entries = match self.read_collection() {
            Ok(Some(entries)) => {
                info!("Loaded {} entries from '{}'", entries.len(), self.key);
                entries
            }
            Ok(None) => {
                debug!("No persisted collection under '{}'", self.key);
                Vec::new()
            }
            Err(e) => {
                warn!("Treating store as empty: {}", e);
                Vec::new()
            }
        };
        self.replace(entries);
        &self.entries
    }

    fn read_collection(&self) -> Result<Option<Vec<JournalEntry>>, StoreError> {
        let Some(blob) = self.blobs.read(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&blob)
            .map(Some)
            .map_err(|e| StoreError::LoadFailure {
                key: self.key.clone(),
                message: e.to_string(),
            })
    }

    /// Replaces the collection and writes it back in full.
    ///
    /// The in-memory collection is replaced before the write, so a failed
    /// write leaves memory ahead of the persisted state until the next
    /// successful write.
    pub fn persist(&mut self, entries: Vec<JournalEntry>) -> Result<(), StoreError> {
        self.replace(entries);
        self.write_collection()
    }

    fn write_collection(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.entries)?;
        self.blobs.write(&self.key, &blob)?;
        debug!("Persisted {} entries under '{}'", self.entries.len(), self.key);
        Ok(())
    }

    fn replace(&mut self, entries: Vec<JournalEntry>) {
        self.entries = entries;
        self.recent = most_recent(&self.entries, RECENT_ENTRIES_LIMIT);
    }

    /// Removes the entry with `id` and persists.
    ///
    /// Deleting an id that is not present still persists the unchanged
    /// collection.
    pub fn delete(&mut self, id: &EntryId) -> Result<&[JournalEntry], StoreError> {
        let before = self.entries.len();
        let remaining: Vec<JournalEntry> = self
            .entries
            .iter()
            .filter(|e| &e.id != id)
            .cloned()
            .collect();
        if remaining.len() == before {
            debug!("Delete target {} not in collection", id);
        }
        self.persist(remaining)?;
        Ok(&self.entries)
    }

    /// Replaces the entry sharing `entry.id` and persists.
    ///
    /// When no entry shares the id the collection is left as it is, and
    /// still persisted.
    pub fn update(&mut self, entry: JournalEntry) -> Result<&[JournalEntry], StoreError> {
        let mut found = false;
        let updated: Vec<JournalEntry> = self
            .entries
            .iter()
            .map(|existing| {
                if existing.id == entry.id {
                    found = true;
                    entry.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        if !found {
            warn!("Update target {} missing from collection", entry.id);
        }
        self.persist(updated)?;
        Ok(&self.entries)
    }
}
