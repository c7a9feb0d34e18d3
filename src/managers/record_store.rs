//! Record Store for Shelfmark.
//!
//! Each collection is kept under one fixed key as a JSON array. Every operation
//! is a full load-modify-save cycle against the underlying [`KeyValueStore`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::managers::kv_store::KeyValueStore;
use crate::types::bookmark::{ArchivedBookmark, Bookmark};
use crate::types::errors::BookmarkError;

/// The two persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Bookmarks,
    Archive,
}

impl Collection {
    /// Storage key holding this collection.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Bookmarks => "bookmarks",
            Collection::Archive => "archive",
        }
    }
}

/// A record type persisted in exactly one collection.
pub trait StoredRecord: Serialize + DeserializeOwned {
    const COLLECTION: Collection;
}

impl StoredRecord for Bookmark {
    const COLLECTION: Collection = Collection::Bookmarks;
}

impl StoredRecord for ArchivedBookmark {
    const COLLECTION: Collection = Collection::Archive;
}

/// Typed access to the bookmark and archive collections.
pub struct RecordStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Reads the full collection for `R`.
    ///
    /// An absent or empty value is an empty collection. Anything that does not
    /// parse as a list of records is `CorruptData`.
    pub fn load<R: StoredRecord>(&self) -> Result<Vec<R>, BookmarkError> {
        let key = R::COLLECTION.key();
        let raw = match self.kv.get(key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(Vec::new()),
        };
        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(collection = key, error = %e, "stored collection is not valid JSON");
            BookmarkError::CorruptData(format!("{}: {}", key, e))
        })
    }

    /// Replaces the whole collection for `R`.
    pub fn save<R: StoredRecord>(&mut self, records: &[R]) -> Result<(), BookmarkError> {
        let key = R::COLLECTION.key();
        let json = serde_json::to_string(records)
            .map_err(|e| BookmarkError::StorageError(format!("serialize {}: {}", key, e)))?;
        self.kv.set(key, &json)?;
        tracing::debug!(collection = key, count = records.len(), "saved collection");
        Ok(())
    }

    /// Adds `record` at the end of its collection.
    pub fn append<R: StoredRecord>(&mut self, record: R) -> Result<(), BookmarkError> {
        let mut records = self.load::<R>()?;
        records.push(record);
        self.save(&records)
    }

    /// Drops every record matching `predicate`. Returns how many were removed.
    pub fn remove_where<R, P>(&mut self, mut predicate: P) -> Result<usize, BookmarkError>
    where
        R: StoredRecord,
        P: FnMut(&R) -> bool,
    {
        let mut records = self.load::<R>()?;
        let before = records.len();
        records.retain(|r| !predicate(r));
        let removed = before - records.len();
        if removed > 0 {
            self.save(&records)?;
        }
        Ok(removed)
    }

    /// Moves the first `F` matching `predicate` to the end of the `T` collection,
    /// converting it with `convert`. Returns the moved record, or `None` when
    /// nothing matches.
    ///
    /// Both collections are loaded before anything is written, so a corrupt
    /// collection on either side leaves both untouched. The destination is
    /// saved first.
    pub fn move_first_where<F, T, P, C>(
        &mut self,
        predicate: P,
        convert: C,
    ) -> Result<Option<T>, BookmarkError>
    where
        F: StoredRecord,
        T: StoredRecord + Clone,
        P: FnMut(&F) -> bool,
        C: FnOnce(F) -> T,
    {
        let mut source = self.load::<F>()?;
        let mut target = self.load::<T>()?;
        let Some(index) = source.iter().position(predicate) else {
            return Ok(None);
        };

        let moved = convert(source.remove(index));
        target.push(moved.clone());
        self.save(&target)?;
        self.save(&source)?;
        Ok(Some(moved))
    }

    /// Applies `mutator` to the first record matching `predicate` and saves.
    /// Returns `false` without writing when nothing matches.
    pub fn update_first_where<R, P, M>(
        &mut self,
        predicate: P,
        mutator: M,
    ) -> Result<bool, BookmarkError>
    where
        R: StoredRecord,
        P: FnMut(&R) -> bool,
        M: FnOnce(&mut R),
    {
        let mut records = self.load::<R>()?;
        let Some(index) = records.iter().position(predicate) else {
            return Ok(false);
        };
        mutator(&mut records[index]);
        self.save(&records)?;
        Ok(true)
    }

    /// Deletes the whole collection.
    pub fn clear(&mut self, collection: Collection) -> Result<(), BookmarkError> {
        self.kv.delete(collection.key())?;
        tracing::debug!(collection = collection.key(), "cleared collection");
        Ok(())
    }
}
