//! Bookmark Manager for Shelfmark.
//!
//! Implements `BookmarkManagerTrait`: add, star, tag, archive, restore and delete,
//! on top of the [`RecordStore`]. Records are located by their `(name, url)` pair.

use chrono::Utc;

use crate::managers::kv_store::KeyValueStore;
use crate::managers::record_store::{Collection, RecordStore};
use crate::types::bookmark::{ArchivedBookmark, Bookmark};
use crate::types::errors::BookmarkError;

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both a name and a URL.";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, name: &str, url: &str) -> Result<Bookmark, BookmarkError>;
    fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError>;
    fn list_archive(&self) -> Result<Vec<ArchivedBookmark>, BookmarkError>;
    /// Flips the star on a bookmark. Returns the new value.
    fn toggle_important(&mut self, name: &str, url: &str) -> Result<bool, BookmarkError>;
    fn set_tag(&mut self, name: &str, url: &str, tag: &str) -> Result<(), BookmarkError>;
    fn archive_bookmark(
        &mut self,
        name: &str,
        url: &str,
    ) -> Result<ArchivedBookmark, BookmarkError>;
    fn restore_bookmark(&mut self, name: &str, url: &str) -> Result<Bookmark, BookmarkError>;
    /// Permanently removes archive entries. Returns how many were removed.
    fn delete_archived(
        &mut self,
        name: &str,
        url: &str,
        tag: &str,
    ) -> Result<usize, BookmarkError>;
    fn clear_archive(&mut self) -> Result<(), BookmarkError>;
}


/// Checks a name/url pair as typed by the user and returns the trimmed values.
pub fn validate_input(name: &str, url: &str) -> Result<(String, String), BookmarkError> {
    let name = name.trim();
    let url = url.trim();
    if name.is_empty() || url.is_empty() {
        return Err(BookmarkError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }
    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(BookmarkError::Validation(INVALID_URL_MESSAGE.to_string()));
    }
    Ok((name.to_string(), url.to_string()))
}

fn not_found(name: &str, url: &str) -> BookmarkError {
    BookmarkError::NotFound(format!("{} <{}>", name, url))
}

/// Bookmark manager over any key-value store.
pub struct BookmarkManager<S: KeyValueStore> {
    store: RecordStore<S>,
}

impl<S: KeyValueStore> BookmarkManager<S> {
    pub fn new(kv: S) -> Self {
        Self {
            store: RecordStore::new(kv),
        }
    }
}

impl<S: KeyValueStore> BookmarkManagerTrait for BookmarkManager<S> {
    /// Validates and appends a new bookmark. Duplicates are stored as-is.
    fn add_bookmark(&mut self, name: &str, url: &str) -> Result<Bookmark, BookmarkError> {
        let (name, url) = validate_input(name, url)?;

        let existing = self.store.load::<Bookmark>()?;
        if existing.iter().any(|b| b.matches(&name, &url)) {
            tracing::warn!(name = %name, url = %url, "adding duplicate bookmark");
        }

        let bookmark = Bookmark::new(&name, &url, Utc::now());
        self.store.append(bookmark.clone())?;
        tracing::info!(name = %bookmark.name, url = %bookmark.url, "bookmark added");
        Ok(bookmark)
    }

    fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        self.store.load()
    }

    fn list_archive(&self) -> Result<Vec<ArchivedBookmark>, BookmarkError> {
        self.store.load()
    }

    fn toggle_important(&mut self, name: &str, url: &str) -> Result<bool, BookmarkError> {
        let mut important = false;
        let found = self.store.update_first_where(
            |b: &Bookmark| b.matches(name, url),
            |b: &mut Bookmark| {
                b.important = !b.important;
                important = b.important;
            },
        )?;
        if !found {
            return Err(not_found(name, url));
        }
        Ok(important)
    }

    fn set_tag(&mut self, name: &str, url: &str, tag: &str) -> Result<(), BookmarkError> {
        let tag = tag.trim().to_string();
        let found = self.store.update_first_where(
            |b: &Bookmark| b.matches(name, url),
            |b: &mut Bookmark| b.tag = tag,
        )?;
        if !found {
            return Err(not_found(name, url));
        }
        Ok(())
    }

    /// Moves the first matching bookmark to the end of the archive, tag included.
    /// Moves the first matching bookmark to the end of the archive, tag included.
    fn archive_bookmark(
        &mut self,
        name: &str,
        url: &str,
    ) -> Result<ArchivedBookmark, BookmarkError> {
        let archived_at = Utc::now();
        let entry = self
            .store
            .move_first_where(
                |b: &Bookmark| b.matches(name, url),
                |b: Bookmark| ArchivedBookmark::from_bookmark(&b, archived_at),
            )?
            .ok_or_else(|| not_found(name, url))?;
        tracing::info!(name = %entry.name, url = %entry.url, "bookmark archived");
        Ok(entry)
    }

    /// Moves the first matching archive entry back to the end of the bookmark list.
    fn restore_bookmark(&mut self, name: &str, url: &str) -> Result<Bookmark, BookmarkError> {
        let added_at = Utc::now();
        let bookmark = self
            .store
            .move_first_where(
                |a: &ArchivedBookmark| a.matches(name, url),
                |a: ArchivedBookmark| a.restore(added_at),
            )?
            .ok_or_else(|| not_found(name, url))?;
        tracing::info!(name = %bookmark.name, url = %bookmark.url, "bookmark restored");
        Ok(bookmark)
    }

    fn delete_archived(
        &mut self,
        name: &str,
        url: &str,
        tag: &str,
    ) -> Result<usize, BookmarkError> {
        let removed = self
            .store
            .remove_where(|a: &ArchivedBookmark| a.matches(name, url) && a.tag == tag)?;
        if removed == 0 {
            return Err(not_found(name, url));
        }
        tracing::info!(name = %name, url = %url, removed, "archived bookmark deleted");
        Ok(removed)
    }

    fn clear_archive(&mut self) -> Result<(), BookmarkError> {
        self.store.clear(Collection::Archive)?;
        tracing::info!("archive cleared");
        Ok(())
    }
}
