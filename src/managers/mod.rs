// Shelfmark state managers
// Managers handle persisted state: the key-value store, typed collections, bookmarks.

pub mod bookmark_manager;
pub mod kv_store;
pub mod record_store;
