//! Synchronous string key-value persistence.
//!
//! `KeyValueStore` is the only durable state the bookmark shelf touches.
//! `SqliteKeyValueStore` keeps each key as one row of the `kv_store` table.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::types::errors::StorageError;

/// Durable string-keyed storage with whole-value reads and writes.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` if the key was never set or was deleted.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removes `key`. Removing an absent key succeeds.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Key-value store backed by a SQLite connection.
pub struct SqliteKeyValueStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteKeyValueStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl<'a> KeyValueStore for SqliteKeyValueStore<'a> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}
