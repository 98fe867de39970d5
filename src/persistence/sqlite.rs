use super::KvStore;
use crate::app_dirs::AppDirs;
use crate::error::PersistenceError;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// Key-value slots in a single SQLite table.
#[derive(Debug)]
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Open the database at the default state location
    pub fn open_default() -> Result<Self, PersistenceError> {
        let db_path = AppDirs::db_path().unwrap_or_else(|| PathBuf::from("trailpin.db"));
        Self::open(db_path)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        tracing::info!(path = %path.display(), "Opened activity database");
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, PersistenceError> {
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            [],
        )?;
        Ok(Self { conn })
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
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

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.conn.execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn in_memory_roundtrip() {
        let mut store = SqliteKvStore::open_in_memory().unwrap();
        assert_eq!(store.get("workouts").unwrap(), None);
        store.set("workouts", "[]").unwrap();
        store.set("workouts", "[1]").unwrap();
        assert_eq!(store.get("workouts").unwrap().as_deref(), Some("[1]"));
        store.remove("workouts").unwrap();
        assert_eq!(store.get("workouts").unwrap(), None);
    }

    #[test]
    fn survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("activities.db");
        {
            let mut store = SqliteKvStore::open(&path).unwrap();
            store.set("workouts", "[\"kept\"]").unwrap();
        }
        let store = SqliteKvStore::open(&path).unwrap();
        assert_eq!(
            store.get("workouts").unwrap().as_deref(),
            Some("[\"kept\"]")
        );
    }
}
