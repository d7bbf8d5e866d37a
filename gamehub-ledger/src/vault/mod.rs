// gamehub-ledger/src/vault/mod.rs

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::StoreError;
use crate::store::KeyValueStore;

pub mod schema;

// ════════════════════════════════════════════════════════════════════
// Vault
// ════════════════════════════════════════════════════════════════════

/// SQLite-backed key-value store. Every hub process opens one session row.
#[derive(Debug, Clone)]
pub struct Vault {
    conn: Arc<Mutex<Connection>>,
    session_id: String,
    start_time: i64,
}

impl Vault {
    /// Open the Vault at the specified path.
    /// Creates the database file and runs all migrations if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(&path)?;

        // WAL mode so a crashed write never tears the file
        let _mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        Self::from_connection(conn)
    }

    /// A throwaway vault, mostly for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(schema::MIGRATION_INIT)?;

        let vault = Self {
            conn: Arc::new(Mutex::new(conn)),
            session_id: Uuid::new_v4().to_string(),
            start_time: Utc::now().timestamp(),
        };
        vault.start_session()?;

        Ok(vault)
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    // ────────────────────────────────────────────────────────────────
    // Sessions
    // ────────────────────────────────────────────────────────────────

    fn start_session(&self) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO session (id, start_time) VALUES (?1, ?2)",
            params![self.session_id, self.start_time],
        )?;
        Ok(())
    }

    /// Mark the current session as ended.
    pub fn close_session(&self) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "UPDATE session SET end_time = ?1 WHERE id = ?2",
            params![Utc::now().timestamp(), self.session_id],
        )?;
        Ok(())
    }

    pub fn session_count(&self) -> Result<i64, StoreError> {
        let conn = self.lock()?;
        let count = conn.query_row("SELECT COUNT(*) FROM session", [], |row| row.get(0))?;
        Ok(count)
    }

}

impl KeyValueStore for Vault {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at, session_id) VALUES (?1, ?2, ?3, ?4)",
            params![key, value, Utc::now().timestamp(), self.session_id],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn close(&self) -> Result<(), StoreError> {
        self.close_session()
    }
}
