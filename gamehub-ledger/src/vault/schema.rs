/// gamehub-ledger/src/vault/schema.rs
/// The initial schema for the GameHub Vault.
pub const MIGRATION_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS session (
    id TEXT PRIMARY KEY,
    start_time INTEGER NOT NULL,
    end_time INTEGER
);

-- One JSON document per ledger record (favorites, recent, scores, theme)
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL,
    session_id TEXT,
    FOREIGN KEY(session_id) REFERENCES session(id)
);
"#;
