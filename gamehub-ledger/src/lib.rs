//! # GameHub Ledger
//!
//! The only state that outlives a play session: favorites, recently played
//! games, best scores and the UI theme. Records live as JSON values in a
//! key-value store; the SQLite [`Vault`] is the real backend and
//! [`MemoryStore`] backs tests and the no-disk fallback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod ledger;
pub mod memory;
pub mod store;
pub mod vault;

pub use ledger::{Ledger, LedgerView, RECENT_LIMIT};
pub use memory::MemoryStore;
pub use store::{KeyValueStore, keys};
pub use vault::Vault;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("malformed record under `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("store lock poisoned")]
    Poisoned,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// UI colour scheme, persisted under `theme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
