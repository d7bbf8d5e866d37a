//! Favorites, recent games, best scores, theme.
//!
//! Every mutation is a scoped read-modify-write of one whole record: copy the
//! cached record, change the copy, write it under its key, and only then swap
//! it into the cache. A failed write leaves the cache at the last persisted
//! value and never touches the other keys.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::{KeyValueStore, keys};
use crate::{StoreError, Theme};

pub const RECENT_LIMIT: usize = 5;

/// Read-only copy of the ledger for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerView {
    pub favorites: Vec<String>,
    pub recent: Vec<String>,
    pub scores: BTreeMap<String, u64>,
    pub theme: Theme,
}

pub struct Ledger {
    store: Box<dyn KeyValueStore>,
    recent_limit: usize,
    favorites: Vec<String>,
    recent: Vec<String>,
    scores: BTreeMap<String, u64>,
    theme: Theme,
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("favorites", &self.favorites)
            .field("recent", &self.recent)
            .field("scores", &self.scores)
            .field("theme", &self.theme)
            .finish()
    }
}

impl Ledger {
    /// Load every record from `store`. Unreadable records start empty.
    pub fn open<S: KeyValueStore + 'static>(store: S) -> Self {
        Self::with_recent_limit(store, RECENT_LIMIT)
    }

    /// Like [`Ledger::open`] with a shorter recent list. The limit is clamped
    /// to `1..=RECENT_LIMIT`.
    pub fn with_recent_limit<S: KeyValueStore + 'static>(store: S, recent_limit: usize) -> Self {
        let favorites: Vec<String> = load_or_default(&store, keys::FAVORITES);
        let mut recent: Vec<String> = load_or_default(&store, keys::RECENT);
        let scores = load_or_default(&store, keys::SCORES);
        let theme = load_or_default(&store, keys::THEME);

        let recent_limit = recent_limit.clamp(1, RECENT_LIMIT);
        dedup_in_order(&mut recent);
        recent.truncate(recent_limit);

        let mut ledger = Self {
            store: Box::new(store),
            recent_limit,
            favorites,
            recent,
            scores,
            theme,
        };
        dedup_in_order(&mut ledger.favorites);
        ledger
    }

    // ────────────────────────────────────────────────────────────────
    // Favorites
    // ────────────────────────────────────────────────────────────────

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// Flip membership of `id`. Returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut next = self.favorites.clone();
        let now_favorite = if let Some(pos) = next.iter().position(|f| f == id) {
            next.remove(pos);
            false
        } else {
            next.push(id.to_string());
            true
        };

        persist(self.store.as_ref(), keys::FAVORITES, &next)?;
        self.favorites = next;
        tracing::debug!(id, now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    // ────────────────────────────────────────────────────────────────
    // Recent games
    // ────────────────────────────────────────────────────────────────

    pub fn recent(&self) -> &[String] {
        &self.recent
    }

    /// Move `id` to the front, drop duplicates, keep the newest few.
    pub fn record_played(&mut self, id: &str) -> Result<(), StoreError> {
        let mut next: Vec<String> = Vec::with_capacity(self.recent_limit);
        next.push(id.to_string());
        next.extend(self.recent.iter().filter(|r| *r != id).cloned());
        next.truncate(self.recent_limit);

        persist(self.store.as_ref(), keys::RECENT, &next)?;
        self.recent = next;
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────
    // Scores
    // ────────────────────────────────────────────────────────────────

    pub fn best_score(&self, id: &str) -> Option<u64> {
        self.scores.get(id).copied()
    }

    pub fn scores(&self) -> &BTreeMap<String, u64> {
        &self.scores
    }

    /// Store `value` if it beats the best for `id`. Returns true on a new best.
    pub fn record_score(&mut self, id: &str, value: u64) -> Result<bool, StoreError> {
        let best = self.best_score(id).unwrap_or(0);
        if value <= best {
            return Ok(false);
        }

        let mut next = self.scores.clone();
        next.insert(id.to_string(), value);
        persist(self.store.as_ref(), keys::SCORES, &next)?;
        self.scores = next;
        tracing::info!(id, value, previous = best, "new best score");
        Ok(true)
    }

    // ────────────────────────────────────────────────────────────────
    // Theme
    // ────────────────────────────────────────────────────────────────

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        persist(self.store.as_ref(), keys::THEME, &theme)?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, StoreError> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Release the backing store. Records stay readable from the cache.
    pub fn close(&self) -> Result<(), StoreError> {
        self.store.close()
    }

    pub fn view(&self) -> LedgerView {
        LedgerView {
            favorites: self.favorites.clone(),
            recent: self.recent.clone(),
            scores: self.scores.clone(),
            theme: self.theme,
        }
    }
}

fn persist<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value).map_err(|source| StoreError::Malformed {
        key: key.to_string(),
        source,
    })?;
    store.write(key, &json)
}

fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.read(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })
}

/// Persistence read failures degrade to "no prior data".
fn load_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match load(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "ledger record unreadable, starting empty");
            T::default()
        }
    }
}

fn dedup_in_order(ids: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}
