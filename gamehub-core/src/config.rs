//! Hub configuration.
//!
//! Read from an optional JSON file; every field has a default so an empty
//! object (or no file at all) is a valid config.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{HubError, Result};

/// Overrides the vault location regardless of the config file.
pub const VAULT_ENV: &str = "GAMEHUB_VAULT";

const VAULT_FILE: &str = "gamehub.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Explicit vault path. `None` means the per-user data directory.
    pub vault_path: Option<PathBuf>,
    pub snake_tick_ms: u64,
    pub opponent_delay_ms: u64,
    pub memory_reveal_ms: u64,
    pub whack_tick_ms: u64,
    pub whack_seconds: u32,
    /// Length of the recent-games list, at most [`gamehub_ledger::RECENT_LIMIT`].
    pub recent_limit: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            vault_path: None,
            snake_tick_ms: 150,
            opponent_delay_ms: 500,
            memory_reveal_ms: 1000,
            whack_tick_ms: 1000,
            whack_seconds: gamehub_rules::whack::DEFAULT_SECONDS,
            recent_limit: gamehub_ledger::RECENT_LIMIT,
        }
    }
}

impl HubConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(HubError::Config(format!("{}: {e}", path.display()))),
        };
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| HubError::Config(e.to_string()))
    }

    /// Where the vault lives: `GAMEHUB_VAULT`, then `vault_path`, then the
    /// platform data directory. `None` if no location can be determined.
    pub fn resolve_vault_path(&self) -> Option<PathBuf> {
        if let Some(env) = std::env::var_os(VAULT_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(env));
        }
        if let Some(path) = &self.vault_path {
            return Some(path.clone());
        }
        ProjectDirs::from("com", "DrTomLLC", "GameHub")
            .map(|dirs| dirs.data_dir().join(VAULT_FILE))
    }

    pub fn snake_tick(&self) -> Duration {
        Duration::from_millis(self.snake_tick_ms.max(1))
    }

    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    pub fn memory_reveal(&self) -> Duration {
        Duration::from_millis(self.memory_reveal_ms)
    }

    pub fn whack_tick(&self) -> Duration {
        Duration::from_millis(self.whack_tick_ms.max(1))
    }
}
