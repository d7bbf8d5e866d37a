//! # GameHub Core
//!
//! Hosts one game at a time behind the [`HubShell`]. The shell looks a game
//! up in the [`Registry`], builds its engine, routes input to it and keeps
//! the [`Ledger`](gamehub_ledger::Ledger) up to date. Each session owns at
//! most one [`ScheduledTask`]; leaving a game cancels it before anything
//! else starts.

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod parser;
pub mod registry;
pub mod session;
pub mod shell;
pub mod task;

pub use config::HubConfig;
pub use engine::{Button, GameEngine, GameMode, GameView, Input};
pub use error::{HubError, Result};
pub use registry::{Category, GameDescriptor, GameSummary, Registry};
pub use session::{Outcome, Schedule, SessionContext, SessionId};
pub use shell::{Frame, GameFrame, HubShell, RenderSurface};
pub use task::{HubEvent, ScheduledTask, TaskSlot};

use gamehub_ledger::{Ledger, MemoryStore, Vault};

/// Open the ledger at the configured vault location. Falls back to an
/// in-memory store when the vault cannot be opened, so play never fails on
/// persistence.
pub fn open_ledger(config: &HubConfig) -> Ledger {
    let Some(path) = config.resolve_vault_path() else {
        tracing::warn!("no data directory, favorites and scores will not persist");
        return Ledger::with_recent_limit(MemoryStore::new(), config.recent_limit);
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!(path = %parent.display(), error = %e, "could not create data directory");
        }
    }

    match Vault::open(&path) {
        Ok(vault) => {
            let sessions = vault.session_count().unwrap_or_default();
            tracing::info!(path = %path.display(), session = %vault.session_id(), sessions, "vault opened");
            Ledger::with_recent_limit(vault, config.recent_limit)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "vault unavailable, using memory store");
            Ledger::with_recent_limit(MemoryStore::new(), config.recent_limit)
        }
    }
}
