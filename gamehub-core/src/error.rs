use gamehub_ledger::StoreError;
use thiserror::Error;

use crate::engine::GameMode;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("unknown game `{0}`")]
    UnknownGame(String),

    #[error("`{game}` cannot be played in {mode} mode")]
    ModeNotAvailable { game: String, mode: GameMode },

    #[error("no game is running")]
    NoActiveGame,

    #[error("ledger error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HubError>;
