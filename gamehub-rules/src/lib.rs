//! # GameHub Rules
//!
//! Pure, synchronous rule engines for every game the hub actually implements.
//! Nothing in here knows about sessions, timers or persistence: each type owns
//! its board and exposes the transitions, and randomness is always injected
//! through a caller-supplied `Rng` so games are reproducible under a seed.

use serde::{Deserialize, Serialize};

pub mod cards;
pub mod connect_four;
pub mod guess;
pub mod memory;
pub mod rps;
pub mod snake;
pub mod tictactoe;
pub mod tiles;
pub mod whack;

pub use cards::{Blackjack, Card, Deck, HandOutcome};
pub use guess::{GuessError, GuessOutcome, NumberGuess};
pub use tictactoe::{BoardState, Mark, Placement, TicTacToe};
pub use tiles::{MoveReport, TileGrid};

/// A direction pressed by the player (arrows / WASD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Map a keyboard key name to a direction.
    /// Accepts arrow key names and WASD, case-insensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "arrowup" | "up" | "w" => Some(Direction::Up),
            "arrowdown" | "down" | "s" => Some(Direction::Down),
            "arrowleft" | "left" | "a" => Some(Direction::Left),
            "arrowright" | "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }
}
