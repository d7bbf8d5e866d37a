//! The game catalogue: identifier → descriptor → engine factory.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::HubConfig;
use crate::engine::{GameEngine, GameMode};
use crate::engines::{
    BlackjackEngine, BoardEngine, ConnectFourEngine, GuessEngine, MemoryEngine,
    PlaceholderEngine, RpsEngine, SnakeEngine, TileEngine, WhackEngine,
};
use crate::error::{HubError, Result};

pub type EngineFactory = Arc<dyn Fn(&HubConfig) -> Box<dyn GameEngine> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Puzzle,
    Arcade,
    Action,
    Strategy,
    Card,
}

#[derive(Clone)]
pub struct GameDescriptor {
    pub id: String,
    pub title: String,
    pub category: Category,
    /// Selectable modes; the first is the default.
    pub modes: Vec<GameMode>,
    pub factory: EngineFactory,
}

impl fmt::Debug for GameDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("category", &self.category)
            .field("modes", &self.modes)
            .finish_non_exhaustive()
    }
}

impl GameDescriptor {
    pub fn new<F>(id: &str, title: &str, category: Category, modes: &[GameMode], factory: F) -> Self
    where
        F: Fn(&HubConfig) -> Box<dyn GameEngine> + Send + Sync + 'static,
    {
        let modes = if modes.is_empty() {
            vec![GameMode::Single]
        } else {
            modes.to_vec()
        };
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category,
            modes,
            factory: Arc::new(factory),
        }
    }

    /// A rule-less game that only pays out on its two buttons.
    pub fn placeholder(id: &str, title: &str, category: Category, modes: &[GameMode]) -> Self {
        let owned = title.to_string();
        Self::new(id, title, category, modes, move |_| {
            Box::new(PlaceholderEngine::new(owned.clone()))
        })
    }

    pub fn default_mode(&self) -> GameMode {
        self.modes.first().copied().unwrap_or(GameMode::Single)
    }

    pub fn supports(&self, mode: GameMode) -> bool {
        self.modes.contains(&mode)
    }

    pub fn build(&self, config: &HubConfig) -> Box<dyn GameEngine> {
        (self.factory)(config)
    }
}

/// Catalogue entry without the factory, for menus and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub modes: Vec<GameMode>,
}

impl From<&GameDescriptor> for GameSummary {
    fn from(d: &GameDescriptor) -> Self {
        Self {
            id: d.id.clone(),
            title: d.title.clone(),
            category: d.category,
            modes: d.modes.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    games: Vec<GameDescriptor>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a game. Catalogue order is first-registration order.
    pub fn register(&mut self, descriptor: GameDescriptor) {
        match self.index.get(&descriptor.id) {
            Some(&slot) => self.games[slot] = descriptor,
            None => {
                self.index.insert(descriptor.id.clone(), self.games.len());
                self.games.push(descriptor);
            }
        }
    }

    pub fn get(&self, id: &str) -> Result<&GameDescriptor> {
        self.index
            .get(id)
            .map(|&slot| &self.games[slot])
            .ok_or_else(|| HubError::UnknownGame(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameDescriptor> {
        self.games.iter()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &GameDescriptor> {
        self.games.iter().filter(move |g| g.category == category)
    }

    pub fn summaries(&self) -> Vec<GameSummary> {
        self.games.iter().map(GameSummary::from).collect()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Every game the hub ships with.
    pub fn builtin() -> Self {
        use Category::*;
        use GameMode::*;

        let mut reg = Self::new();

        // Puzzle
        reg.register(GameDescriptor::new(
            "ticTacToe",
            "Tic Tac Toe",
            Puzzle,
            &[Single, TwoPlayer, VsComputer],
            |c| Box::new(BoardEngine::new(c.opponent_delay())),
        ));
        reg.register(GameDescriptor::new(
            "connectFour",
            "Connect Four",
            Puzzle,
            &[VsComputer, TwoPlayer],
            |_| Box::new(ConnectFourEngine::new()),
        ));
        reg.register(GameDescriptor::placeholder("chess", "Chess Mini", Puzzle, &[VsComputer]));
        reg.register(GameDescriptor::placeholder("checkers", "Checkers", Puzzle, &[VsComputer]));
        reg.register(GameDescriptor::new("puzzle2048", "2048 Puzzle", Puzzle, &[], |_| {
            Box::new(TileEngine::new())
        }));
        reg.register(GameDescriptor::placeholder("slidingPuzzle", "Sliding Puzzle", Puzzle, &[]));
        reg.register(GameDescriptor::new("memory", "Memory Match", Puzzle, &[], |c| {
            Box::new(MemoryEngine::new(c.memory_reveal()))
        }));
        for (id, title) in [
            ("sudoku", "Sudoku"),
            ("crossword", "Mini Crossword"),
            ("wordSearch", "Word Search"),
            ("jigsaw", "Jigsaw Puzzle"),
            ("hanoi", "Tower of Hanoi"),
            ("lightsOut", "Lights Out"),
        ] {
            reg.register(GameDescriptor::placeholder(id, title, Puzzle, &[]));
        }
        reg.register(GameDescriptor::new(
            "numberGuessing",
            "Number Guessing",
            Puzzle,
            &[],
            |_| Box::new(GuessEngine::new()),
        ));
        reg.register(GameDescriptor::placeholder("patternMemory", "Pattern Memory", Puzzle, &[]));

        // Arcade
        reg.register(GameDescriptor::new("snake", "Snake Classic", Arcade, &[], |c| {
            Box::new(SnakeEngine::new(c.snake_tick()))
        }));
        let arcade: &[(&str, &str, &[GameMode])] = &[
            ("tetris", "Tetris", &[]),
            ("pacman", "Pac-Man Style", &[]),
            ("spaceInvaders", "Space Invaders", &[]),
            ("asteroids", "Asteroids", &[]),
            ("breakout", "Breakout", &[]),
            ("pong", "Pong", &[VsComputer, TwoPlayer]),
            ("centipede", "Centipede", &[]),
            ("frogger", "Frogger Style", &[]),
            ("missile", "Missile Command", &[]),
            ("flappy", "Flappy Bird", &[]),
            ("doodleJump", "Doodle Jump", &[]),
            ("runner", "Endless Runner", &[]),
            ("balloonPop", "Balloon Pop", &[]),
            ("duckHunt", "Duck Hunt", &[]),
        ];
        for &(id, title, modes) in arcade {
            reg.register(GameDescriptor::placeholder(id, title, Arcade, modes));
        }

        // Action
        reg.register(GameDescriptor::new("whackMole", "Whack-a-Mole", Action, &[], |c| {
            Box::new(WhackEngine::new(c.whack_seconds, c.whack_tick()))
        }));
        for (id, title) in [
            ("reactionTest", "Reaction Test"),
            ("simon", "Simon Says"),
            ("typingSpeed", "Typing Challenge"),
            ("colorMemory", "Color Memory"),
            ("clickChallenge", "Click Challenge"),
            ("catchFalling", "Catch Objects"),
            ("shootingGallery", "Shooting Gallery"),
            ("avoidObstacles", "Avoid Obstacles"),
            ("mouseAccuracy", "Mouse Accuracy"),
        ] {
            reg.register(GameDescriptor::placeholder(id, title, Action, &[]));
        }

        // Strategy
        reg.register(GameDescriptor::new(
            "rockPaperScissors",
            "Rock Paper Scissors",
            Strategy,
            &[VsComputer],
            |_| Box::new(RpsEngine::new()),
        ));
        reg.register(GameDescriptor::placeholder("reversi", "Reversi/Othello", Strategy, &[VsComputer]));
        reg.register(GameDescriptor::placeholder("nim", "Nim Game", Strategy, &[VsComputer]));
        reg.register(GameDescriptor::placeholder(
            "dotsAndBoxes",
            "Dots and Boxes",
            Strategy,
            &[VsComputer, TwoPlayer],
        ));

        // Card & casino
        reg.register(GameDescriptor::new("blackjack", "Blackjack", Card, &[Single], |_| {
            Box::new(BlackjackEngine::new())
        }));
        let cards: &[(&str, &str, &[GameMode])] = &[
            ("solitaire", "Klondike Solitaire", &[]),
            ("war", "War Card Game", &[VsComputer]),
            ("goFish", "Go Fish", &[VsComputer]),
            ("memoryNumbers", "Memory Numbers", &[]),
            ("concentration", "Concentration", &[]),
            ("minesweeper", "Minesweeper", &[]),
            ("slotMachine", "Slot Machine", &[]),
            ("coinFlip", "Coin Flip Predictor", &[]),
            ("diceRoll", "Dice Simulator", &[]),
            ("bingo", "Bingo Generator", &[]),
        ];
        for &(id, title, modes) in cards {
            reg.register(GameDescriptor::placeholder(id, title, Card, modes));
        }

        reg
    }
}
