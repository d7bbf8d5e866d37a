//! The capability set every game implements, and the input/view types that
//! cross the rendering boundary.

use std::fmt;
use std::str::FromStr;

use gamehub_rules::cards::HandOutcome;
use gamehub_rules::connect_four::Disc;
use gamehub_rules::rps::{Hand, RoundResult};
use gamehub_rules::snake::Point;
use gamehub_rules::{BoardState, Direction, Mark};
use serde::{Deserialize, Serialize};

use crate::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    Single,
    TwoPlayer,
    VsComputer,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Single => "single",
            GameMode::TwoPlayer => "two-player",
            GameMode::VsComputer => "vs-computer",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(GameMode::Single),
            "two-player" | "two" | "2p" => Ok(GameMode::TwoPlayer),
            "vs-computer" | "computer" | "cpu" => Ok(GameMode::VsComputer),
            other => Err(format!("unknown mode `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    NewGame,
    Start,
    Hit,
    Stand,
    PlayRound,
    Practice,
    Choice(Hand),
}

impl FromStr for Button {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if let Some(hand) = Hand::parse(&lowered) {
            return Ok(Button::Choice(hand));
        }
        match lowered.as_str() {
            "new" | "new-game" | "reset" => Ok(Button::NewGame),
            "start" => Ok(Button::Start),
            "hit" => Ok(Button::Hit),
            "stand" => Ok(Button::Stand),
            "play" | "play-round" => Ok(Button::PlayRound),
            "practice" => Ok(Button::Practice),
            other => Err(format!("unknown button `{other}`")),
        }
    }
}

/// A discrete input event from the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Cell(usize),
    Direction(Direction),
    Button(Button),
    Text(String),
}

/// Display-state snapshot of one engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameView {
    Tiles {
        rows: Vec<Vec<u32>>,
        won: bool,
        stuck: bool,
    },
    Board {
        cells: Vec<Option<Mark>>,
        current: Mark,
        state: BoardState,
        wins_x: u32,
        wins_o: u32,
    },
    Blackjack {
        player: Vec<String>,
        /// The hole card is `None` until the hand is over.
        dealer: Vec<Option<String>>,
        player_total: u32,
        dealer_total: Option<u32>,
        outcome: Option<HandOutcome>,
    },
    Snake {
        body: Vec<Point>,
        food: Point,
        running: bool,
        alive: bool,
    },
    Memory {
        cards: Vec<Option<&'static str>>,
        moves: u32,
        pairs: usize,
    },
    Guess {
        attempts: u32,
        remaining: u32,
        finished: bool,
    },
    Rps {
        player: u32,
        computer: u32,
        last: Option<(Hand, Hand, RoundResult)>,
    },
    ConnectFour {
        columns: usize,
        cells: Vec<Option<Disc>>,
        current: Disc,
    },
    Whack {
        active: Option<usize>,
        time_left: u32,
        hits: u32,
        running: bool,
    },
    Placeholder {
        title: String,
    },
}

/// One playable game. The shell owns the engine for the length of a session
/// and passes the [`SessionContext`] into every call.
///
/// Invalid input must leave the engine unchanged and is not an error.
pub trait GameEngine: Send {
    fn start(&mut self, ctx: &mut SessionContext);

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext);

    /// Called when the session's scheduled task fires.
    fn on_timer(&mut self, _ctx: &mut SessionContext) {}

    /// Release per-session resources. Must be idempotent.
    fn teardown(&mut self) {}

    fn render_state(&self) -> GameView;
}
