use std::time::Duration;

use gamehub_rules::memory::{Flip, MemoryBoard, Resolution, PAIR_POINTS};

use crate::engine::{Button, GameEngine, GameView, Input};
use crate::session::{Outcome, SessionContext};

/// Memory match. The second flip schedules the reveal delay; the pair is
/// settled when the timer fires.
#[derive(Debug)]
pub struct MemoryEngine {
    board: MemoryBoard,
    preset: Option<MemoryBoard>,
    reveal: Duration,
}

impl MemoryEngine {
    pub fn new(reveal: Duration) -> Self {
        Self {
            board: MemoryBoard::from_cards(Vec::new()),
            preset: None,
            reveal,
        }
    }

    pub fn with_board(reveal: Duration, board: MemoryBoard) -> Self {
        Self {
            preset: Some(board),
            ..Self::new(reveal)
        }
    }

    pub fn board(&self) -> &MemoryBoard {
        &self.board
    }
}

impl GameEngine for MemoryEngine {
    fn start(&mut self, ctx: &mut SessionContext) {
        self.board = match self.preset.take() {
            Some(board) => board,
            None => MemoryBoard::new(ctx.rng()),
        };
    }

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext) {
        match input {
            Input::Cell(index) => {
                if ctx.is_terminal() {
                    return;
                }
                if self.board.flip(index) == Flip::Second {
                    ctx.schedule_once(self.reveal);
                }
            }
            Input::Button(Button::NewGame) => {
                ctx.cancel_schedule();
                self.board = MemoryBoard::new(ctx.rng());
                ctx.begin_round();
            }
            _ => {}
        }
    }

    fn on_timer(&mut self, ctx: &mut SessionContext) {
        let Resolution::Matched { complete } = self.board.resolve() else {
            return;
        };
        ctx.add_score(PAIR_POINTS);
        if complete {
            let bonus = self.board.completion_bonus();
            ctx.add_score(bonus);
            ctx.say(format!(
                "🎉 Congratulations! You won in {} moves! Bonus: {} points",
                self.board.moves(),
                bonus
            ));
            ctx.finish(Outcome::Won);
        }
    }

    fn render_state(&self) -> GameView {
        GameView::Memory {
            cards: (0..self.board.len())
                .map(|i| {
                    if self.board.is_visible(i) {
                        self.board.symbol(i)
                    } else {
                        None
                    }
                })
                .collect(),
            moves: self.board.moves(),
            pairs: self.board.pairs_found(),
        }
    }
}
