use std::time::Duration;

use gamehub_rules::{Mark, Placement, TicTacToe};

use crate::engine::{Button, GameEngine, GameMode, GameView, Input};
use crate::session::{Outcome, SessionContext};

pub const WIN_POINTS: u64 = 100;

/// The mark the computer plays in vs-computer mode.
const COMPUTER: Mark = Mark::O;

/// Tic-tac-toe. In vs-computer mode the heuristic opponent answers after a
/// short scheduled delay; clicks are ignored while it is "thinking".
#[derive(Debug)]
pub struct BoardEngine {
    board: TicTacToe,
    wins_x: u32,
    wins_o: u32,
    opponent_delay: Duration,
}

impl BoardEngine {
    pub fn new(opponent_delay: Duration) -> Self {
        Self {
            board: TicTacToe::new(),
            wins_x: 0,
            wins_o: 0,
            opponent_delay,
        }
    }

    pub fn board(&self) -> &TicTacToe {
        &self.board
    }

    fn computer_to_move(&self, ctx: &SessionContext) -> bool {
        ctx.mode() == GameMode::VsComputer
            && !self.board.is_terminal()
            && self.board.current() == COMPUTER
    }

    fn play(&mut self, cell: usize, ctx: &mut SessionContext) {
        match self.board.place(cell) {
            Placement::Ignored => {}
            Placement::Continue { next } => {
                ctx.say(format!("Player {}'s turn", label(next)));
                if self.computer_to_move(ctx) {
                    ctx.schedule_once(self.opponent_delay);
                }
            }
            Placement::Won(mark) => {
                match mark {
                    Mark::X => self.wins_x += 1,
                    Mark::O => self.wins_o += 1,
                }
                ctx.add_score(WIN_POINTS);
                ctx.say(format!("Player {} wins! 🎉", label(mark)));
                let outcome = if ctx.mode() == GameMode::VsComputer && mark == COMPUTER {
                    Outcome::Lost
                } else {
                    Outcome::Won
                };
                ctx.finish(outcome);
            }
            Placement::Draw => {
                ctx.say("It's a draw!");
                ctx.finish(Outcome::Draw);
            }
        }
    }
}

fn label(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "X",
        Mark::O => "O",
    }
}

impl GameEngine for BoardEngine {
    fn start(&mut self, ctx: &mut SessionContext) {
        self.board.reset();
        ctx.say("Player X's turn");
    }

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext) {
        match input {
            Input::Cell(cell) => {
                if self.computer_to_move(ctx) {
                    return;
                }
                self.play(cell, ctx);
            }
            Input::Button(Button::NewGame) => {
                self.board.reset();
                ctx.cancel_schedule();
                ctx.begin_round();
                ctx.say("Player X's turn");
            }
            _ => {}
        }
    }

    fn on_timer(&mut self, ctx: &mut SessionContext) {
        if !self.computer_to_move(ctx) {
            return;
        }
        if let Some(cell) = self.board.suggest_move(COMPUTER) {
            tracing::debug!(cell, "computer move");
            self.play(cell, ctx);
        }
    }

    fn render_state(&self) -> GameView {
        GameView::Board {
            cells: self.board.cells().to_vec(),
            current: self.board.current(),
            state: self.board.state(),
            wins_x: self.wins_x,
            wins_o: self.wins_o,
        }
    }
}
