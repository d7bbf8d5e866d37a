use gamehub_rules::connect_four::{ConnectFour, COLUMNS, DROP_POINTS};

use crate::engine::{Button, GameEngine, GameView, Input};
use crate::session::SessionContext;

/// Connect Four without win detection: drops only.
#[derive(Debug, Default)]
pub struct ConnectFourEngine {
    board: ConnectFour,
}

impl ConnectFourEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameEngine for ConnectFourEngine {
    fn start(&mut self, _ctx: &mut SessionContext) {
        self.board = ConnectFour::new();
    }

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext) {
        match input {
            Input::Cell(cell) => {
                let column = ConnectFour::column_of(cell);
                if self.board.drop_disc(column).is_some() {
                    ctx.add_score(DROP_POINTS);
                }
            }
            Input::Button(Button::NewGame) => {
                self.board = ConnectFour::new();
                ctx.begin_round();
            }
            _ => {}
        }
    }

    fn render_state(&self) -> GameView {
        GameView::ConnectFour {
            columns: COLUMNS,
            cells: self.board.cells().to_vec(),
            current: self.board.current(),
        }
    }
}
