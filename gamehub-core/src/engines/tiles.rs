use gamehub_rules::TileGrid;

use crate::engine::{Button, GameEngine, GameView, Input};
use crate::session::{Outcome, SessionContext};

/// Bonus for the move that first produces the 2048 tile.
pub const GOAL_BONUS: u64 = 1000;

/// 2048. Reaching the goal is a milestone, not an end: play continues until
/// the grid is stuck. New Game starts the score over along with the grid.
#[derive(Debug)]
pub struct TileEngine {
    grid: TileGrid,
    preset: Option<TileGrid>,
}

impl Default for TileEngine {
    fn default() -> Self {
        Self {
            grid: TileGrid::empty(),
            preset: None,
        }
    }
}

impl TileEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fixed grid instead of a random one.
    pub fn with_grid(grid: TileGrid) -> Self {
        Self {
            grid: TileGrid::empty(),
            preset: Some(grid),
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }
}

impl GameEngine for TileEngine {
    fn start(&mut self, ctx: &mut SessionContext) {
        self.grid = match self.preset.take() {
            Some(grid) => grid,
            None => TileGrid::new(ctx.rng()),
        };
    }

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext) {
        match input {
            Input::Direction(dir) => {
                if ctx.is_terminal() {
                    return;
                }
                let report = self.grid.apply_move(dir, ctx.rng());
                if !report.changed {
                    return;
                }
                ctx.add_score(report.gained);
                if report.reached_goal {
                    ctx.add_score(GOAL_BONUS);
                    ctx.say("🎉 Congratulations! You reached 2048!");
                }
                if self.grid.is_stuck() {
                    ctx.say("No moves left!");
                    ctx.finish(Outcome::Lost);
                }
            }
            Input::Button(Button::NewGame) => {
                self.grid = TileGrid::new(ctx.rng());
                ctx.reset_score();
                ctx.begin_round();
            }
            _ => {}
        }
    }

    fn render_state(&self) -> GameView {
        GameView::Tiles {
            rows: self.grid.rows().iter().map(|r| r.to_vec()).collect(),
            won: self.grid.has_won(),
            stuck: self.grid.is_stuck(),
        }
    }
}
