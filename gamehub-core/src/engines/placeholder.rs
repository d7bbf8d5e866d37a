use crate::engine::{Button, GameEngine, GameView, Input};
use crate::session::SessionContext;

pub const ROUND_POINTS: u64 = 50;
pub const PRACTICE_POINTS: u64 = 25;

/// Stand-in for catalogue games with no rules: two buttons that pay out.
#[derive(Debug, Clone)]
pub struct PlaceholderEngine {
    title: String,
}

impl PlaceholderEngine {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl GameEngine for PlaceholderEngine {
    fn start(&mut self, ctx: &mut SessionContext) {
        ctx.say(format!("{} is coming soon", self.title));
    }

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext) {
        let points = match input {
            Input::Button(Button::PlayRound) => ROUND_POINTS,
            Input::Button(Button::Practice) => PRACTICE_POINTS,
            _ => return,
        };
        ctx.add_score(points);
        ctx.say(format!("You scored {points} points!"));
    }

    fn render_state(&self) -> GameView {
        GameView::Placeholder {
            title: self.title.clone(),
        }
    }
}
