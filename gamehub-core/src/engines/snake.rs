use std::time::Duration;

use gamehub_rules::snake::{Point, Snake, Step, FOOD_POINTS};

use crate::engine::{Button, GameEngine, GameView, Input};
use crate::session::{Outcome, SessionContext};

/// Snake, advanced one cell per repeating tick while running.
#[derive(Debug)]
pub struct SnakeEngine {
    snake: Snake,
    preset: Option<Snake>,
    running: bool,
    tick: Duration,
}

impl SnakeEngine {
    pub fn new(tick: Duration) -> Self {
        Self {
            snake: Snake::from_parts(Vec::new(), Point::new(0, 0)),
            preset: None,
            running: false,
            tick,
        }
    }

    /// Begin the first round with a prepared snake.
    pub fn with_snake(tick: Duration, snake: Snake) -> Self {
        Self {
            preset: Some(snake),
            ..Self::new(tick)
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn stop(&mut self, ctx: &mut SessionContext) {
        self.running = false;
        ctx.cancel_schedule();
    }
}

impl GameEngine for SnakeEngine {
    fn start(&mut self, ctx: &mut SessionContext) {
        self.snake = match self.preset.take() {
            Some(snake) => snake,
            None => Snake::new(ctx.rng()),
        };
        self.running = false;
        ctx.say("Press Start, then steer with WASD or the arrow keys");
    }

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext) {
        match input {
            Input::Button(Button::Start) => {
                if self.running {
                    return;
                }
                if !self.snake.is_alive() {
                    self.snake = Snake::new(ctx.rng());
                    ctx.begin_round();
                }
                self.running = true;
                ctx.clear_message();
                ctx.schedule_every(self.tick);
            }
            Input::Button(Button::NewGame) => {
                self.stop(ctx);
                self.snake = Snake::new(ctx.rng());
                ctx.begin_round();
            }
            Input::Direction(dir) if self.running => {
                self.snake.turn(dir);
            }
            _ => {}
        }
    }

    fn on_timer(&mut self, ctx: &mut SessionContext) {
        if !self.running {
            return;
        }
        match self.snake.step(ctx.rng()) {
            Step::Ate => ctx.add_score(FOOD_POINTS),
            Step::Crashed => {
                self.stop(ctx);
                ctx.say(format!("Game Over! Length: {}", self.snake.len()));
                ctx.finish(Outcome::Lost);
            }
            Step::Idle | Step::Moved => {}
        }
    }

    fn teardown(&mut self) {
        self.running = false;
    }

    fn render_state(&self) -> GameView {
        GameView::Snake {
            body: self.snake.body().copied().collect(),
            food: self.snake.food(),
            running: self.running,
            alive: self.snake.is_alive(),
        }
    }
}
