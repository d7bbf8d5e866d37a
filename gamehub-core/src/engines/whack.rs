use std::time::Duration;

use gamehub_rules::whack::{Tick, WhackAMole, HIT_POINTS};

use crate::engine::{Button, GameEngine, GameView, Input};
use crate::session::SessionContext;

/// Whack-a-mole on a repeating tick. Hits are paid out when the clock runs
/// out; there is no win or loss.
#[derive(Debug)]
pub struct WhackEngine {
    game: WhackAMole,
    seconds: u32,
    tick: Duration,
}

impl WhackEngine {
    pub fn new(seconds: u32, tick: Duration) -> Self {
        Self {
            game: WhackAMole::new(seconds),
            seconds,
            tick,
        }
    }

    pub fn game(&self) -> &WhackAMole {
        &self.game
    }
}

impl GameEngine for WhackEngine {
    fn start(&mut self, ctx: &mut SessionContext) {
        self.game = WhackAMole::new(self.seconds);
        ctx.say("Press Start and hit the moles!");
    }

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext) {
        match input {
            Input::Button(Button::Start) if !self.game.is_running() => {
                self.game.start(self.seconds, ctx.rng());
                ctx.clear_message();
                ctx.schedule_every(self.tick);
            }
            Input::Cell(hole) => {
                self.game.whack(hole);
            }
            _ => {}
        }
    }

    fn on_timer(&mut self, ctx: &mut SessionContext) {
        if let Tick::Finished { hits } = self.game.tick(ctx.rng()) {
            ctx.cancel_schedule();
            ctx.add_score(u64::from(hits) * HIT_POINTS);
            ctx.say(format!("Time's up! You hit {hits} moles"));
        }
    }

    fn teardown(&mut self) {
        self.game = WhackAMole::new(self.seconds);
    }

    fn render_state(&self) -> GameView {
        GameView::Whack {
            active: self.game.active(),
            time_left: self.game.time_left(),
            hits: self.game.hits(),
            running: self.game.is_running(),
        }
    }
}
