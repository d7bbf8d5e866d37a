use gamehub_rules::guess::MAX_ATTEMPTS;
use gamehub_rules::{GuessOutcome, NumberGuess};

use crate::engine::{Button, GameEngine, GameView, Input};
use crate::session::{Outcome, SessionContext};

#[derive(Debug)]
pub struct GuessEngine {
    game: NumberGuess,
    preset: Option<NumberGuess>,
}

impl Default for GuessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessEngine {
    pub fn new() -> Self {
        Self {
            game: NumberGuess::with_target(1),
            preset: None,
        }
    }

    pub fn with_target(target: i64) -> Self {
        Self {
            preset: Some(NumberGuess::with_target(target)),
            ..Self::new()
        }
    }
}

impl GameEngine for GuessEngine {
    fn start(&mut self, ctx: &mut SessionContext) {
        self.game = match self.preset.take() {
            Some(game) => game,
            None => NumberGuess::new(ctx.rng()),
        };
        ctx.say("I'm thinking of a number between 1 and 100");
    }

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext) {
        match input {
            Input::Text(text) => match self.game.guess(&text) {
                // rejected input leaves the game untouched
                Err(e) => ctx.say(e.to_string()),
                Ok(GuessOutcome::Ignored) => {}
                Ok(GuessOutcome::TooLow) => ctx.say("Too low!"),
                Ok(GuessOutcome::TooHigh) => ctx.say("Too high!"),
                Ok(GuessOutcome::Correct { attempts, award }) => {
                    ctx.add_score(award);
                    ctx.say(format!("🎉 Correct! You got it in {attempts} attempts!"));
                    ctx.finish(Outcome::Won);
                }
                Ok(GuessOutcome::OutOfAttempts { target }) => {
                    ctx.say(format!("Game over! The number was {target}"));
                    ctx.finish(Outcome::Lost);
                }
            },
            Input::Button(Button::NewGame) => {
                self.game = NumberGuess::new(ctx.rng());
                ctx.begin_round();
                ctx.say("I'm thinking of a number between 1 and 100");
            }
            _ => {}
        }
    }

    fn render_state(&self) -> GameView {
        GameView::Guess {
            attempts: self.game.attempts(),
            remaining: MAX_ATTEMPTS.saturating_sub(self.game.attempts()),
            finished: self.game.is_finished(),
        }
    }
}
