use gamehub_rules::rps::{Hand, RoundResult, Tally, WIN_POINTS};

use crate::engine::{Button, GameEngine, GameView, Input};
use crate::session::SessionContext;

/// Rock-paper-scissors. Rounds never end the session.
#[derive(Debug, Default)]
pub struct RpsEngine {
    tally: Tally,
}

impl RpsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Play one round against a fixed computer hand.
    pub fn play_against(&mut self, player: Hand, computer: Hand, ctx: &mut SessionContext) {
        let result = self.tally.play(player, computer);
        if result == RoundResult::Win {
            ctx.add_score(WIN_POINTS);
        }
        ctx.say(match result {
            RoundResult::Win => "You win!",
            RoundResult::Lose => "Computer wins!",
            RoundResult::Tie => "It's a tie!",
        });
    }
}

impl GameEngine for RpsEngine {
    fn start(&mut self, ctx: &mut SessionContext) {
        self.tally = Tally::default();
        ctx.say("Choose your weapon!");
    }

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext) {
        match input {
            Input::Button(Button::Choice(hand)) => {
                let computer = Hand::random(ctx.rng());
                self.play_against(hand, computer, ctx);
            }
            Input::Text(text) => {
                if let Some(hand) = Hand::parse(&text) {
                    let computer = Hand::random(ctx.rng());
                    self.play_against(hand, computer, ctx);
                }
            }
            _ => {}
        }
    }

    fn render_state(&self) -> GameView {
        GameView::Rps {
            player: self.tally.player,
            computer: self.tally.computer,
            last: self.tally.last,
        }
    }
}
