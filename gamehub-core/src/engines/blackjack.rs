use gamehub_rules::cards::Deck;
use gamehub_rules::{Blackjack, HandOutcome};

use crate::engine::{Button, GameEngine, GameView, Input};
use crate::session::{Outcome, SessionContext};

#[derive(Debug)]
pub struct BlackjackEngine {
    game: Blackjack,
    preset: Option<Blackjack>,
}

impl Default for BlackjackEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BlackjackEngine {
    pub fn new() -> Self {
        Self {
            game: Blackjack::with_hands(Deck::ordered(), Vec::new(), Vec::new()),
            preset: None,
        }
    }

    /// Play the first hand from a prepared table.
    pub fn with_game(game: Blackjack) -> Self {
        Self {
            preset: Some(game),
            ..Self::new()
        }
    }

    pub fn game(&self) -> &Blackjack {
        &self.game
    }

    fn settle(&self, outcome: HandOutcome, ctx: &mut SessionContext) {
        ctx.add_score(outcome.award());
        ctx.say(outcome.message());
        ctx.finish(match outcome {
            HandOutcome::DealerBust | HandOutcome::PlayerWins => Outcome::Won,
            HandOutcome::PlayerBust | HandOutcome::DealerWins => Outcome::Lost,
            HandOutcome::Push => Outcome::Draw,
        });
    }
}

impl GameEngine for BlackjackEngine {
    fn start(&mut self, ctx: &mut SessionContext) {
        self.game = match self.preset.take() {
            Some(game) => game,
            None => Blackjack::new(ctx.rng()),
        };
        ctx.say("Hit or Stand?");
    }

    fn handle_input(&mut self, input: Input, ctx: &mut SessionContext) {
        let Input::Button(button) = input else {
            return;
        };
        let settled = match button {
            Button::Hit => self.game.hit(ctx.rng()),
            Button::Stand => self.game.stand(ctx.rng()),
            Button::NewGame => {
                self.game.deal(ctx.rng());
                ctx.begin_round();
                ctx.say("Hit or Stand?");
                None
            }
            _ => None,
        };
        if let Some(outcome) = settled {
            self.settle(outcome, ctx);
        }
    }

    fn render_state(&self) -> GameView {
        let over = self.game.is_over();
        GameView::Blackjack {
            player: self.game.player_hand().iter().map(|c| c.to_string()).collect(),
            dealer: self
                .game
                .dealer_hand()
                .iter()
                .enumerate()
                .map(|(i, c)| (over || i != 1).then(|| c.to_string()))
                .collect(),
            player_total: self.game.player_total(),
            dealer_total: over.then(|| self.game.dealer_total()),
            outcome: self.game.outcome(),
        }
    }
}
