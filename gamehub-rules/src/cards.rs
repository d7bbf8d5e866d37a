//! Blackjack: deck, hand totals and the dealer's draw rule.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Dealer draws while below this total, stands at or above it.
pub const DEALER_STANDS_AT: u32 = 17;
pub const BLACKJACK: u32 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Card rank, 1 (ace) through 13 (king).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    pub fn new(n: u8) -> Option<Rank> {
        (1..=13).contains(&n).then_some(Rank(n))
    }

    pub fn is_ace(self) -> bool {
        self.0 == 1
    }

    /// Ace counts 11 (softened later), faces count 10.
    pub fn value(self) -> u32 {
        match self.0 {
            1 => 11,
            11..=13 => 10,
            n => n as u32,
        }
    }

    fn label(self) -> String {
        match self.0 {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Best total for a hand: aces drop from 11 to 1 while the hand is bust.
pub fn hand_total(hand: &[Card]) -> u32 {
    let mut total: u32 = hand.iter().map(|c| c.rank.value()).sum();
    let mut aces = hand.iter().filter(|c| c.rank.is_ace()).count();
    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    total
}

pub fn dealer_should_draw(total: u32) -> bool {
    total < DEALER_STANDS_AT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for n in 1..=13 {
                cards.push(Card::new(suit, Rank(n)));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// A stacked deck. Cards are drawn from the end.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw the top card, reshuffling a fresh deck when exhausted.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Card {
        if let Some(card) = self.cards.pop() {
            return card;
        }
        *self = Self::shuffled(rng);
        self.cards
            .pop()
            .unwrap_or(Card::new(Suit::Spades, Rank::ACE))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

impl HandOutcome {
    /// Points the player earns for the hand.
    pub fn award(self) -> u64 {
        match self {
            HandOutcome::DealerBust => 50,
            HandOutcome::PlayerWins => 25,
            HandOutcome::Push => 10,
            HandOutcome::PlayerBust | HandOutcome::DealerWins => 0,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            HandOutcome::PlayerBust => "Player busts! Dealer wins!",
            HandOutcome::DealerBust => "Dealer busts! You win!",
            HandOutcome::PlayerWins => "You win!",
            HandOutcome::DealerWins => "Dealer wins!",
            HandOutcome::Push => "It's a tie!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blackjack {
    deck: Deck,
    player: Vec<Card>,
    dealer: Vec<Card>,
    outcome: Option<HandOutcome>,
}

impl Blackjack {
    /// Shuffle a fresh deck and deal two cards each.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut game = Self::with_hands(Deck::shuffled(rng), Vec::new(), Vec::new());
        game.deal(rng);
        game
    }

    pub fn with_hands(deck: Deck, player: Vec<Card>, dealer: Vec<Card>) -> Self {
        Self {
            deck,
            player,
            dealer,
            outcome: None,
        }
    }

    /// Start a new hand from a freshly shuffled deck.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck = Deck::shuffled(rng);
        self.player = vec![self.deck.draw(rng), self.deck.draw(rng)];
        self.dealer = vec![self.deck.draw(rng), self.deck.draw(rng)];
        self.outcome = None;
    }

    pub fn player_hand(&self) -> &[Card] {
        &self.player
    }

    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer
    }

    pub fn player_total(&self) -> u32 {
        hand_total(&self.player)
    }

    pub fn dealer_total(&self) -> u32 {
        hand_total(&self.dealer)
    }

    pub fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Player draws one card. Returns the outcome if this ended the hand.
    pub fn hit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<HandOutcome> {
        if self.is_over() {
            return None;
        }
        self.player.push(self.deck.draw(rng));
        if self.player_total() > BLACKJACK {
            self.outcome = Some(HandOutcome::PlayerBust);
        }
        self.outcome
    }

    /// Dealer draws to 17, then the hand is settled.
    pub fn stand<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<HandOutcome> {
        if self.is_over() {
            return None;
        }
        self.play_dealer(rng);

        let player = self.player_total();
        let dealer = self.dealer_total();
        let outcome = if dealer > BLACKJACK {
            HandOutcome::DealerBust
        } else if player > dealer {
            HandOutcome::PlayerWins
        } else if dealer > player {
            HandOutcome::DealerWins
        } else {
            HandOutcome::Push
        };
        self.outcome = Some(outcome);
        self.outcome
    }

    /// Dealer hits on 16 or less and stops on 17 or more.
    pub fn play_dealer<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        while dealer_should_draw(self.dealer_total()) {
            self.dealer.push(self.deck.draw(rng));
        }
    }
}
