//! Memory match: 8 pairs, two cards face-up at a time.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const SYMBOLS: [&str; 8] = ["🎈", "🎭", "🎪", "🎨", "🎯", "🎲", "🎸", "🎺"];
pub const PAIR_POINTS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    Ignored,
    /// One card face-up, waiting for a second.
    First,
    /// Two cards face-up; call `resolve` after the reveal delay.
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing pending.
    Nothing,
    Missed,
    Matched { complete: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBoard {
    /// Symbol index per card position.
    cards: Vec<usize>,
    face_up: Vec<usize>,
    matched: Vec<bool>,
    moves: u32,
}

impl MemoryBoard {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<usize> = (0..SYMBOLS.len()).chain(0..SYMBOLS.len()).collect();
        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    pub fn from_cards(cards: Vec<usize>) -> Self {
        let matched = vec![false; cards.len()];
        Self {
            cards,
            face_up: Vec::with_capacity(2),
            matched,
            moves: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pairs_found(&self) -> usize {
        self.matched.iter().filter(|&&m| m).count() / 2
    }

    pub fn is_complete(&self) -> bool {
        self.matched.iter().all(|&m| m)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.face_up.contains(&index) || self.matched.get(index).copied().unwrap_or(false)
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    pub fn symbol(&self, index: usize) -> Option<&'static str> {
        self.cards.get(index).and_then(|&s| SYMBOLS.get(s)).copied()
    }

    pub fn flip(&mut self, index: usize) -> Flip {
        if index >= self.cards.len()
            || self.face_up.len() >= 2
            || self.is_visible(index)
        {
            return Flip::Ignored;
        }
        self.face_up.push(index);
        if self.face_up.len() == 2 {
            self.moves += 1;
            Flip::Second
        } else {
            Flip::First
        }
    }

    /// Settle the face-up pair.
    pub fn resolve(&mut self) -> Resolution {
        let &[a, b] = self.face_up.as_slice() else {
            return Resolution::Nothing;
        };
        self.face_up.clear();
        if self.cards[a] == self.cards[b] {
            self.matched[a] = true;
            self.matched[b] = true;
            Resolution::Matched {
                complete: self.is_complete(),
            }
        } else {
            Resolution::Missed
        }
    }

    /// End-of-game bonus, shrinking with the number of moves.
    pub fn completion_bonus(&self) -> u64 {
        500u64.saturating_sub(self.moves as u64 * 10)
    }
}
