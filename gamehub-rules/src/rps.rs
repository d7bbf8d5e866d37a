//! Rock-paper-scissors against a uniform random computer.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const WIN_POINTS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Hand {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors) | (Hand::Paper, Hand::Rock) | (Hand::Scissors, Hand::Paper)
        )
    }

    pub fn parse(s: &str) -> Option<Hand> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Some(Hand::Rock),
            "paper" => Some(Hand::Paper),
            "scissors" => Some(Hand::Scissors),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Win,
    Lose,
    Tie,
}

pub fn judge(player: Hand, computer: Hand) -> RoundResult {
    if player == computer {
        RoundResult::Tie
    } else if player.beats(computer) {
        RoundResult::Win
    } else {
        RoundResult::Lose
    }
}

/// Running tally across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player: u32,
    pub computer: u32,
    pub last: Option<(Hand, Hand, RoundResult)>,
}

impl Tally {
    pub fn play(&mut self, player: Hand, computer: Hand) -> RoundResult {
        let result = judge(player, computer);
        match result {
            RoundResult::Win => self.player += 1,
            RoundResult::Lose => self.computer += 1,
            RoundResult::Tie => {}
        }
        self.last = Some((player, computer, result));
        result
    }
}
