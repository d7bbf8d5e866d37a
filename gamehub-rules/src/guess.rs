//! Number guessing: 1..=100, ten attempts.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RANGE: RangeInclusive<i64> = 1..=100;
pub const MAX_ATTEMPTS: u32 = 10;

/// Rejected input. The message is meant to be shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a number between 1 and 100")]
    NotANumber(String),
    #[error("Please enter a number between 1 and 100 (got {0})")]
    OutOfRange(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Game already finished.
    Ignored,
    TooLow,
    TooHigh,
    Correct { attempts: u32, award: u64 },
    OutOfAttempts { target: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberGuess {
    target: i64,
    attempts: u32,
    finished: bool,
}

impl NumberGuess {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_target(rng.gen_range(RANGE))
    }

    pub fn with_target(target: i64) -> Self {
        Self {
            target,
            attempts: 0,
            finished: false,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Parse and range-check raw player input without touching game state.
    pub fn parse(input: &str) -> Result<i64, GuessError> {
        let trimmed = input.trim();
        let n: i64 = trimmed
            .parse()
            .map_err(|_| GuessError::NotANumber(trimmed.to_string()))?;
        if !RANGE.contains(&n) {
            return Err(GuessError::OutOfRange(n));
        }
        Ok(n)
    }

    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.finished {
            return Ok(GuessOutcome::Ignored);
        }
        let n = Self::parse(input)?;
        self.attempts += 1;

        let outcome = if n == self.target {
            self.finished = true;
            GuessOutcome::Correct {
                attempts: self.attempts,
                award: 100u64.saturating_sub(self.attempts as u64 * 10).max(10),
            }
        } else if self.attempts >= MAX_ATTEMPTS {
            self.finished = true;
            GuessOutcome::OutOfAttempts {
                target: self.target,
            }
        } else if n < self.target {
            GuessOutcome::TooLow
        } else {
            GuessOutcome::TooHigh
        };
        Ok(outcome)
    }
}
