//! Whack-a-mole. One tick per second: the clock counts down and the mole
//! hops to a random hole. No rules beyond the clock.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const HOLES: usize = 9;
pub const DEFAULT_SECONDS: u32 = 30;
pub const HIT_POINTS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Idle,
    Running { time_left: u32 },
    Finished { hits: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhackAMole {
    active: Option<usize>,
    time_left: u32,
    hits: u32,
    running: bool,
}

impl Default for WhackAMole {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS)
    }
}

impl WhackAMole {
    pub fn new(seconds: u32) -> Self {
        Self {
            active: None,
            time_left: seconds,
            hits: 0,
            running: false,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start<R: Rng + ?Sized>(&mut self, seconds: u32, rng: &mut R) {
        self.time_left = seconds;
        self.hits = 0;
        self.running = true;
        self.active = Some(rng.gen_range(0..HOLES));
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.running = false;
            self.active = None;
            return Tick::Finished { hits: self.hits };
        }
        self.active = Some(rng.gen_range(0..HOLES));
        Tick::Running {
            time_left: self.time_left,
        }
    }

    /// Returns true on a hit. The mole disappears until the next tick.
    pub fn whack(&mut self, hole: usize) -> bool {
        if self.running && self.active == Some(hole) {
            self.hits += 1;
            self.active = None;
            return true;
        }
        false
    }
}
