//! Per-session state shared between the shell and the active engine.

use std::fmt;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::engine::GameMode;

/// Identifies one play session. Timer events carry it so events from a
/// torn-down session can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Fire once after the delay.
    Once(Duration),
    /// Fire every period until cancelled.
    Every(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleRequest {
    Start(Schedule),
    Cancel,
}

/// Everything an engine may touch outside its own board: score, outcome,
/// the message line, the timer request and the session's RNG.
///
/// Once an outcome is set the score is frozen until the engine starts a new
/// round with [`SessionContext::begin_round`].
#[derive(Debug)]
pub struct SessionContext {
    id: SessionId,
    game_id: String,
    mode: GameMode,
    score: u64,
    /// Best score given up by `reset_score` and not yet banked.
    retired: u64,
    outcome: Option<Outcome>,
    message: Option<String>,
    request: Option<ScheduleRequest>,
    rng: StdRng,
}

impl SessionContext {
    pub fn new(id: SessionId, game_id: impl Into<String>, mode: GameMode, rng: StdRng) -> Self {
        Self {
            id,
            game_id: game_id.into(),
            mode,
            score: 0,
            retired: 0,
            outcome: None,
            message: None,
            request: None,
            rng,
        }
    }

    /// A context with a fixed RNG seed, for driving engines directly.
    pub fn seeded(game_id: impl Into<String>, mode: GameMode, seed: u64) -> Self {
        Self::new(SessionId::new(1), game_id, mode, StdRng::seed_from_u64(seed))
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn add_score(&mut self, points: u64) {
        if self.outcome.is_some() || points == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);
    }

    /// Mark the session terminal. The first outcome wins.
    pub fn finish(&mut self, outcome: Outcome) {
        if self.outcome.is_none() {
            tracing::debug!(session = %self.id, game = %self.game_id, ?outcome, "session finished");
            self.outcome = Some(outcome);
        }
    }

    /// Drop the score back to zero. The old score is kept for the shell to
    /// bank, see [`SessionContext::take_retired_score`].
    pub fn reset_score(&mut self) {
        self.retired = self.retired.max(self.score);
        self.score = 0;
    }

    pub fn take_retired_score(&mut self) -> Option<u64> {
        let retired = std::mem::take(&mut self.retired);
        (retired > 0).then_some(retired)
    }

    /// Clear the outcome and message for a fresh round. Score carries over.
    pub fn begin_round(&mut self) {
        self.outcome = None;
        self.message = None;
    }

    pub fn say(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn schedule_once(&mut self, delay: Duration) {
        self.request = Some(ScheduleRequest::Start(Schedule::Once(delay)));
    }

    pub fn schedule_every(&mut self, period: Duration) {
        self.request = Some(ScheduleRequest::Start(Schedule::Every(period)));
    }

    pub fn cancel_schedule(&mut self) {
        self.request = Some(ScheduleRequest::Cancel);
    }

    /// Hand the pending timer request to the shell.
    pub fn take_request(&mut self) -> Option<ScheduleRequest> {
        self.request.take()
    }

    pub fn pending_request(&self) -> Option<ScheduleRequest> {
        self.request
    }
}
