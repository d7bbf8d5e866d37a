//! The hub shell: one active session at a time, explicit teardown, and the
//! ledger updates that follow from play.

use gamehub_ledger::{Ledger, LedgerView, Theme};
use gamehub_rules::Direction;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::config::HubConfig;
use crate::engine::{GameEngine, GameMode, GameView, Input};
use crate::error::{HubError, Result};
use crate::registry::{GameDescriptor, Registry};
use crate::session::{Outcome, ScheduleRequest, SessionContext, SessionId};
use crate::task::{HubEvent, TaskSlot};

const EVENT_BUFFER: usize = 64;

/// Snapshot of the running game for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameFrame {
    pub id: String,
    pub title: String,
    pub session: SessionId,
    pub mode: GameMode,
    pub modes: Vec<GameMode>,
    pub score: u64,
    pub best: Option<u64>,
    pub favorite: bool,
    pub outcome: Option<Outcome>,
    pub message: Option<String>,
    pub view: GameView,
}

/// Everything a surface needs to draw the hub.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub theme: Theme,
    pub ledger: LedgerView,
    /// `None` while the menu is showing.
    pub game: Option<GameFrame>,
}

/// Receives a frame after every state change.
pub trait RenderSurface: Send {
    fn present(&mut self, frame: &Frame);
}

struct ActiveGame {
    descriptor: GameDescriptor,
    engine: Box<dyn GameEngine>,
    ctx: SessionContext,
    /// The current round's outcome has already been written to the ledger.
    settled: bool,
}

pub struct HubShell {
    registry: Registry,
    ledger: Ledger,
    config: HubConfig,
    timers: TaskSlot,
    active: Option<ActiveGame>,
    last_session: SessionId,
    seed: Option<u64>,
    surfaces: Vec<Box<dyn RenderSurface>>,
}

impl std::fmt::Debug for HubShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubShell")
            .field("active", &self.active_game_id())
            .field("session", &self.last_session)
            .field("ledger", &self.ledger)
            .finish_non_exhaustive()
    }
}

impl HubShell {
    /// Build the shell. Timer events arrive on the returned receiver and must
    /// be fed back through [`HubShell::handle_event`].
    pub fn new(
        registry: Registry,
        ledger: Ledger,
        config: HubConfig,
    ) -> (Self, mpsc::Receiver<HubEvent>) {
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let shell = Self {
            registry,
            ledger,
            config,
            timers: TaskSlot::new(tx),
            active: None,
            last_session: SessionId::new(0),
            seed: None,
            surfaces: Vec::new(),
        };
        (shell, rx)
    }

    /// Derive every session's RNG from `seed` instead of OS entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn add_surface(&mut self, surface: Box<dyn RenderSurface>) {
        self.surfaces.push(surface);
    }

    // ────────────────────────────────────────────────────────────────
    // Accessors
    // ────────────────────────────────────────────────────────────────

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    pub fn active_game_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.descriptor.id.as_str())
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.active.as_ref().map(|a| a.ctx.id())
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.active.as_ref().map(|a| a.ctx.mode())
    }

    pub fn score(&self) -> u64 {
        self.active.as_ref().map_or(0, |a| a.ctx.score())
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.active.as_ref().and_then(|a| a.ctx.outcome())
    }

    pub fn message(&self) -> Option<&str> {
        self.active.as_ref().and_then(|a| a.ctx.message())
    }

    pub fn timer_active(&self) -> bool {
        self.timers.is_active()
    }

    // ────────────────────────────────────────────────────────────────
    // Lifecycle
    // ────────────────────────────────────────────────────────────────

    /// Tear down whatever is running and start `id` in its default mode.
    pub fn start_game(&mut self, id: &str) -> Result<()> {
        let descriptor = self.registry.get(id)?.clone();
        let mode = descriptor.default_mode();

        if let Err(e) = self.ledger.record_played(&descriptor.id) {
            tracing::warn!(game = %descriptor.id, error = %e, "could not update recent games");
        }
        self.launch(descriptor, mode);
        Ok(())
    }

    /// Restart the current game in `mode`.
    pub fn set_mode(&mut self, mode: GameMode) -> Result<()> {
        let descriptor = match &self.active {
            Some(active) => active.descriptor.clone(),
            None => return Err(HubError::NoActiveGame),
        };
        if !descriptor.supports(mode) {
            return Err(HubError::ModeNotAvailable {
                game: descriptor.id,
                mode,
            });
        }
        self.launch(descriptor, mode);
        Ok(())
    }

    /// Leave the current game. Safe to call with nothing running.
    pub fn show_menu(&mut self) {
        self.end_session();
        self.present();
    }

    fn launch(&mut self, descriptor: GameDescriptor, mode: GameMode) {
        self.end_session();

        self.last_session = self.last_session.next();
        let session = self.last_session;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ session.get()),
            None => StdRng::from_entropy(),
        };

        let mut ctx = SessionContext::new(session, descriptor.id.clone(), mode, rng);
        let mut engine = descriptor.build(&self.config);
        engine.start(&mut ctx);
        tracing::info!(game = %descriptor.id, %session, %mode, "game started");

        self.active = Some(ActiveGame {
            descriptor,
            engine,
            ctx,
            settled: false,
        });
        self.after_engine_call();
        self.present();
    }

    /// Cancel the timer, tear the engine down and bank the score.
    fn end_session(&mut self) {
        self.timers.cancel();
        let Some(mut active) = self.active.take() else {
            return;
        };
        active.engine.teardown();
        let score = active.ctx.score();
        tracing::info!(
            game = %active.descriptor.id,
            session = %active.ctx.id(),
            score,
            "game torn down"
        );
        self.bank_score(&active.descriptor.id, score);
    }

    fn bank_score(&mut self, id: &str, score: u64) {
        match self.ledger.record_score(id, score) {
            Ok(true) => tracing::info!(game = %id, score, "new high score"),
            Ok(false) => {}
            Err(e) => tracing::warn!(game = %id, error = %e, "could not record score"),
        }
    }

    // ────────────────────────────────────────────────────────────────
    // Input routing
    // ────────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, input: Input) -> Result<()> {
        let active = self.active.as_mut().ok_or(HubError::NoActiveGame)?;
        active.engine.handle_input(input, &mut active.ctx);
        self.after_engine_call();
        self.present();
        Ok(())
    }

    /// Route a raw key name. Escape leaves the game; arrows and WASD go to
    /// the engine as directions. Returns whether the key was routed, not
    /// whether the engine acted on it.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.active.is_none() {
            return false;
        }
        if matches!(key.to_ascii_lowercase().as_str(), "escape" | "esc") {
            self.show_menu();
            return true;
        }
        let Some(dir) = Direction::from_key(key) else {
            return false;
        };
        self.handle_input(Input::Direction(dir)).is_ok()
    }

    /// Deliver a timer event. Events from a torn-down session or a replaced
    /// task are dropped; returns whether the engine saw the event.
    pub fn handle_event(&mut self, event: HubEvent) -> bool {
        let Some(active) = self.active.as_mut() else {
            tracing::debug!(?event, "timer event with no game running, dropped");
            return false;
        };
        if !self.timers.accept(event, active.ctx.id()) {
            tracing::debug!(?event, current = %active.ctx.id(), "stale timer event dropped");
            return false;
        }
        active.engine.on_timer(&mut active.ctx);
        self.after_engine_call();
        self.present();
        true
    }

    /// Apply the engine's timer request and settle a fresh outcome.
    fn after_engine_call(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let session = active.ctx.id();
        let retired = active
            .ctx
            .take_retired_score()
            .map(|score| (active.descriptor.id.clone(), score));
        match active.ctx.take_request() {
            Some(ScheduleRequest::Start(schedule)) => self.timers.start(schedule, session),
            Some(ScheduleRequest::Cancel) => self.timers.cancel(),
            None => {}
        }

        match active.ctx.outcome() {
            Some(outcome) if !active.settled => {
                active.settled = true;
                let id = active.descriptor.id.clone();
                let score = active.ctx.score();
                tracing::info!(game = %id, %session, ?outcome, score, "round over");
                self.bank_score(&id, score);
            }
            Some(_) => {}
            None => active.settled = false,
        }

        if let Some((id, score)) = retired {
            self.bank_score(&id, score);
        }
    }

    // ────────────────────────────────────────────────────────────────
    // Ledger
    // ────────────────────────────────────────────────────────────────

    /// Flip a game in or out of favorites. Returns the new membership.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        self.registry.get(id)?;
        let now = match self.ledger.toggle_favorite(id) {
            Ok(now) => now,
            Err(e) => {
                tracing::warn!(game = %id, error = %e, "could not save favorites");
                self.ledger.is_favorite(id)
            }
        };
        self.present();
        Ok(now)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = match self.ledger.toggle_theme() {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!(error = %e, "could not save theme");
                self.ledger.theme()
            }
        };
        self.present();
        theme
    }

    // ────────────────────────────────────────────────────────────────
    // Rendering
    // ────────────────────────────────────────────────────────────────

    pub fn frame(&self) -> Frame {
        let game = self.active.as_ref().map(|a| GameFrame {
            id: a.descriptor.id.clone(),
            title: a.descriptor.title.clone(),
            session: a.ctx.id(),
            mode: a.ctx.mode(),
            modes: a.descriptor.modes.clone(),
            score: a.ctx.score(),
            best: self.ledger.best_score(&a.descriptor.id),
            favorite: self.ledger.is_favorite(&a.descriptor.id),
            outcome: a.ctx.outcome(),
            message: a.ctx.message().map(str::to_string),
            view: a.engine.render_state(),
        });
        Frame {
            theme: self.ledger.theme(),
            ledger: self.ledger.view(),
            game,
        }
    }

    fn present(&mut self) {
        if self.surfaces.is_empty() {
            return;
        }
        let frame = self.frame();
        for surface in &mut self.surfaces {
            surface.present(&frame);
        }
    }
}

impl Drop for HubShell {
    fn drop(&mut self) {
        self.end_session();
        if let Err(e) = self.ledger.close() {
            tracing::warn!(error = %e, "could not close the ledger store");
        }
    }
}
