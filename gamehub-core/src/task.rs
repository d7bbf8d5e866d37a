//! The single cancellable timer a session may own.
//!
//! A task never touches game state. It only sends [`HubEvent::Timer`] back to
//! the shell, stamped with the session and ticket it was created for, and
//! checks its running flag before every send.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::session::{Schedule, SessionId};

/// Events flowing from background tasks to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubEvent {
    Timer { session: SessionId, ticket: u64 },
}

#[derive(Debug)]
pub struct ScheduledTask {
    schedule: Schedule,
    ticket: u64,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Spawn on the current tokio runtime. Outside a runtime the task is
    /// created already stopped and never fires.
    pub fn spawn(
        schedule: Schedule,
        session: SessionId,
        ticket: u64,
        events: mpsc::Sender<HubEvent>,
    ) -> Self {
        let running = Arc::new(AtomicBool::new(true));

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(rt) => {
                let flag = running.clone();
                Some(rt.spawn(run(schedule, session, ticket, flag, events)))
            }
            Err(_) => {
                tracing::warn!(%session, "no tokio runtime, timer disabled");
                running.store(false, Ordering::SeqCst);
                None
            }
        };

        tracing::debug!(%session, ticket, ?schedule, "timer scheduled");
        Self {
            schedule,
            ticket,
            running,
            handle,
        }
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the task. Safe to call any number of times.
    pub fn cancel(&mut self) {
        let was_running = self.running.swap(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        if was_running {
            tracing::debug!(ticket = self.ticket, "timer cancelled");
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run(
    schedule: Schedule,
    session: SessionId,
    ticket: u64,
    running: Arc<AtomicBool>,
    events: mpsc::Sender<HubEvent>,
) {
    let event = HubEvent::Timer { session, ticket };
    match schedule {
        Schedule::Once(delay) => {
            time::sleep(delay).await;
            // swap so a one-shot fires at most once even if cancel races it
            if running.swap(false, Ordering::SeqCst) {
                let _ = events.send(event).await;
            }
        }
        Schedule::Every(period) => {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                if events.send(event).await.is_err() {
                    running.store(false, Ordering::SeqCst);
                    break;
                }
            }
        }
    }
}

/// Holds the current session's task and hands out tickets.
///
/// Starting a new task always cancels the previous one first, so at most one
/// timer is live at a time.
#[derive(Debug)]
pub struct TaskSlot {
    events: mpsc::Sender<HubEvent>,
    next_ticket: u64,
    current: Option<ScheduledTask>,
}

impl TaskSlot {
    pub fn new(events: mpsc::Sender<HubEvent>) -> Self {
        Self {
            events,
            next_ticket: 1,
            current: None,
        }
    }

    pub fn start(&mut self, schedule: Schedule, session: SessionId) {
        self.cancel();
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.current = Some(ScheduledTask::spawn(
            schedule,
            session,
            ticket,
            self.events.clone(),
        ));
    }

    pub fn cancel(&mut self) {
        if let Some(mut task) = self.current.take() {
            task.cancel();
        }
    }

    pub fn current(&self) -> Option<&ScheduledTask> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Whether `event` belongs to the live task of `session`. A delivered
    /// one-shot clears the slot.
    pub fn accept(&mut self, event: HubEvent, session: SessionId) -> bool {
        let HubEvent::Timer {
            session: from,
            ticket,
        } = event;
        let Some(task) = &self.current else {
            return false;
        };
        if from != session || ticket != task.ticket() {
            return false;
        }
        if matches!(task.schedule(), Schedule::Once(_)) {
            self.current = None;
        }
        true
    }
}
