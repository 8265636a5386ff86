//! Replay progress events.
//!
//! Events are fanned out on a tokio broadcast channel. A slow receiver may
//! see `RecvError::Lagged` during long replays; `Finished` is always the last
//! event of a session.

use crate::scheduler::{ReplayState, ReplayStats, TickOutcome};
use crate::session::SessionId;
use serde::Serialize;
use tokio::sync::broadcast;

/// Default broadcast capacity.
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// Per-tick status without the full effect payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TickStatus {
    Applied { visible: bool },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEvent {
    Started {
        session: SessionId,
        commands: usize,
        tick_delay_ms: u64,
    },
    Tick {
        session: SessionId,
        index: usize,
        status: TickStatus,
    },
    Finished {
        session: SessionId,
        state: ReplayState,
        stats: ReplayStats,
    },
}

impl ReplayEvent {
    pub fn session(&self) -> SessionId {
        match self {
            ReplayEvent::Started { session, .. }
            | ReplayEvent::Tick { session, .. }
            | ReplayEvent::Finished { session, .. } => *session,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, ReplayEvent::Finished { .. })
    }

    /// Tick event for `outcome`, or `None` when nothing was consumed.
    pub fn from_outcome(session: SessionId, outcome: &TickOutcome) -> Option<Self> {
        let (index, status) = match outcome {
            TickOutcome::Applied { index, effect } => (
                *index,
                TickStatus::Applied {
                    visible: effect.is_visible(),
                },
            ),
            TickOutcome::Skipped { index, reason } => (
                *index,
                TickStatus::Skipped {
                    reason: reason.to_string(),
                },
            ),
            TickOutcome::Exhausted | TickOutcome::Inactive => return None,
        };
        Some(ReplayEvent::Tick {
            session,
            index,
            status,
        })
    }
}

/// Broadcast sender shared by the engine and its drivers.
#[derive(Debug, Clone)]
pub struct ReplayEventBus {
    sender: broadcast::Sender<ReplayEvent>,
}

impl ReplayEventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish to current receivers. Returns how many received it.
    pub fn publish(&self, event: ReplayEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReplayEvent> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ReplayEventBus {
    fn default() -> Self {
        Self::new()
    }
}
