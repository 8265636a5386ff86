//! Replay scheduler
//!
//! Consumes a [`CommandQueue`] one command per tick. The scheduler itself is
//! synchronous; the async driver decides when ticks happen.
//!
//! ```text
//! Idle --start--> Running --last command--> Exhausted
//!                    |
//!                  cancel
//!                    v
//!                Cancelled
//! ```
//!
//! A command that fails (unknown mark, bad argument) or a draw call that fails
//! skips only the current tick. Replay always continues to the end.

use crate::render::Renderer;
use serde::Serialize;
use tracing::{debug, trace, warn};
use turtlekit_core::{CommandError, CommandQueue, CursorState, Effect, MarkRegistry, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplayState {
    Idle,
    Running,
    Exhausted,
    Cancelled,
}

impl ReplayState {
    /// Exhausted or cancelled.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReplayState::Exhausted | ReplayState::Cancelled)
    }
}

impl std::fmt::Display for ReplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReplayState::Idle => "idle",
            ReplayState::Running => "running",
            ReplayState::Exhausted => "exhausted",
            ReplayState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Why a tick produced no drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Command(CommandError),
    Render(RenderError),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Command(e) => write!(f, "{}", e),
            SkipReason::Render(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Command at `index` applied and its effect rendered
    Applied { index: usize, effect: Effect },
    /// Command at `index` consumed without drawing
    Skipped { index: usize, reason: SkipReason },
    /// Queue already consumed
    Exhausted,
    /// Scheduler is not running
    Inactive,
}

/// Counters for one replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplayStats {
    pub ticks: usize,
    pub applied: usize,
    pub drawn: usize,
    pub command_errors: usize,
    pub render_errors: usize,
}

#[derive(Debug, Clone)]
pub struct ReplayScheduler {
    queue: CommandQueue,
    index: usize,
    cursor: CursorState,
    marks: MarkRegistry,
    state: ReplayState,
    stats: ReplayStats,
}

impl ReplayScheduler {
    pub fn new(queue: CommandQueue) -> Self {
        Self {
            queue,
            index: 0,
            cursor: CursorState::default(),
            marks: MarkRegistry::new(),
            state: ReplayState::Idle,
            stats: ReplayStats::default(),
        }
    }

    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn marks(&self) -> &MarkRegistry {
        &self.marks
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn stats(&self) -> ReplayStats {
        self.stats
    }

    /// Index of the next command to apply.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.queue.len().saturating_sub(self.index)
    }

    /// Begin or resume ticking from the current position.
    ///
    /// Calling this while running is a no-op on the position.
    pub fn start(&mut self) {
        debug!(
            "Replay starting at {} of {} commands",
            self.index,
            self.queue.len()
        );
        self.state = ReplayState::Running;
    }

    /// Stop ticking. No effect unless running.
    pub fn cancel(&mut self) {
        if self.state == ReplayState::Running {
            debug!("Replay cancelled at {} of {}", self.index, self.queue.len());
            self.state = ReplayState::Cancelled;
        }
    }

    /// Drop the queue, marks and cursor and return to idle.
    pub fn reset(&mut self) {
        self.queue = CommandQueue::empty();
        self.index = 0;
        self.cursor = CursorState::default();
        self.marks.clear();
        self.state = ReplayState::Idle;
        self.stats = ReplayStats::default();
    }

    /// Consume one command.
    ///
    /// The cursor state change is applied even when drawing fails, so later
    /// commands see the correct position and marks.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> TickOutcome {
        if self.state != ReplayState::Running {
            return TickOutcome::Inactive;
        }

        let index = self.index;
        let Some(command) = self.queue.get(index) else {
            self.state = ReplayState::Exhausted;
            return TickOutcome::Exhausted;
        };

        self.index += 1;
        self.stats.ticks += 1;

        let outcome = match self.cursor.apply(command, &mut self.marks) {
            Ok(effect) => {
                self.stats.applied += 1;
                if effect.is_visible() {
                    match renderer.render(&effect) {
                        Ok(()) => {
                            self.stats.drawn += 1;
                            trace!("Tick {}: {}", index, command);
                            TickOutcome::Applied { index, effect }
                        }
                        Err(e) => {
                            debug!("Tick {} draw skipped: {}", index, e);
                            self.stats.render_errors += 1;
                            TickOutcome::Skipped {
                                index,
                                reason: SkipReason::Render(e),
                            }
                        }
                    }
                } else {
                    trace!("Tick {}: {}", index, command);
                    TickOutcome::Applied { index, effect }
                }
            }
            Err(e) => {
                warn!("Tick {} skipped: {}", index, e);
                self.stats.command_errors += 1;
                TickOutcome::Skipped {
                    index,
                    reason: SkipReason::Command(e),
                }
            }
        };

        if self.index >= self.queue.len() {
            debug!("Replay exhausted after {} ticks", self.stats.ticks);
            self.state = ReplayState::Exhausted;
        }
        outcome
    }

    /// Tick until no longer running, without any delay between ticks.
    pub fn run_to_end<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> ReplayStats {
        if self.state == ReplayState::Idle {
            self.start();
        }
        while self.state == ReplayState::Running {
            self.tick(renderer);
        }
        self.stats
    }
}
