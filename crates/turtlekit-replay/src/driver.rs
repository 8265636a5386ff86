//! Timer-driven replay task.
//!
//! The driver runs on a single-threaded runtime: the tick loop is spawned
//! with [`tokio::task::spawn_local`], so [`ReplayDriver::start`] must be called
//! from inside a [`tokio::task::LocalSet`]. Each iteration runs one tick to
//! completion before awaiting the next delay, so aborting the task can only
//! ever drop a pending tick, never interrupt one.

use crate::events::{ReplayEvent, ReplayEventBus};
use crate::render::Renderer;
use crate::scheduler::ReplayState;
use crate::session::{DrawingSession, SessionId};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use tokio::task::{self, JoinHandle};
use tracing::{debug, info, warn};

pub struct ReplayDriver<R: Renderer + 'static> {
    session: Rc<RefCell<DrawingSession>>,
    renderer: Rc<RefCell<R>>,
    events: ReplayEventBus,
    handle: Option<JoinHandle<()>>,
}

impl<R: Renderer + 'static> ReplayDriver<R> {
    pub fn new(session: DrawingSession, renderer: Rc<RefCell<R>>, events: ReplayEventBus) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            renderer,
            events,
            handle: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.session.borrow().id()
    }

    pub fn session(&self) -> Ref<'_, DrawingSession> {
        self.session.borrow()
    }

    pub fn session_mut(&self) -> RefMut<'_, DrawingSession> {
        self.session.borrow_mut()
    }

    pub fn state(&self) -> ReplayState {
        self.session.borrow().state()
    }

    /// A tick task is scheduled and has not completed.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start ticking. A pending tick from an earlier start is dropped first,
    /// and the first tick runs immediately.
    pub fn start(&mut self) {
        self.abort_pending();

        let (id, commands, timing) = {
            let mut session = self.session.borrow_mut();
            session.scheduler_mut().start();
            (
                session.id(),
                session.scheduler().queue().len(),
                session.timing(),
            )
        };
        self.events.publish(ReplayEvent::Started {
            session: id,
            commands,
            tick_delay_ms: timing.tick_delay_ms,
        });

        self.handle = Some(task::spawn_local(run_ticks(
            Rc::clone(&self.session),
            Rc::clone(&self.renderer),
            self.events.clone(),
        )));
    }

    /// Drop the pending tick and mark the replay cancelled.
    pub fn cancel(&mut self) {
        self.abort_pending();

        let mut session = self.session.borrow_mut();
        if session.state() == ReplayState::Running {
            session.scheduler_mut().cancel();
            info!("{} cancelled", session.id());
            self.events.publish(ReplayEvent::Finished {
                session: session.id(),
                state: ReplayState::Cancelled,
                stats: session.scheduler().stats(),
            });
        }
    }

    /// Wait for the tick task to end and return the final state.
    pub async fn join(&mut self) -> ReplayState {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    warn!("Replay task failed: {}", e);
                }
            }
        }
        self.state()
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl<R: Renderer + 'static> Drop for ReplayDriver<R> {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

async fn run_ticks<R: Renderer>(
    session: Rc<RefCell<DrawingSession>>,
    renderer: Rc<RefCell<R>>,
    events: ReplayEventBus,
) {
    let (id, delay) = {
        let session = session.borrow();
        (session.id(), session.timing().tick_delay())
    };
    debug!("{} tick loop started, delay {:?}", id, delay);

    loop {
        let (outcome, state) = {
            let mut session = session.borrow_mut();
            let mut renderer = renderer.borrow_mut();
            let outcome = session.scheduler_mut().tick(&mut *renderer);
            (outcome, session.state())
        };

        if let Some(event) = ReplayEvent::from_outcome(id, &outcome) {
            events.publish(event);
        }

        match state {
            ReplayState::Running => {}
            ReplayState::Exhausted => {
                let stats = session.borrow().scheduler().stats();
                info!(
                    "{} finished: {} ticks, {} drawn, {} skipped",
                    id,
                    stats.ticks,
                    stats.drawn,
                    stats.command_errors + stats.render_errors
                );
                events.publish(ReplayEvent::Finished {
                    session: id,
                    state,
                    stats,
                });
                break;
            }
            ReplayState::Idle | ReplayState::Cancelled => break,
        }

        tokio::time::sleep(delay).await;
    }
}
