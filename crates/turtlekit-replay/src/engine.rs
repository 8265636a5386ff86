//! Drawing engine
//!
//! Outward API used by a host UI: start, cancel and clear sessions, forward
//! gestures and resizes, and observe progress through [`ReplayEvent`]s.

use crate::driver::ReplayDriver;
use crate::events::{ReplayEvent, ReplayEventBus};
use crate::render::{CanvasRenderer, GestureTracker, Renderer, Surface, TouchEvent, ViewTransform};
use crate::scheduler::ReplayState;
use crate::session::{DrawingSession, SessionId, SessionRequest};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use turtlekit_core::{Color, Result};

/// Canvas size used for generation when the surface has not been laid out yet.
pub const FALLBACK_CANVAS: (f64, f64) = (800.0, 600.0);

pub struct DrawingEngine<S: Surface + 'static> {
    renderer: Rc<RefCell<CanvasRenderer<S>>>,
    events: ReplayEventBus,
    gestures: GestureTracker,
    background: Color,
    fallback_canvas: (f64, f64),
    driver: Option<ReplayDriver<CanvasRenderer<S>>>,
}

impl<S: Surface + 'static> DrawingEngine<S> {
    pub fn new(surface: S) -> Self {
        Self {
            renderer: Rc::new(RefCell::new(CanvasRenderer::new(surface))),
            events: ReplayEventBus::new(),
            gestures: GestureTracker::new(),
            background: Color::WHITE,
            fallback_canvas: FALLBACK_CANVAS,
            driver: None,
        }
    }

    /// Colour used by the erasing run of the construction.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_fallback_canvas(mut self, width: f64, height: f64) -> Self {
        self.fallback_canvas = (width, height);
        self
    }

    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.events = ReplayEventBus::with_capacity(capacity);
        self
    }

    /// Tear down any current session, generate a new construction and start
    /// replaying it. Must be called inside a [`tokio::task::LocalSet`].
    ///
    /// Invalid or missing parameters leave the engine idle.
    pub fn start_session(&mut self, request: SessionRequest) -> Result<SessionId> {
        self.teardown();

        let canvas = self.generation_canvas();
        let session = DrawingSession::prepare(&request, canvas, self.background)?;
        let id = session.id();

        if let Err(e) = self.renderer.borrow_mut().clear() {
            warn!("Failed to clear canvas for {}: {}", id, e);
        }

        let mut driver = ReplayDriver::new(session, Rc::clone(&self.renderer), self.events.clone());
        driver.start();
        self.driver = Some(driver);
        info!("{} started", id);
        Ok(id)
    }

    /// Stop the current replay. The drawing so far stays on the canvas.
    pub fn cancel_session(&mut self) {
        if let Some(driver) = self.driver.as_mut() {
            driver.cancel();
        }
    }

    /// Cancel, forget the queue and marks, and wipe the canvas.
    pub fn clear_canvas(&mut self) -> Result<()> {
        self.cancel_session();
        if let Some(driver) = self.driver.as_ref() {
            driver.session_mut().scheduler_mut().reset();
        }
        self.renderer.borrow_mut().clear()?;
        debug!("Canvas cleared");
        Ok(())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReplayEvent> {
        self.events.subscribe()
    }

    pub fn state(&self) -> ReplayState {
        self.driver
            .as_ref()
            .map_or(ReplayState::Idle, |driver| driver.state())
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.driver.as_ref().map(|driver| driver.id())
    }

    pub fn session(&self) -> Option<Ref<'_, DrawingSession>> {
        self.driver.as_ref().map(|driver| driver.session())
    }

    pub fn renderer(&self) -> Ref<'_, CanvasRenderer<S>> {
        self.renderer.borrow()
    }

    /// Do not hold across an await point while a replay is running.
    pub fn view_mut(&self) -> RefMut<'_, ViewTransform> {
        RefMut::map(self.renderer.borrow_mut(), |renderer| renderer.view_mut())
    }

    pub fn handle_touch(&mut self, event: TouchEvent) {
        let mut renderer = self.renderer.borrow_mut();
        self.gestures.handle(event, renderer.view_mut());
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        debug!("Surface resized to {}x{}", width, height);
        self.renderer.borrow_mut().resize(width, height);
    }

    /// Wait until the current replay is exhausted or cancelled.
    pub async fn wait_until_finished(&mut self) -> ReplayState {
        match self.driver.as_mut() {
            Some(driver) => driver.join().await,
            None => ReplayState::Idle,
        }
    }

    fn teardown(&mut self) {
        if let Some(mut driver) = self.driver.take() {
            driver.cancel();
            debug!("{} torn down", driver.id());
        }
    }

    fn generation_canvas(&self) -> (f64, f64) {
        let (width, height) = self.renderer.borrow().surface().size();
        if width > 0.0 && height > 0.0 {
            (width, height)
        } else {
            debug!(
                "Surface is {}x{}, generating for {}x{}",
                width, height, self.fallback_canvas.0, self.fallback_canvas.1
            );
            self.fallback_canvas
        }
    }
}
