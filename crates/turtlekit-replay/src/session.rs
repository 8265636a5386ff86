//! Drawing sessions
//!
//! A session bundles one generated construction with the scheduler that
//! replays it. Every new session starts from a fresh cursor and an empty
//! mark registry.

use crate::scheduler::{ReplayScheduler, ReplayState};
use crate::timing::ReplayTiming;
use serde::{Deserialize, Serialize};
use tracing::info;
use turtlekit_construction::{Construction, ConstructionGenerator, ConstructionParameters};
use turtlekit_core::constants::DEFAULT_SPEED;
use turtlekit_core::{Color, ParameterError};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", &self.0.to_string()[..8])
    }
}

/// User input for a new session. `None` means the prompt was cancelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub length: Option<f64>,
    pub sides: Option<u32>,
    pub speed: Option<u8>,
}

impl SessionRequest {
    pub fn new(length: f64, sides: u32, speed: u8) -> Self {
        Self {
            length: Some(length),
            sides: Some(sides),
            speed: Some(speed),
        }
    }

    /// Require length and sides; a missing speed falls back to the default.
    pub fn resolve(&self) -> Result<(f64, u32, ReplayTiming), ParameterError> {
        let length = self.length.ok_or_else(|| ParameterError::Missing {
            name: "length".to_string(),
        })?;
        let sides = self.sides.ok_or_else(|| ParameterError::Missing {
            name: "sides".to_string(),
        })?;
        let timing = ReplayTiming::from_speed(self.speed.unwrap_or(DEFAULT_SPEED))?;
        Ok((length, sides, timing))
    }
}

#[derive(Debug, Clone)]
pub struct DrawingSession {
    id: SessionId,
    timing: ReplayTiming,
    construction: Construction,
    scheduler: ReplayScheduler,
}

impl DrawingSession {
    pub fn new(construction: Construction, timing: ReplayTiming) -> Self {
        let scheduler = ReplayScheduler::new(construction.queue.clone());
        Self {
            id: SessionId::new(),
            timing,
            construction,
            scheduler,
        }
    }

    /// Validate `request` and generate the construction for a canvas.
    ///
    /// No queue is built when any parameter is missing or invalid.
    pub fn prepare(
        request: &SessionRequest,
        canvas: (f64, f64),
        background: Color,
    ) -> Result<Self, ParameterError> {
        let (length, sides, timing) = request.resolve()?;
        let params = ConstructionParameters::new(length, sides, canvas.0, canvas.1)
            .with_step_scale(timing.step_scale)
            .with_background(background);
        let construction = ConstructionGenerator::new(params).generate()?;
        let session = Self::new(construction, timing);
        info!(
            "{} prepared: length {}, {} sides, {} commands, {}ms per tick",
            session.id,
            length,
            sides,
            session.construction.queue.len(),
            timing.tick_delay_ms
        );
        Ok(session)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn timing(&self) -> ReplayTiming {
        self.timing
    }

    pub fn construction(&self) -> &Construction {
        &self.construction
    }

    pub fn scheduler(&self) -> &ReplayScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut ReplayScheduler {
        &mut self.scheduler
    }

    pub fn state(&self) -> ReplayState {
        self.scheduler.state()
    }
}
