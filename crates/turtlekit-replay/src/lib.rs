//! # TurtleKit Replay
//!
//! Animates a generated command queue one command per timer tick.
//!
//! - [`ReplayScheduler`]: synchronous state machine over the queue
//! - [`ReplayDriver`]: `spawn_local` task that paces the scheduler
//! - [`DrawingEngine`]: session lifecycle, gestures and events for a host UI
//! - [`render`]: world-to-screen projection and drawing surfaces

pub mod driver;
pub mod engine;
pub mod events;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod timing;

pub use driver::ReplayDriver;
pub use engine::{DrawingEngine, FALLBACK_CANVAS};
pub use events::{ReplayEvent, ReplayEventBus, TickStatus, DEFAULT_EVENT_CAPACITY};
pub use render::{
    CanvasRenderer, DrawCall, GestureTracker, RecordingSurface, Renderer, Surface, SvgSurface,
    TouchEvent, ViewTransform,
};
pub use scheduler::{ReplayScheduler, ReplayState, ReplayStats, SkipReason, TickOutcome};
pub use session::{DrawingSession, SessionId, SessionRequest};
pub use timing::ReplayTiming;
