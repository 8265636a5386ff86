//! # TurtleKit
//!
//! Procedural geometric construction replayed as a step-by-step turtle
//! animation: a base triangle, a circle, a vertical ladder of equally spaced
//! points and an inscribed regular polygon, drawn one command per timer tick.
//!
//! ## Architecture
//!
//! TurtleKit is organized as a workspace with multiple crates:
//!
//! 1. **turtlekit-core** - Points, colours, commands, cursor state, marks, errors
//! 2. **turtlekit-construction** - Pure geometry that emits the command queue
//! 3. **turtlekit-replay** - Scheduler, timer driver, view transform, surfaces
//! 4. **turtlekit-settings** - JSON/TOML configuration
//! 5. **turtlekit** - Headless runner that replays a session into an SVG file

pub use turtlekit_core::{
    normalize_degrees, Color, Command, CommandError, CommandQueue, CommandQueueBuilder,
    CursorState, Effect, Error, MarkRegistry, ParameterError, Point, RenderError, Result,
    TextAlign, PALETTE,
};

pub use turtlekit_construction::{
    generate, Construction, ConstructionGenerator, ConstructionParameters, InscribedPolygon,
    VerticalLadder,
};

pub use turtlekit_replay::{
    CanvasRenderer, DrawCall, DrawingEngine, DrawingSession, GestureTracker, RecordingSurface,
    Renderer, ReplayDriver, ReplayEvent, ReplayScheduler, ReplayState, ReplayStats, ReplayTiming,
    SessionId, SessionRequest, Surface, SvgSurface, TickOutcome, TouchEvent, ViewTransform,
};

pub use turtlekit_settings::{default_config_path, Config, SettingsError};

use anyhow::Context;
use std::path::PathBuf;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Result of one headless run.
#[derive(Debug, Clone)]
pub struct HeadlessSummary {
    pub session: SessionId,
    pub state: ReplayState,
    pub stats: ReplayStats,
    pub svg_path: PathBuf,
}

/// Session inputs taken from the configuration.
pub fn session_request(config: &Config) -> SessionRequest {
    SessionRequest::new(
        config.session.length,
        config.session.sides,
        config.session.speed,
    )
}

/// Replay one session onto an SVG surface and write the document.
///
/// Ticks are paced in real time by the configured speed. Must be awaited
/// inside a [`tokio::task::LocalSet`].
pub async fn run_headless(config: &Config) -> anyhow::Result<HeadlessSummary> {
    config.validate()?;

    let surface = SvgSurface::with_background(
        config.canvas.width,
        config.canvas.height,
        config.canvas.background,
    );
    let mut engine = DrawingEngine::new(surface)
        .with_background(config.canvas.background)
        .with_fallback_canvas(config.canvas.width, config.canvas.height);
    {
        let mut view = engine.view_mut();
        view.set_scale(config.view.scale);
        view.set_pan(config.view.pan_x, config.view.pan_y);
    }

    let mut events = engine.subscribe();
    let session = engine.start_session(session_request(config))?;

    let (state, stats) = loop {
        match events.recv().await {
            Ok(ReplayEvent::Finished {
                session: finished,
                state,
                stats,
            }) if finished == session => break (state, stats),
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::trace!("Event receiver lagged by {}", skipped);
            }
            Err(RecvError::Closed) => anyhow::bail!("replay event channel closed"),
        }
    };
    engine.wait_until_finished().await;

    if stats.command_errors > 0 || stats.render_errors > 0 {
        warn!(
            "{} skipped {} commands and {} draws",
            session, stats.command_errors, stats.render_errors
        );
    }

    let svg = engine.renderer().surface().to_svg_string();
    let svg_path = config.output.svg_path.clone();
    if let Some(parent) = svg_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&svg_path, svg)
        .with_context(|| format!("Failed to write {}", svg_path.display()))?;

    info!(
        "{} {}: {} ticks, {} drawn, written to {}",
        session,
        state,
        stats.ticks,
        stats.drawn,
        svg_path.display()
    );

    Ok(HeadlessSummary {
        session,
        state,
        stats,
        svg_path,
    })
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    Ok(())
}
