//! # TurtleKit Core
//!
//! Core types shared by the construction generator and the replay engine.
//! The [`CommandQueue`] is the only data contract between the two: the
//! generator appends to it, the scheduler reads from it.

pub mod color;
pub mod command;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod marks;

pub use color::{Color, PALETTE};
pub use command::{Command, CommandQueue, CommandQueueBuilder};
pub use cursor::{CursorState, Effect, TextAlign};
pub use error::{CommandError, Error, ParameterError, RenderError, Result};
pub use geometry::{normalize_degrees, Point};
pub use marks::MarkRegistry;
