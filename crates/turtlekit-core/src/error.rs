//! Error handling for TurtleKit
//!
//! Provides error types for every layer of the drawing engine:
//! - Parameter errors (rejected before a command queue is built)
//! - Command errors (a single command could not be applied)
//! - Render errors (the canvas surface refused a draw call)
//!
//! Command and render errors are never fatal: the scheduler reports them as a
//! skipped tick and moves on to the next command.

use thiserror::Error;

/// Parameter error type
///
/// Raised while validating the inputs of a drawing session. A session whose
/// parameters fail validation never builds a command queue.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A required parameter was not supplied (dialog cancelled)
    #[error("Missing required parameter: {name}")]
    Missing {
        /// The name of the missing parameter.
        name: String,
    },

    /// A parameter that must be strictly positive was not
    #[error("Parameter '{name}' must be positive, got {value}")]
    NonPositive {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// Polygon side count below the minimum
    #[error("Polygon needs at least {min} sides, got {sides}")]
    TooFewSides {
        /// The rejected side count.
        sides: u32,
        /// The minimum accepted side count.
        min: u32,
    },

    /// A parameter value is outside its accepted range
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..={max})")]
    OutOfRange {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A parameter is NaN or infinite
    #[error("Parameter '{name}' must be finite")]
    NonFinite {
        /// The parameter name.
        name: String,
    },
}

/// Command error type
///
/// Describes why a single queued command could not be applied to the cursor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    /// A command referenced a mark that was never recorded
    #[error("Unknown mark '{name}'")]
    UnknownMark {
        /// The unresolved mark name.
        name: String,
    },

    /// A command carried an argument the cursor cannot use
    #[error("Invalid argument for {command}: {reason}")]
    InvalidArgument {
        /// The command kind.
        command: String,
        /// What was wrong with the argument.
        reason: String,
    },
}

impl CommandError {
    /// Shorthand for [`CommandError::InvalidArgument`].
    pub fn invalid(command: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            command: command.to_string(),
            reason: reason.into(),
        }
    }
}

/// Render error type
///
/// Returned by renderers and surfaces when a draw call cannot be honoured.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The surface has no drawable area (zero-sized or detached)
    #[error("Surface unavailable ({width}x{height})")]
    SurfaceUnavailable {
        /// Surface width in pixels.
        width: f64,
        /// Surface height in pixels.
        height: f64,
    },

    /// The drawing backend rejected the call
    #[error("Render backend error: {reason}")]
    Backend {
        /// The reason reported by the backend.
        reason: String,
    },
}

/// Main error type for TurtleKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Command error
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Render error
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl Error {
    /// Check if this is a parameter error
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }

    /// Check if this is a render error
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::Render(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
