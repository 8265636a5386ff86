//! Drawing command types and the command queue
//!
//! A construction is expressed as a totally ordered list of primitive
//! [`Command`]s. The list is assembled with a [`CommandQueueBuilder`] and then
//! frozen into a [`CommandQueue`], which is read-only for the rest of its life.

use crate::color::Color;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// A primitive drawing operation applied to the cursor by the replay scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Move to an absolute point, drawing if the pen is down
    MoveTo { point: Point },
    /// Lift the pen
    PenUp,
    /// Lower the pen
    PenDown,
    /// Advance along the current heading
    Forward { distance: f64 },
    /// Rotate counter-clockwise; heading accumulates without wraparound
    TurnLeft { degrees: f64 },
    /// Replace the heading
    SetHeading { degrees: f64 },
    /// Change the stroke color
    SetColor { color: Color },
    /// Change the stroke width
    SetWidth { width: f64 },
    /// Capture the cursor position under `name`
    RecordMark { name: String },
    /// Move to a recorded mark, drawing if the pen is down
    GotoMark { name: String },
    /// Record `point` under `name` without touching the cursor
    SetMark { name: String, point: Point },
    /// Dot of `size` pixels diameter at the cursor
    DrawDot { size: f64, color: Color },
    /// Write the mark's name at the mark position plus an offset
    LabelAtMark {
        name: String,
        offset_x: f64,
        offset_y: f64,
        font_size: f64,
    },
    /// Write centered text at the cursor
    DrawText { text: String, font_size: f64 },
}

impl Command {
    pub fn move_to(point: impl Into<Point>) -> Self {
        Self::MoveTo {
            point: point.into(),
        }
    }

    pub fn forward(distance: f64) -> Self {
        Self::Forward { distance }
    }

    pub fn turn_left(degrees: f64) -> Self {
        Self::TurnLeft { degrees }
    }

    pub fn set_heading(degrees: f64) -> Self {
        Self::SetHeading { degrees }
    }

    pub fn set_color(color: Color) -> Self {
        Self::SetColor { color }
    }

    pub fn set_width(width: f64) -> Self {
        Self::SetWidth { width }
    }

    pub fn record_mark(name: impl Into<String>) -> Self {
        Self::RecordMark { name: name.into() }
    }

    pub fn goto_mark(name: impl Into<String>) -> Self {
        Self::GotoMark { name: name.into() }
    }

    pub fn set_mark(name: impl Into<String>, point: impl Into<Point>) -> Self {
        Self::SetMark {
            name: name.into(),
            point: point.into(),
        }
    }

    pub fn dot(size: f64, color: Color) -> Self {
        Self::DrawDot { size, color }
    }

    pub fn label_at_mark(
        name: impl Into<String>,
        offset_x: f64,
        offset_y: f64,
        font_size: f64,
    ) -> Self {
        Self::LabelAtMark {
            name: name.into(),
            offset_x,
            offset_y,
            font_size,
        }
    }

    pub fn text(text: impl Into<String>, font_size: f64) -> Self {
        Self::DrawText {
            text: text.into(),
            font_size,
        }
    }

    /// Short name of the variant, used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MoveTo { .. } => "MoveTo",
            Self::PenUp => "PenUp",
            Self::PenDown => "PenDown",
            Self::Forward { .. } => "Forward",
            Self::TurnLeft { .. } => "TurnLeft",
            Self::SetHeading { .. } => "SetHeading",
            Self::SetColor { .. } => "SetColor",
            Self::SetWidth { .. } => "SetWidth",
            Self::RecordMark { .. } => "RecordMark",
            Self::GotoMark { .. } => "GotoMark",
            Self::SetMark { .. } => "SetMark",
            Self::DrawDot { .. } => "DrawDot",
            Self::LabelAtMark { .. } => "LabelAtMark",
            Self::DrawText { .. } => "DrawText",
        }
    }

    /// Name of the mark this command reads, if any.
    pub fn referenced_mark(&self) -> Option<&str> {
        match self {
            Self::GotoMark { name } | Self::LabelAtMark { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo { point } => write!(f, "MoveTo{}", point),
            Self::PenUp => write!(f, "PenUp"),
            Self::PenDown => write!(f, "PenDown"),
            Self::Forward { distance } => write!(f, "Forward({:.3})", distance),
            Self::TurnLeft { degrees } => write!(f, "TurnLeft({:.3})", degrees),
            Self::SetHeading { degrees } => write!(f, "SetHeading({:.3})", degrees),
            Self::SetColor { color } => write!(f, "SetColor({})", color),
            Self::SetWidth { width } => write!(f, "SetWidth({})", width),
            Self::RecordMark { name } => write!(f, "RecordMark({})", name),
            Self::GotoMark { name } => write!(f, "GotoMark({})", name),
            Self::SetMark { name, point } => write!(f, "SetMark({}, {})", name, point),
            Self::DrawDot { size, color } => write!(f, "DrawDot({}, {})", size, color),
            Self::LabelAtMark {
                name,
                offset_x,
                offset_y,
                font_size,
            } => write!(
                f,
                "LabelAtMark({}, {}, {}, {})",
                name, offset_x, offset_y, font_size
            ),
            Self::DrawText { text, font_size } => write!(f, "DrawText({:?}, {})", text, font_size),
        }
    }
}

/// Append-only accumulator used while a construction is generated.
#[derive(Debug, Default)]
pub struct CommandQueueBuilder {
    commands: Vec<Command>,
}

impl CommandQueueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn extend<I: IntoIterator<Item = Command>>(&mut self, commands: I) -> &mut Self {
        self.commands.extend(commands);
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Freeze the accumulated commands.
    pub fn build(self) -> CommandQueue {
        CommandQueue {
            commands: self.commands.into(),
        }
    }
}

/// Immutable, cheaply clonable sequence of commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandQueue {
    commands: Arc<[Command]>,
}

impl CommandQueue {
    /// An empty queue.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }
}

impl From<Vec<Command>> for CommandQueue {
    fn from(commands: Vec<Command>) -> Self {
        Self {
            commands: commands.into(),
        }
    }
}

impl FromIterator<Command> for CommandQueue {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl Index<usize> for CommandQueue {
    type Output = Command;

    fn index(&self, index: usize) -> &Command {
        &self.commands[index]
    }
}

impl<'a> IntoIterator for &'a CommandQueue {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
