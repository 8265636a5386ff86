//! Cursor (pen) state and command application
//!
//! [`CursorState::apply`] is the single place where a [`Command`] changes
//! drawing state. It is used both by the replay scheduler and by the
//! generator's shadow cursor, so marks predicted at generation time match the
//! marks recorded during replay.

use crate::color::Color;
use crate::command::Command;
use crate::constants::DEFAULT_PEN_WIDTH;
use crate::error::CommandError;
use crate::geometry::{normalize_degrees, Point};
use crate::marks::MarkRegistry;
use serde::{Deserialize, Serialize};

/// Horizontal anchoring of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Text starts at the anchor point
    Left,
    /// Text is centered on the anchor point
    Center,
}

/// Visible outcome of applying one command.
///
/// `Moved` and `Stroked` are distinct so a renderer never draws a pen-up move.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// State changed, nothing to draw
    None,
    /// Cursor moved with the pen up
    Moved { from: Point, to: Point },
    /// Cursor moved with the pen down
    Stroked {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    /// A dot at a point
    Dot { at: Point, size: f64, color: Color },
    /// A single-line text label
    Text {
        at: Point,
        text: String,
        font_size: f64,
        align: TextAlign,
        color: Color,
    },
}

impl Effect {
    /// Whether the effect needs a renderer call.
    pub fn is_visible(&self) -> bool {
        matches!(
            self,
            Effect::Stroked { .. } | Effect::Dot { .. } | Effect::Text { .. }
        )
    }
}

/// The turtle: position, heading, pen flag and stroke style.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorState {
    pub position: Point,
    /// Degrees, 0 = +X, counter-clockwise. Accumulates without wraparound.
    pub heading: f64,
    pub pen_down: bool,
    pub color: Color,
    pub width: f64,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            heading: 0.0,
            pen_down: true,
            color: Color::BLACK,
            width: DEFAULT_PEN_WIDTH,
        }
    }
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading folded into `[0, 360)`.
    pub fn heading_normalized(&self) -> f64 {
        normalize_degrees(self.heading)
    }

    /// Apply `command`, updating the cursor and `marks`.
    ///
    /// Arguments are validated before any state changes, so an `Err` leaves
    /// both the cursor and the registry untouched.
    pub fn apply(
        &mut self,
        command: &Command,
        marks: &mut MarkRegistry,
    ) -> Result<Effect, CommandError> {
        match command {
            Command::MoveTo { point } => {
                require_point(command, *point)?;
                Ok(self.travel_to(*point))
            }
            Command::PenUp => {
                self.pen_down = false;
                Ok(Effect::None)
            }
            Command::PenDown => {
                self.pen_down = true;
                Ok(Effect::None)
            }
            Command::Forward { distance } => {
                require_finite(command, "distance", *distance)?;
                let target = self.position.polar(self.heading_normalized(), *distance);
                Ok(self.travel_to(target))
            }
            Command::TurnLeft { degrees } => {
                require_finite(command, "degrees", *degrees)?;
                self.heading += degrees;
                Ok(Effect::None)
            }
            Command::SetHeading { degrees } => {
                require_finite(command, "degrees", *degrees)?;
                self.heading = *degrees;
                Ok(Effect::None)
            }
            Command::SetColor { color } => {
                self.color = *color;
                Ok(Effect::None)
            }
            Command::SetWidth { width } => {
                require_positive(command, "width", *width)?;
                self.width = *width;
                Ok(Effect::None)
            }
            Command::RecordMark { name } => {
                marks.record(name.as_str(), self.position);
                Ok(Effect::None)
            }
            Command::GotoMark { name } => {
                let target = lookup(marks, name)?;
                Ok(self.travel_to(target))
            }
            Command::SetMark { name, point } => {
                require_point(command, *point)?;
                marks.record(name.as_str(), *point);
                Ok(Effect::None)
            }
            Command::DrawDot { size, color } => {
                require_positive(command, "size", *size)?;
                Ok(Effect::Dot {
                    at: self.position,
                    size: *size,
                    color: *color,
                })
            }
            Command::LabelAtMark {
                name,
                offset_x,
                offset_y,
                font_size,
            } => {
                require_finite(command, "offset_x", *offset_x)?;
                require_finite(command, "offset_y", *offset_y)?;
                require_positive(command, "font_size", *font_size)?;
                let anchor = lookup(marks, name)?.offset(*offset_x, *offset_y);
                self.pen_down = false;
                self.position = anchor;
                Ok(Effect::Text {
                    at: anchor,
                    text: name.clone(),
                    font_size: *font_size,
                    align: TextAlign::Left,
                    color: self.color,
                })
            }
            Command::DrawText { text, font_size } => {
                require_positive(command, "font_size", *font_size)?;
                self.pen_down = false;
                Ok(Effect::Text {
                    at: self.position,
                    text: text.clone(),
                    font_size: *font_size,
                    align: TextAlign::Center,
                    color: self.color,
                })
            }
        }
    }

    fn travel_to(&mut self, target: Point) -> Effect {
        let from = self.position;
        self.position = target;
        if self.pen_down {
            Effect::Stroked {
                from,
                to: target,
                color: self.color,
                width: self.width,
            }
        } else {
            Effect::Moved { from, to: target }
        }
    }
}

fn lookup(marks: &MarkRegistry, name: &str) -> Result<Point, CommandError> {
    marks.get(name).ok_or_else(|| CommandError::UnknownMark {
        name: name.to_string(),
    })
}

fn require_finite(command: &Command, field: &str, value: f64) -> Result<(), CommandError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CommandError::invalid(
            command.kind(),
            format!("{} must be finite, got {}", field, value),
        ))
    }
}

fn require_positive(command: &Command, field: &str, value: f64) -> Result<(), CommandError> {
    require_finite(command, field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(CommandError::invalid(
            command.kind(),
            format!("{} must be positive, got {}", field, value),
        ))
    }
}

fn require_point(command: &Command, point: Point) -> Result<(), CommandError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(CommandError::invalid(
            command.kind(),
            format!("point {} is not finite", point),
        ))
    }
}
