//! In-memory surface that records draw calls.

use super::Surface;
use turtlekit_core::{Color, Point, RenderError, TextAlign};

/// One screen-space primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    Dot {
        center: Point,
        diameter: f64,
        color: Color,
    },
    Text {
        anchor: Point,
        text: String,
        font_size: f64,
        align: TextAlign,
        color: Color,
    },
}

/// Surface that keeps every primitive in order. Used by headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            clears: 0,
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of times the surface has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn lines_with_color(&self, color: Color) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Line { color: c, .. } if *c == color))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    ) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color,
            width,
        });
        Ok(())
    }

    fn dot(&mut self, center: Point, diameter: f64, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Dot {
            center,
            diameter,
            color,
        });
        Ok(())
    }

    fn text(
        &mut self,
        anchor: Point,
        text: &str,
        font_size: f64,
        align: TextAlign,
        color: Color,
    ) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Text {
            anchor,
            text: text.to_string(),
            font_size,
            align,
            color,
        });
        Ok(())
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.calls.clear();
        self.clears += 1;
        Ok(())
    }
}
