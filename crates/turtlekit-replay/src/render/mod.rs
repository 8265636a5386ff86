//! Rendering layers
//!
//! - [`Renderer`]: world-space draw calls issued by the scheduler
//! - [`Surface`]: screen-space primitives of the external canvas
//! - [`CanvasRenderer`]: projects one onto the other through a [`ViewTransform`]

pub mod canvas;
pub mod gesture;
pub mod recording;
pub mod svg;
pub mod view;

pub use canvas::CanvasRenderer;
pub use gesture::{GestureTracker, TouchEvent};
pub use recording::{DrawCall, RecordingSurface};
pub use svg::SvgSurface;
pub use view::ViewTransform;

use turtlekit_core::{Color, Effect, Point, RenderError, TextAlign};

/// World-space drawing interface used by the replay scheduler.
pub trait Renderer {
    fn draw_segment(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    ) -> Result<(), RenderError>;

    /// `size` is the dot diameter in pixels.
    fn draw_dot(&mut self, at: Point, size: f64, color: Color) -> Result<(), RenderError>;

    fn draw_text(
        &mut self,
        at: Point,
        text: &str,
        font_size: f64,
        align: TextAlign,
        color: Color,
    ) -> Result<(), RenderError>;

    fn clear(&mut self) -> Result<(), RenderError>;

    /// Dispatch a cursor effect. Pen-up moves and state-only effects draw nothing.
    fn render(&mut self, effect: &Effect) -> Result<(), RenderError> {
        match effect {
            Effect::None | Effect::Moved { .. } => Ok(()),
            Effect::Stroked {
                from,
                to,
                color,
                width,
            } => self.draw_segment(*from, *to, *color, *width),
            Effect::Dot { at, size, color } => self.draw_dot(*at, *size, *color),
            Effect::Text {
                at,
                text,
                font_size,
                align,
                color,
            } => self.draw_text(*at, text, *font_size, *align, *color),
        }
    }
}

/// Screen-space canvas supplied by the host.
///
/// Coordinates are pixels with the origin at the bottom-left and Y pointing up.
pub trait Surface {
    /// Current `(width, height)` in pixels.
    fn size(&self) -> (f64, f64);

    /// Host reported a new size.
    fn resize(&mut self, width: f64, height: f64);

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64)
        -> Result<(), RenderError>;

    fn dot(&mut self, center: Point, diameter: f64, color: Color) -> Result<(), RenderError>;

    fn text(
        &mut self,
        anchor: Point,
        text: &str,
        font_size: f64,
        align: TextAlign,
        color: Color,
    ) -> Result<(), RenderError>;

    fn clear(&mut self) -> Result<(), RenderError>;
}
