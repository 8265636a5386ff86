//! World-to-surface renderer.

use super::view::ViewTransform;
use super::{Renderer, Surface};
use turtlekit_core::{Color, Point, RenderError, TextAlign};

/// Projects world-space draw calls onto a [`Surface`].
///
/// The view centre follows the surface size on every call, so a resized
/// canvas keeps the world origin in the middle.
#[derive(Debug)]
pub struct CanvasRenderer<S: Surface> {
    surface: S,
    view: ViewTransform,
}

impl<S: Surface> CanvasRenderer<S> {
    pub fn new(surface: S) -> Self {
        let (width, height) = surface.size();
        Self {
            surface,
            view: ViewTransform::new(width, height),
        }
    }

    pub fn with_view(surface: S, view: ViewTransform) -> Self {
        let mut renderer = Self { surface, view };
        renderer.sync_center();
        renderer
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
        self.sync_center();
    }

    fn sync_center(&mut self) {
        let (width, height) = self.surface.size();
        self.view.recenter(width, height);
    }

    /// Fails when the surface has no drawable area.
    fn prepare(&mut self) -> Result<(), RenderError> {
        let (width, height) = self.surface.size();
        if !(width > 0.0 && height > 0.0) {
            return Err(RenderError::SurfaceUnavailable { width, height });
        }
        self.view.recenter(width, height);
        Ok(())
    }
}

impl<S: Surface> Renderer for CanvasRenderer<S> {
    fn draw_segment(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    ) -> Result<(), RenderError> {
        self.prepare()?;
        let from = self.view.to_screen(from);
        let to = self.view.to_screen(to);
        self.surface.line(from, to, color, width)
    }

    fn draw_dot(&mut self, at: Point, size: f64, color: Color) -> Result<(), RenderError> {
        self.prepare()?;
        let at = self.view.to_screen(at);
        self.surface.dot(at, size, color)
    }

    fn draw_text(
        &mut self,
        at: Point,
        text: &str,
        font_size: f64,
        align: TextAlign,
        color: Color,
    ) -> Result<(), RenderError> {
        self.prepare()?;
        let at = self.view.to_screen(at);
        self.surface.text(at, text, font_size, align, color)
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.surface.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawCall, RecordingSurface};

    #[test]
    fn test_segment_is_projected() {
        let mut renderer = CanvasRenderer::new(RecordingSurface::new(800.0, 600.0));
        renderer.view_mut().set_scale(2.0);
        renderer
            .draw_segment(
                Point::new(-200.0, 0.0),
                Point::new(-100.0, 0.0),
                Color::BLUE,
                2.0,
            )
            .unwrap();

        assert_eq!(
            renderer.surface().calls(),
            &[DrawCall::Line {
                from: Point::new(0.0, 300.0),
                to: Point::new(200.0, 300.0),
                color: Color::BLUE,
                width: 2.0,
            }]
        );
    }

    #[test]
    fn test_zero_sized_surface_is_unavailable() {
        let mut renderer = CanvasRenderer::new(RecordingSurface::new(0.0, 600.0));
        let err = renderer
            .draw_dot(Point::ORIGIN, 6.0, Color::RED)
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::SurfaceUnavailable {
                width: 0.0,
                height: 600.0
            }
        );
        assert!(renderer.surface().calls().is_empty());
    }

    #[test]
    fn test_center_follows_resize() {
        let mut renderer = CanvasRenderer::new(RecordingSurface::new(100.0, 100.0));
        renderer.surface_mut().resize(200.0, 400.0);
        renderer
            .draw_dot(Point::ORIGIN, 6.0, Color::RED)
            .unwrap();
        assert_eq!(renderer.view().center(), (100.0, 200.0));
    }
}
