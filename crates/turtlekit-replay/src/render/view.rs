//! View transform between world space and surface pixels.
//!
//! `screen = center + world * scale + pan`. Pan and zoom only change the
//! projection; world coordinates held in marks are never touched.

use turtlekit_core::Point;

const MIN_SCALE: f64 = 0.05;
const MAX_SCALE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
    center_x: f64,
    center_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            center_x: 0.0,
            center_y: 0.0,
        }
    }
}

impl ViewTransform {
    /// Identity zoom, no pan, centred on a `width` x `height` surface.
    pub fn new(width: f64, height: f64) -> Self {
        let mut view = Self::default();
        view.recenter(width, height);
        view
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the zoom, clamped to `[0.05, 50]`. Non-finite or non-positive values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    pub fn center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    /// Place the world origin at the middle of a `width` x `height` surface.
    pub fn recenter(&mut self, width: f64, height: f64) {
        self.center_x = width / 2.0;
        self.center_y = height / 2.0;
    }

    /// Resets zoom and pan, keeping the centre.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    pub fn to_screen(&self, world: Point) -> Point {
        Point::new(
            self.center_x + world.x * self.scale + self.pan_x,
            self.center_y + world.y * self.scale + self.pan_y,
        )
    }

    pub fn to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.center_x - self.pan_x) / self.scale,
            (screen.y - self.center_y - self.pan_y) / self.scale,
        )
    }
}
