//! Touch gestures mapped onto the view transform.
//!
//! One finger pans by its movement delta. Two fingers zoom by the ratio of
//! their current spacing to the spacing when the second finger landed.

use super::view::ViewTransform;
use turtlekit_core::Point;

/// Touch input in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down { id: u64, x: f64, y: f64 },
    Move { id: u64, x: f64, y: f64 },
    Up { id: u64 },
}

#[derive(Debug, Clone, Copy)]
struct Touch {
    id: u64,
    position: Point,
}

#[derive(Debug, Clone, Copy)]
struct PinchStart {
    distance: f64,
    scale: f64,
}

#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    touches: Vec<Touch>,
    pinch: Option<PinchStart>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    pub fn handle(&mut self, event: TouchEvent, view: &mut ViewTransform) {
        match event {
            TouchEvent::Down { id, x, y } => self.touch_down(id, Point::new(x, y), view),
            TouchEvent::Move { id, x, y } => self.touch_move(id, Point::new(x, y), view),
            TouchEvent::Up { id } => self.touch_up(id),
        }
    }

    pub fn touch_down(&mut self, id: u64, position: Point, view: &ViewTransform) {
        self.touches.retain(|t| t.id != id);
        self.touches.push(Touch { id, position });
        if self.touches.len() == 2 {
            self.pinch = Some(PinchStart {
                distance: self.touches[0].position.distance_to(self.touches[1].position),
                scale: view.scale(),
            });
        }
    }

    pub fn touch_move(&mut self, id: u64, position: Point, view: &mut ViewTransform) {
        let Some(touch) = self.touches.iter_mut().find(|t| t.id == id) else {
            return;
        };
        let dx = position.x - touch.position.x;
        let dy = position.y - touch.position.y;
        touch.position = position;

        match (self.touches.len(), self.pinch) {
            (1, _) => view.pan_by(dx, dy),
            (2, Some(start)) if start.distance > 0.0 => {
                let distance = self.touches[0].position.distance_to(self.touches[1].position);
                view.set_scale(start.scale * distance / start.distance);
            }
            _ => {}
        }
    }

    pub fn touch_up(&mut self, id: u64) {
        self.touches.retain(|t| t.id != id);
        if self.touches.len() != 2 {
            self.pinch = None;
        }
    }
}
