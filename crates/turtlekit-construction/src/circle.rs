//! Turtle circle: a regular polygon fine enough to look smooth.

use std::f64::consts::PI;
use turtlekit_core::constants::{
    CIRCLE_SEGMENT_CANVAS_FRACTION, CIRCLE_SEGMENT_DIVISOR, MAX_CANVAS_DIMENSION,
    MIN_CIRCLE_SEGMENTS,
};
use turtlekit_core::Command;

/// `max(120, floor(min(width, height) * 0.9 / 3))`, with the span capped at
/// [`MAX_CANVAS_DIMENSION`].
pub fn segment_count(canvas_width: f64, canvas_height: f64) -> usize {
    let span = canvas_width
        .min(canvas_height)
        .clamp(0.0, MAX_CANVAS_DIMENSION);
    let computed = (span * CIRCLE_SEGMENT_CANVAS_FRACTION / CIRCLE_SEGMENT_DIVISOR).floor();
    (computed as usize).max(MIN_CIRCLE_SEGMENTS)
}

/// Forward/turn pairs tracing a circle of `radius` to the left of the cursor.
///
/// The circle starts and ends at the cursor position; its centre sits
/// `radius` units to the left of the starting heading. The turns sum to 360°.
pub fn turtle_circle(radius: f64, segments: usize) -> impl Iterator<Item = Command> {
    let segments = segments.max(1);
    let step = 2.0 * PI * radius / segments as f64;
    let turn = 360.0 / segments as f64;
    (0..segments).flat_map(move |_| [Command::forward(step), Command::turn_left(turn)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use turtlekit_core::{CursorState, MarkRegistry, Point};

    #[test]
    fn test_segment_count_floor_and_minimum() {
        assert_eq!(segment_count(800.0, 600.0), 180);
        assert_eq!(segment_count(300.0, 1000.0), 120);
        assert_eq!(segment_count(1000.0, 1001.0), 300);
        assert_eq!(segment_count(0.0, 0.0), 120);
    }

    #[test]
    fn test_segment_count_caps_huge_canvas() {
        let capped = segment_count(MAX_CANVAS_DIMENSION, MAX_CANVAS_DIMENSION);
        assert_eq!(capped, 4915);
        assert_eq!(segment_count(1e12, 1e12), capped);
        assert_eq!(segment_count(f64::INFINITY, f64::INFINITY), capped);
    }

    #[test]
    fn test_circle_closes_on_start() {
        let mut cursor = CursorState::new();
        let mut marks = MarkRegistry::new();
        cursor.position = Point::new(0.0, -50.0);
        for command in turtle_circle(50.0, 180) {
            cursor.apply(&command, &mut marks).unwrap();
        }
        assert!(cursor.position.approx_eq(Point::new(0.0, -50.0), 1e-9));
        assert!((cursor.heading - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_circle_command_shape() {
        let commands: Vec<_> = turtle_circle(10.0, 120).collect();
        assert_eq!(commands.len(), 240);
        assert!(matches!(commands[0], Command::Forward { .. }));
        assert_eq!(commands[1], Command::turn_left(3.0));
    }
}
