//! Subdivision of long straight runs into many small forwards, so replay
//! animates the line instead of jumping to its end.

use turtlekit_core::constants::MICRO_STEP_PIXELS;
use turtlekit_core::Command;

/// Number of forwards used for `distance`: `max(1, floor(|distance| / (4 * step_scale)))`.
pub fn step_count(distance: f64, step_scale: f64) -> usize {
    let step_pixels = MICRO_STEP_PIXELS * step_scale;
    let steps = (distance.abs() / step_pixels).floor();
    if steps >= 1.0 {
        steps as usize
    } else {
        1
    }
}

/// `step_count` equal forwards whose distances sum to `distance`.
pub fn micro_forward_steps(distance: f64, step_scale: f64) -> impl Iterator<Item = Command> {
    let steps = step_count(distance, step_scale);
    let step = distance / steps as f64;
    std::iter::repeat(Command::forward(step)).take(steps)
}
