//! Replay timing derived from the user-facing speed.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use turtlekit_core::constants::{BASE_TICK_DELAY_MS, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use turtlekit_core::ParameterError;

/// Tick interval and micro-step multiplier.
///
/// Both come from the same speed value but are kept as separate fields so
/// either can be tuned on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplayTiming {
    /// Milliseconds between ticks
    pub tick_delay_ms: u64,
    /// Multiplier on the micro-step length
    pub step_scale: f64,
}

impl ReplayTiming {
    /// `tick_delay_ms = round(60 / speed)`, `step_scale = speed`.
    pub fn from_speed(speed: u8) -> Result<Self, ParameterError> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(ParameterError::OutOfRange {
                name: "speed".to_string(),
                value: f64::from(speed),
                min: f64::from(MIN_SPEED),
                max: f64::from(MAX_SPEED),
            });
        }
        let speed = f64::from(speed);
        Ok(Self {
            tick_delay_ms: (BASE_TICK_DELAY_MS / speed).round() as u64,
            step_scale: speed,
        })
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}

impl Default for ReplayTiming {
    fn default() -> Self {
        Self {
            tick_delay_ms: (BASE_TICK_DELAY_MS / f64::from(DEFAULT_SPEED)).round() as u64,
            step_scale: f64::from(DEFAULT_SPEED),
        }
    }
}
