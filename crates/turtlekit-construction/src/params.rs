//! Construction parameters and their validation.

use serde::{Deserialize, Serialize};
use turtlekit_core::constants::{
    DEFAULT_LENGTH, DEFAULT_SIDES, MAX_SIDES, MAX_STEPS_PER_LENGTH, MICRO_STEP_PIXELS, MIN_SIDES,
};
use turtlekit_core::{Color, ParameterError};

/// Inputs of one construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionParameters {
    /// Base segment length in world units
    pub length: f64,
    /// Side count of the inscribed polygon
    pub sides: u32,
    /// Canvas width in pixels, used for the circle segment count
    pub canvas_width: f64,
    /// Canvas height in pixels, used for the circle segment count
    pub canvas_height: f64,
    /// Micro-step multiplier (the replay speed)
    pub step_scale: f64,
    /// Canvas background, used for the erasing run
    #[serde(default = "default_background")]
    pub background: Color,
}

fn default_background() -> Color {
    Color::WHITE
}

impl Default for ConstructionParameters {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            sides: DEFAULT_SIDES,
            canvas_width: 800.0,
            canvas_height: 600.0,
            step_scale: 1.0,
            background: default_background(),
        }
    }
}

impl ConstructionParameters {
    pub fn new(length: f64, sides: u32, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            length,
            sides,
            canvas_width,
            canvas_height,
            ..Self::default()
        }
    }

    pub fn with_step_scale(mut self, step_scale: f64) -> Self {
        self.step_scale = step_scale;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        positive("length", self.length)?;
        if self.sides < MIN_SIDES {
            return Err(ParameterError::TooFewSides {
                sides: self.sides,
                min: MIN_SIDES,
            });
        }
        if self.sides > MAX_SIDES {
            return Err(ParameterError::OutOfRange {
                name: "sides".to_string(),
                value: f64::from(self.sides),
                min: f64::from(MIN_SIDES),
                max: f64::from(MAX_SIDES),
            });
        }
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        if !self.step_scale.is_finite() {
            return Err(ParameterError::NonFinite {
                name: "step_scale".to_string(),
            });
        }
        if self.step_scale < 1.0 {
            return Err(ParameterError::OutOfRange {
                name: "step_scale".to_string(),
                value: self.step_scale,
                min: 1.0,
                max: f64::MAX,
            });
        }
        // Longest straight runs are a small multiple of `length`
        let max_length = MAX_STEPS_PER_LENGTH * MICRO_STEP_PIXELS * self.step_scale;
        if self.length > max_length {
            return Err(ParameterError::OutOfRange {
                name: "length".to_string(),
                value: self.length,
                min: 0.0,
                max: max_length,
            });
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite {
            name: name.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ParameterError::NonPositive {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ConstructionParameters::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_length_and_sides() {
        let params = ConstructionParameters::new(0.0, 4, 800.0, 600.0);
        assert!(matches!(
            params.validate(),
            Err(ParameterError::NonPositive { .. })
        ));

        let params = ConstructionParameters::new(100.0, 2, 800.0, 600.0);
        assert_eq!(
            params.validate(),
            Err(ParameterError::TooFewSides { sides: 2, min: 3 })
        );

        let params = ConstructionParameters::new(f64::NAN, 4, 800.0, 600.0);
        assert!(matches!(
            params.validate(),
            Err(ParameterError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_canvas_and_small_step_scale() {
        let params = ConstructionParameters::new(100.0, 4, 0.0, 600.0);
        assert!(params.validate().is_err());

        let params = ConstructionParameters::default().with_step_scale(0.5);
        assert!(matches!(
            params.validate(),
            Err(ParameterError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_side_count_above_cap() {
        let params = ConstructionParameters::new(100.0, MAX_SIDES, 800.0, 600.0);
        assert!(params.validate().is_ok());

        let params = ConstructionParameters::new(100.0, MAX_SIDES + 1, 800.0, 600.0);
        assert!(matches!(
            params.validate(),
            Err(ParameterError::OutOfRange { ref name, .. }) if name == "sides"
        ));

        let params = ConstructionParameters::new(100.0, u32::MAX, 800.0, 600.0);
        assert!(matches!(
            params.validate(),
            Err(ParameterError::OutOfRange { ref name, .. }) if name == "sides"
        ));
    }

    #[test]
    fn test_length_cap_scales_with_step_scale() {
        let params = ConstructionParameters::new(1e12, 4, 800.0, 600.0);
        assert!(matches!(
            params.validate(),
            Err(ParameterError::OutOfRange { ref name, max, .. })
                if name == "length" && max == 40_000.0
        ));

        let params = ConstructionParameters::new(40_000.0, 4, 800.0, 600.0);
        assert!(params.validate().is_ok());

        let params = ConstructionParameters::new(100_000.0, 4, 800.0, 600.0).with_step_scale(10.0);
        assert!(params.validate().is_ok());
    }
}
