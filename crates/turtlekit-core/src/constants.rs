//! Shared constants for construction and replay.

/// World-space location of the start mark `A`.
pub const START_X: f64 = -200.0;
/// World-space location of the start mark `A`.
pub const START_Y: f64 = 0.0;

/// Default pen width in pixels.
pub const DEFAULT_PEN_WIDTH: f64 = 2.0;

/// Base length of one micro-step before speed scaling.
pub const MICRO_STEP_PIXELS: f64 = 4.0;

/// Lower bound on circle segment count.
pub const MIN_CIRCLE_SEGMENTS: usize = 120;
/// Fraction of the smaller canvas dimension used for the segment count.
pub const CIRCLE_SEGMENT_CANVAS_FRACTION: f64 = 0.9;
/// Divisor applied after the canvas fraction.
pub const CIRCLE_SEGMENT_DIVISOR: f64 = 3.0;

/// Font size for point labels and ladder numbers.
pub const LABEL_FONT_SIZE: f64 = 10.0;
/// Font size for polygon vertex labels.
pub const VERTEX_FONT_SIZE: f64 = 9.0;
/// Vertical offset of text placed below a dot.
pub const LABEL_DROP: f64 = 30.0;

/// Ladder dot diameter.
pub const LADDER_DOT_SIZE: f64 = 6.0;
/// Polygon vertex dot diameter.
pub const VERTEX_DOT_SIZE: f64 = 8.0;

/// Polygon outline width while tracing.
pub const POLYGON_STROKE_WIDTH: f64 = 3.0;
/// Pen width left behind after the outline closes.
pub const POLYGON_FINAL_WIDTH: f64 = 4.0;

/// Minimum polygon side count.
pub const MIN_SIDES: u32 = 3;
/// Maximum polygon side count.
pub const MAX_SIDES: u32 = 360;

/// Largest canvas dimension accepted for generation, in pixels.
pub const MAX_CANVAS_DIMENSION: f64 = 16_384.0;
/// Upper bound on micro-steps per base length.
pub const MAX_STEPS_PER_LENGTH: f64 = 10_000.0;

/// Replay speed bounds and default.
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
pub const DEFAULT_SPEED: u8 = 5;
/// Tick interval at speed 1, in milliseconds.
pub const BASE_TICK_DELAY_MS: f64 = 60.0;

/// Recommended segment length.
pub const DEFAULT_LENGTH: f64 = 100.0;
/// Default polygon side count.
pub const DEFAULT_SIDES: u32 = 4;
