//! # TurtleKit Construction
//!
//! Pure geometry: computes every point of the illustration and emits the
//! ordered command queue that the replay engine animates. Nothing in this
//! crate renders.

pub mod circle;
pub mod generator;
pub mod ladder;
pub mod micro_step;
pub mod params;
pub mod polygon;

pub use circle::{segment_count, turtle_circle};
pub use generator::{generate, Construction, ConstructionGenerator};
pub use ladder::VerticalLadder;
pub use micro_step::{micro_forward_steps, step_count};
pub use params::ConstructionParameters;
pub use polygon::InscribedPolygon;
