//! Construction generator
//!
//! Turns [`ConstructionParameters`] into the full command queue of the
//! illustration:
//! - base right angle `A -> B -> C` and the erasing run that places `D`
//! - circle of radius `length` traced from `D`
//! - run from `A` through `E` and `F`, letter labels
//! - vertical ladder of numbered dots joined by a gray polyline
//! - magenta circle around ladder point `sides` passing through `A`
//! - inscribed polygon with labelled vertices and a purple outline
//!
//! Every command is also applied to a shadow cursor while it is appended, so
//! the generator reports the marks a replay of the queue will record.

use crate::circle::{segment_count, turtle_circle};
use crate::ladder::{VerticalLadder, FIRST_LABEL};
use crate::micro_step::micro_forward_steps;
use crate::params::ConstructionParameters;
use crate::polygon::InscribedPolygon;
use tracing::{debug, trace};
use turtlekit_core::constants::{
    LABEL_DROP, LABEL_FONT_SIZE, LADDER_DOT_SIZE, POLYGON_FINAL_WIDTH, POLYGON_STROKE_WIDTH,
    START_X, START_Y, VERTEX_DOT_SIZE, VERTEX_FONT_SIZE,
};
use turtlekit_core::{
    Color, Command, CommandQueue, CommandQueueBuilder, CursorState, MarkRegistry, ParameterError,
    Point, PALETTE,
};

/// Letter labels and their offsets from the mark.
const LETTER_LABELS: [(&str, f64, f64); 5] = [
    ("A", -10.0, -30.0),
    ("B", 0.0, -30.0),
    ("C", -10.0, 10.0),
    ("D", 5.0, -30.0),
    ("E", -10.0, -30.0),
];

/// Offset of the polygon caption from the top of the magenta circle.
const CAPTION_OFFSET_X: f64 = -25.0;
const CAPTION_OFFSET_Y: f64 = 10.0;

/// Everything produced by one generation pass.
#[derive(Debug, Clone)]
pub struct Construction {
    /// The frozen command sequence
    pub queue: CommandQueue,
    /// Marks a full replay of `queue` will hold
    pub marks: MarkRegistry,
    pub ladder: VerticalLadder,
    pub polygon: InscribedPolygon,
    /// Segment count used for both circles
    pub segments: usize,
}

/// Command builder that keeps a cursor in step with the queue.
struct ShadowBuilder {
    queue: CommandQueueBuilder,
    cursor: CursorState,
    marks: MarkRegistry,
}

impl ShadowBuilder {
    fn new() -> Self {
        Self {
            queue: CommandQueueBuilder::new(),
            cursor: CursorState::new(),
            marks: MarkRegistry::new(),
        }
    }

    fn push(&mut self, command: Command) {
        if let Err(e) = self.cursor.apply(&command, &mut self.marks) {
            trace!("Shadow cursor skipped {}: {}", command, e);
        }
        self.queue.push(command);
    }

    fn extend<I: IntoIterator<Item = Command>>(&mut self, commands: I) {
        for command in commands {
            self.push(command);
        }
    }

    fn position(&self) -> Point {
        self.cursor.position
    }
}

pub struct ConstructionGenerator {
    params: ConstructionParameters,
}

impl ConstructionGenerator {
    pub fn new(params: ConstructionParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ConstructionParameters {
        &self.params
    }

    /// Validate the parameters and build the construction.
    pub fn generate(&self) -> Result<Construction, ParameterError> {
        self.params.validate()?;

        let p = &self.params;
        let length = p.length;
        let scale = p.step_scale;
        let segments = segment_count(p.canvas_width, p.canvas_height);
        let a = Point::new(START_X, START_Y);
        let mut b = ShadowBuilder::new();

        // Start mark
        b.extend([
            Command::PenUp,
            Command::move_to(a),
            Command::record_mark("A"),
            Command::PenDown,
        ]);

        // A -> B
        b.push(Command::set_color(Color::BLUE));
        b.extend(micro_forward_steps(length, scale));
        b.push(Command::record_mark("B"));

        // B -> C
        b.push(Command::turn_left(90.0));
        b.extend(micro_forward_steps(length, scale));
        b.push(Command::record_mark("C"));

        // Back to A, then to B facing east
        b.extend([Command::PenUp, Command::goto_mark("A"), Command::PenDown]);
        b.extend([
            Command::PenUp,
            Command::goto_mark("B"),
            Command::set_heading(0.0),
        ]);

        // Erasing run in the background color ends at D
        b.extend([Command::set_color(p.background), Command::PenDown]);
        b.extend(micro_forward_steps(length, scale));
        b.extend([
            Command::turn_left(90.0),
            Command::set_color(Color::BLACK),
            Command::PenDown,
            Command::record_mark("D"),
        ]);

        // Circle of radius `length`, traced from D
        b.push(Command::set_color(Color::RED));
        b.extend(turtle_circle(length, segments));

        // A -> E, quarter turn at F, then the long vertical runs
        b.extend([
            Command::PenUp,
            Command::goto_mark("A"),
            Command::set_heading(0.0),
            Command::PenDown,
        ]);
        b.extend(micro_forward_steps(length / 2.0, scale));
        b.push(Command::record_mark("E"));
        b.extend([Command::turn_left(90.0), Command::record_mark("F")]);
        b.extend(micro_forward_steps(2.0 * length, scale));
        b.extend(micro_forward_steps(length, scale));

        for (name, dx, dy) in LETTER_LABELS {
            b.push(Command::label_at_mark(name, dx, dy, LABEL_FONT_SIZE));
        }

        let ladder = VerticalLadder::build(a, length, p.sides);
        trace!(
            "Ladder spacing {:.4} over {} points",
            ladder.spacing(),
            ladder.len()
        );

        for (label, point) in ladder.by_label() {
            let color = PALETTE[(label - FIRST_LABEL) as usize % PALETTE.len()];
            b.extend([
                Command::PenUp,
                Command::move_to(point),
                Command::PenDown,
                Command::dot(LADDER_DOT_SIZE, color),
                Command::PenUp,
                Command::move_to(point.offset(0.0, -LABEL_DROP)),
                Command::text(label.to_string(), LABEL_FONT_SIZE),
            ]);
        }

        let by_height = ladder.sorted_by_y();
        if let Some((first, rest)) = by_height.split_first() {
            b.extend([
                Command::PenUp,
                Command::move_to(*first),
                Command::PenDown,
                Command::set_color(Color::GRAY),
            ]);
            b.extend(rest.iter().map(|point| Command::move_to(*point)));
            b.extend([Command::PenUp, Command::set_color(Color::BLACK)]);
        }

        for (label, point) in ladder.by_label() {
            b.push(Command::set_mark(label.to_string(), point));
        }

        let center = ladder
            .get(p.sides)
            .ok_or(ParameterError::TooFewSides {
                sides: p.sides,
                min: FIRST_LABEL,
            })?;
        let radius = center.distance_to(a);

        // Magenta circle from its lowest point
        b.extend([
            Command::PenUp,
            Command::move_to(center.offset(0.0, -radius)),
            Command::set_heading(0.0),
            Command::PenDown,
            Command::set_color(Color::MAGENTA),
        ]);
        b.extend(turtle_circle(radius, segments));

        b.extend([
            Command::PenUp,
            Command::move_to(center.offset(CAPTION_OFFSET_X, radius + CAPTION_OFFSET_Y)),
            Command::text(format!("{}-sided polygon", p.sides), LABEL_FONT_SIZE),
        ]);

        let polygon = InscribedPolygon::through(center, a, p.sides);
        for (i, vertex) in polygon.vertices().iter().enumerate() {
            b.extend([
                Command::PenUp,
                Command::move_to(*vertex),
                Command::PenDown,
                Command::dot(VERTEX_DOT_SIZE, Color::RED),
                Command::PenUp,
                Command::move_to(vertex.offset(0.0, -LABEL_DROP)),
                Command::text(InscribedPolygon::label(i), VERTEX_FONT_SIZE),
            ]);
        }

        let outline = polygon.closed_outline();
        if let Some((first, rest)) = outline.split_first() {
            b.extend([
                Command::PenUp,
                Command::move_to(*first),
                Command::PenDown,
                Command::set_color(Color::PURPLE),
                Command::set_width(POLYGON_STROKE_WIDTH),
            ]);
            b.extend(rest.iter().map(|point| Command::move_to(*point)));
            b.extend([Command::PenUp, Command::set_width(POLYGON_FINAL_WIDTH)]);
        }

        debug!(
            "Generated construction: {} commands, {} circle segments, final cursor {}",
            b.queue.len(),
            segments,
            b.position()
        );

        Ok(Construction {
            queue: b.queue.build(),
            marks: b.marks,
            ladder,
            polygon,
            segments,
        })
    }
}

/// Command queue for `length`, `sides` and the canvas size, with unit step scale.
pub fn generate(
    length: f64,
    sides: u32,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<CommandQueue, ParameterError> {
    let params = ConstructionParameters::new(length, sides, canvas_width, canvas_height);
    ConstructionGenerator::new(params)
        .generate()
        .map(|construction| construction.queue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn construction(length: f64, sides: u32) -> Construction {
        ConstructionGenerator::new(ConstructionParameters::new(length, sides, 800.0, 600.0))
            .generate()
            .unwrap()
    }

    #[test]
    fn test_base_marks() {
        let c = construction(100.0, 4);
        assert_eq!(c.marks.get("A"), Some(Point::new(-200.0, 0.0)));
        assert_eq!(c.marks.get("B"), Some(Point::new(-100.0, 0.0)));
        assert!(c.marks.get("C").unwrap().approx_eq(Point::new(-100.0, 100.0), 1e-9));
        assert!(c.marks.get("D").unwrap().approx_eq(Point::new(0.0, 0.0), 1e-9));
        assert!(c.marks.get("E").unwrap().approx_eq(Point::new(-150.0, 0.0), 1e-9));
        assert!(c.marks.get("F").unwrap().approx_eq(Point::new(-150.0, 0.0), 1e-9));
    }

    #[test]
    fn test_ladder_marks_are_stored() {
        let c = construction(100.0, 4);
        for (label, point) in c.ladder.by_label() {
            assert_eq!(c.marks.get(&label.to_string()), Some(point));
        }
    }

    #[test]
    fn test_polygon_centered_on_ladder_point() {
        let c = construction(100.0, 6);
        assert_eq!(Some(c.polygon.center), c.ladder.get(6));
        assert_eq!(c.polygon.sides(), 6);
        assert!(c.polygon.vertices()[0].approx_eq(Point::new(-200.0, 0.0), 1e-9));
    }

    #[test]
    fn test_caption_text() {
        let c = construction(100.0, 5);
        assert!(c
            .queue
            .iter()
            .any(|cmd| *cmd == Command::text("5-sided polygon", 10.0)));
    }

    #[test]
    fn test_invalid_parameters_build_nothing() {
        assert!(generate(-1.0, 4, 800.0, 600.0).is_err());
        assert_eq!(
            generate(100.0, 2, 800.0, 600.0),
            Err(ParameterError::TooFewSides { sides: 2, min: 3 })
        );
        assert!(matches!(
            generate(100.0, u32::MAX, 800.0, 600.0),
            Err(ParameterError::OutOfRange { .. })
        ));
        assert!(matches!(
            generate(1e12, 4, 800.0, 600.0),
            Err(ParameterError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_every_mark_reference_is_recorded_first() {
        let queue = generate(100.0, 4, 800.0, 600.0).unwrap();
        let mut seen = std::collections::HashSet::new();
        for cmd in &queue {
            if let Some(name) = cmd.referenced_mark() {
                assert!(seen.contains(name), "{} used before it was recorded", cmd);
            }
            match cmd {
                Command::RecordMark { name } | Command::SetMark { name, .. } => {
                    seen.insert(name.clone());
                }
                _ => {}
            }
        }
    }
}
