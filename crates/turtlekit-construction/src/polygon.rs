//! Regular polygon inscribed in a circle, with its first vertex on a given point.

use turtlekit_core::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct InscribedPolygon {
    pub center: Point,
    pub radius: f64,
    /// Angle of vertex 0 in degrees, in `[0, 360)`
    pub start_angle: f64,
    vertices: Vec<Point>,
}

impl InscribedPolygon {
    /// Polygon around `center` whose vertex 0 lies in the direction of `through`.
    pub fn through(center: Point, through: Point, sides: u32) -> Self {
        let radius = center.distance_to(through);
        let start_angle = center.angle_to(through);
        let step = 360.0 / f64::from(sides);
        let vertices = (0..sides)
            .map(|i| center.polar(start_angle + f64::from(i) * step, radius))
            .collect();
        Self {
            center,
            radius,
            start_angle,
            vertices,
        }
    }

    pub fn sides(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// `"A"` for vertex 0, `"P{i}"` otherwise.
    pub fn label(index: usize) -> String {
        if index == 0 {
            "A".to_string()
        } else {
            format!("P{}", index)
        }
    }

    /// Vertices in order followed by vertex 0 again.
    pub fn closed_outline(&self) -> Vec<Point> {
        let mut outline = self.vertices.clone();
        if let Some(first) = self.vertices.first() {
            outline.push(*first);
        }
        outline
    }
}
