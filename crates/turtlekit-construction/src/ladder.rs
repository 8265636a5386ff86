//! Vertical point ladder
//!
//! Evenly spaced points on the vertical line `x = A.x + length/2`. The
//! spacing comes from the equilateral triangle on the base segment: points 4
//! and 6 sit at `length/2` and at the triangle's apex height `length·√3/2`,
//! point 5 halfway between them, and every other point is one spacing apart.

use std::collections::BTreeMap;
use turtlekit_core::Point;

/// First label on the ladder.
pub const FIRST_LABEL: u32 = 3;

/// Labelled points of the ladder, keyed by label.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalLadder {
    points: BTreeMap<u32, Point>,
    spacing: f64,
}

impl VerticalLadder {
    /// Build the ladder for start mark `anchor`, labelling points `3..=sides + 8`.
    pub fn build(anchor: Point, length: f64, sides: u32) -> Self {
        let xv = anchor.x + length / 2.0;
        let p4 = Point::new(xv, length * 0.5);
        let p6 = Point::new(xv, length * 3f64.sqrt() / 2.0);
        let p5 = Point::new(xv, (p4.y + p6.y) / 2.0);
        let spacing = p5.y - p4.y;
        let p3 = Point::new(xv, p4.y - spacing);

        let mut points = BTreeMap::from([(3, p3), (4, p4), (5, p5), (6, p6)]);

        let mut y = p6.y;
        let mut label = 7;
        for _ in 0..sides.saturating_add(2) {
            y += spacing;
            points.insert(label, Point::new(xv, y));
            label += 1;
        }

        Self { points, spacing }
    }

    /// Gap between consecutive labels.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn get(&self, label: u32) -> Option<Point> {
        self.points.get(&label).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in ascending label order.
    pub fn by_label(&self) -> impl Iterator<Item = (u32, Point)> + '_ {
        self.points.iter().map(|(label, point)| (*label, *point))
    }

    /// Points in ascending vertical order.
    pub fn sorted_by_y(&self) -> Vec<Point> {
        let mut sorted: Vec<Point> = self.points.values().copied().collect();
        sorted.sort_by(|a, b| a.y.total_cmp(&b.y));
        sorted
    }
}
