//! Named point registry.

use crate::geometry::Point;
use std::collections::HashMap;
use tracing::trace;

/// Maps mark names to world-space points. Recording an existing name
/// overwrites the previous point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkRegistry {
    marks: HashMap<String, Point>,
}

impl MarkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `point` under `name`, returning the point it replaced.
    pub fn record(&mut self, name: impl Into<String>, point: Point) -> Option<Point> {
        let name = name.into();
        let previous = self.marks.insert(name.clone(), point);
        if let Some(old) = previous {
            trace!("Mark '{}' moved from {:?} to {:?}", name, old, point);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<Point> {
        self.marks.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.marks.contains_key(name)
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Iterate in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.marks.iter().map(|(name, point)| (name.as_str(), *point))
    }
}
