//! Trails: paths described only by their offsets.
//!
//! A trail has a shape but no position. It turns into a [`Path`] once it is
//! given a starting point.

use std::ops::Add;

use crate::diagram::Diagram;
use crate::shapes::Path;
use crate::transform::{Affine, Transformable};
use crate::types::{ORIGIN, Point, Vector};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trail {
    pub offsets: Vec<Vector>,
}

impl Trail {
    pub fn new(offsets: Vec<Vector>) -> Self {
        Trail { offsets }
    }

    /// One step along +x
    pub fn unit_x() -> Self {
        Trail::new(vec![Vector::new(1.0, 0.0)])
    }

    /// One step along +y
    pub fn unit_y() -> Self {
        Trail::new(vec![Vector::new(0.0, 1.0)])
    }

    /// Steps between consecutive points of `path`. Arc pieces are replaced
    /// by their chords.
    pub fn from_path(path: &Path) -> Self {
        Trail::new(path.points().windows(2).map(|w| w[1] - w[0]).collect())
    }

    /// Polyline starting at `origin` and taking each step in turn.
    pub fn to_path(&self, origin: Point) -> Path {
        let mut points = Vec::with_capacity(self.offsets.len() + 1);
        points.push(origin);
        let mut at = origin;
        for &step in &self.offsets {
            at = at + step;
            points.push(at);
        }
        Path::from_points(&points)
    }

    /// The trail drawn from the origin
    pub fn stroke(&self) -> Diagram {
        Diagram::primitive(self.to_path(ORIGIN))
    }

    /// Displacement from start to end
    pub fn offset(&self) -> Vector {
        self.offsets.iter().fold(Vector::ZERO, |acc, &v| acc + v)
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Add for Trail {
    type Output = Trail;

    /// Walk `self`, then `rhs` from where `self` ends.
    fn add(mut self, rhs: Trail) -> Trail {
        self.offsets.extend(rhs.offsets);
        self
    }
}

impl Transformable for Trail {
    /// Offsets are vectors, so translation leaves a trail unchanged.
    fn apply_transform(&self, t: &Affine) -> Self {
        Trail::new(self.offsets.iter().map(|&v| t.apply_vector(v)).collect())
    }
}
