//! Straight line segments

use crate::defaults::{EPSILON, SEGMENT_PARAM_TOLERANCE};
use crate::envelope::Envelope;
use crate::trace::Trace;
use crate::transform::{Affine, Transformable};
use crate::types::{Point, Vector};

/// Line piece from `p` to `q`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p: Point,
    pub q: Point,
}

impl Segment {
    pub fn new(p: Point, q: Point) -> Self {
        Segment { p, q }
    }

    /// Displacement from start to end
    pub fn offset(&self) -> Vector {
        self.q - self.p
    }

    pub fn length(&self) -> f64 {
        self.offset().length()
    }

    pub fn midpoint(&self) -> Point {
        self.p.midpoint(self.q)
    }

    pub fn is_degenerate(&self) -> bool {
        self.length() < EPSILON
    }

    /// `max(<p, d>, <q, d>)`; a degenerate segment is a single point.
    pub fn get_envelope(&self) -> Envelope {
        let (p, q) = (self.p.to_vector(), self.q.to_vector());
        if self.is_degenerate() {
            return Envelope::new(move |d| d.dot(p));
        }
        Envelope::new(move |d| d.dot(p).max(d.dot(q)))
    }

    /// Ray/segment intersection. Rays parallel to the segment, and
    /// degenerate segments, report no hits.
    pub fn get_trace(&self) -> Trace {
        if self.is_degenerate() {
            return Trace::empty();
        }
        let (p, w) = (self.p, self.offset());
        Trace::new(move |origin, v| {
            let denom = v.cross(w);
            if denom.abs() < EPSILON * v.length() * w.length() {
                return Vec::new();
            }
            let to_start = p - origin;
            let s = to_start.cross(v) / denom;
            if !(-SEGMENT_PARAM_TOLERANCE..=1.0 + SEGMENT_PARAM_TOLERANCE).contains(&s) {
                return Vec::new();
            }
            vec![to_start.cross(w) / denom]
        })
    }
}

impl Transformable for Segment {
    fn apply_transform(&self, t: &Affine) -> Self {
        Segment::new(t.apply_point(self.p), t.apply_point(self.q))
    }
}
