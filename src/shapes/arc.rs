//! Circular arcs and the segment sum type.
//!
//! An [`ArcSegment`] is described in its own frame, a circle of `radius`
//! about the origin running from `angle` through a signed `sweep`, and
//! carries the affine map placing that frame in the world. Envelope and
//! trace are computed locally and pushed forward through the map, so a
//! sheared or non-uniformly scaled arc (an elliptical arc) stays exact.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::defaults::{ARC_HEIGHT_EPSILON, EPSILON};
use crate::envelope::Envelope;
use crate::errors::{GeometryError, Result, check_finite, check_non_negative};
use crate::log::trace;
use crate::trace::Trace;
use crate::transform::{Affine, Transformable};
use crate::types::{ORIGIN, Point, Vector};

use super::Segment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    radius: f64,
    angle: f64,
    sweep: f64,
    transform: Affine,
}

impl ArcSegment {
    /// Arc about the origin. Fails for a negative or non-finite radius and
    /// for non-finite angles.
    pub fn new(radius: f64, angle: f64, sweep: f64) -> Result<Self> {
        Ok(ArcSegment {
            radius: check_non_negative("arc radius", radius)?,
            angle: check_finite("arc start angle", angle)?,
            sweep: check_finite("arc sweep", sweep)?,
            transform: Affine::IDENTITY,
        })
    }

    /// Unit-radius arc; needs no validation.
    pub(crate) fn unit(angle: f64, sweep: f64) -> Self {
        ArcSegment {
            radius: 1.0,
            angle,
            sweep,
            transform: Affine::IDENTITY,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Map from the arc's local frame to the world
    pub fn transform(&self) -> &Affine {
        &self.transform
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius < EPSILON || self.sweep.abs() < EPSILON
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep.abs() >= TAU - EPSILON
    }

    fn local_point(&self, theta: f64) -> Point {
        if self.radius < EPSILON {
            return ORIGIN;
        }
        ORIGIN + Vector::from_polar(self.radius, theta)
    }

    /// World position of the circle point at local angle `theta`
    pub fn point_at(&self, theta: f64) -> Point {
        self.transform.apply_point(self.local_point(theta))
    }

    pub fn p(&self) -> Point {
        self.point_at(self.angle)
    }

    pub fn q(&self) -> Point {
        self.point_at(self.angle + self.sweep)
    }

    pub fn center(&self) -> Point {
        self.transform.apply_point(ORIGIN)
    }

    /// World position halfway along the sweep
    pub fn midpoint(&self) -> Point {
        self.point_at(self.angle + self.sweep / 2.0)
    }

    /// World direction of travel at the end point
    pub fn end_tangent(&self) -> Vector {
        let theta = self.angle + self.sweep;
        let local = Vector::new(-theta.sin(), theta.cos()) * self.sweep.signum();
        self.transform.apply_vector(local)
    }

    /// Whether local angle `theta` falls inside the swept range.
    fn contains_angle(&self, theta: f64) -> bool {
        if self.is_full_circle() {
            return true;
        }
        let start = if self.sweep >= 0.0 {
            self.angle
        } else {
            self.angle + self.sweep
        };
        (theta - start).rem_euclid(TAU) <= self.sweep.abs() + EPSILON
    }

    fn local_envelope(&self) -> Envelope {
        if self.radius < EPSILON {
            return Envelope::from_points(vec![ORIGIN]);
        }
        if self.sweep.abs() < EPSILON {
            return Envelope::from_points(vec![self.local_point(self.angle)]);
        }
        let arc = *self;
        let p = self.local_point(self.angle).to_vector();
        let q = self.local_point(self.angle + self.sweep).to_vector();
        Envelope::new(move |d| {
            if arc.contains_angle(d.angle()) {
                arc.radius
            } else {
                d.dot(p).max(d.dot(q))
            }
        })
    }

    fn local_trace(&self) -> Trace {
        if self.is_degenerate() {
            return Trace::empty();
        }
        let arc = *self;
        Trace::new(move |origin, v| {
            let o = origin.to_vector();
            let a = v.dot(v);
            if a == 0.0 {
                return Vec::new();
            }
            let b = 2.0 * o.dot(v);
            let c = o.dot(o) - arc.radius * arc.radius;
            let disc = b * b - 4.0 * a * c;
            if disc < 0.0 {
                return Vec::new();
            }
            let root = disc.sqrt();
            let mut roots = vec![(-b - root) / (2.0 * a)];
            if root > 0.0 {
                roots.push((-b + root) / (2.0 * a));
            }
            roots.retain(|&t| arc.contains_angle((o + v * t).angle()));
            roots
        })
    }

    pub fn get_envelope(&self) -> Envelope {
        self.local_envelope().apply_transform(&self.transform)
    }

    pub fn get_trace(&self) -> Trace {
        self.local_trace().apply_transform(&self.transform)
    }

    /// Arc from `p` to `q` whose midpoint sits `height` away from the chord.
    ///
    /// Positive heights bow to the left of the direction of travel (toward
    /// negative y for a left-to-right chord), negative heights to the
    /// right. A height below [`ARC_HEIGHT_EPSILON`] gives the straight
    /// segment instead.
    pub fn arc_between(p: Point, q: Point, height: f64) -> Result<SegmentLike> {
        let height = check_finite("arc height", height)?;
        if height.abs() < ARC_HEIGHT_EPSILON {
            return Ok(Segment::new(p, q).into());
        }
        let chord = q - p;
        let d = chord.length();
        if d < EPSILON {
            return Err(GeometryError::DegenerateGeometry {
                reason: "arc between coincident points",
            });
        }
        let h = height.abs();
        let theta = ((d * d - 4.0 * h * h) / (d * d + 4.0 * h * h)).acos();
        let radius = d / (2.0 * theta.sin());
        // The bow below the chord is traversed clockwise so that it still
        // starts at `p`.
        let (phi, dy, start, sweep) = if height > 0.0 {
            (-FRAC_PI_2, radius - h, -theta, 2.0 * theta)
        } else {
            (FRAC_PI_2, h - radius, theta, -2.0 * theta)
        };
        trace!(radius, theta, "arc between points");

        let placement = Affine::translation(p.x, p.y)
            .compose(&Affine::rotation(chord.angle()))
            .compose(&Affine::translation(d / 2.0, dy))
            .compose(&Affine::rotation(phi));
        let arc = ArcSegment::new(radius, start, sweep)?;
        Ok(arc.apply_transform(&placement).into())
    }
}

impl Transformable for ArcSegment {
    fn apply_transform(&self, t: &Affine) -> Self {
        ArcSegment {
            transform: t.compose(&self.transform),
            ..*self
        }
    }
}

/// Either kind of path piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentLike {
    Line(Segment),
    Arc(ArcSegment),
}

impl SegmentLike {
    pub fn p(&self) -> Point {
        match self {
            SegmentLike::Line(s) => s.p,
            SegmentLike::Arc(a) => a.p(),
        }
    }

    pub fn q(&self) -> Point {
        match self {
            SegmentLike::Line(s) => s.q,
            SegmentLike::Arc(a) => a.q(),
        }
    }

    pub fn midpoint(&self) -> Point {
        match self {
            SegmentLike::Line(s) => s.midpoint(),
            SegmentLike::Arc(a) => a.midpoint(),
        }
    }

    /// Direction of travel where the piece ends
    pub fn end_tangent(&self) -> Vector {
        match self {
            SegmentLike::Line(s) => s.offset(),
            SegmentLike::Arc(a) => a.end_tangent(),
        }
    }

    pub fn get_envelope(&self) -> Envelope {
        match self {
            SegmentLike::Line(s) => s.get_envelope(),
            SegmentLike::Arc(a) => a.get_envelope(),
        }
    }

    pub fn get_trace(&self) -> Trace {
        match self {
            SegmentLike::Line(s) => s.get_trace(),
            SegmentLike::Arc(a) => a.get_trace(),
        }
    }
}

impl Transformable for SegmentLike {
    fn apply_transform(&self, t: &Affine) -> Self {
        match self {
            SegmentLike::Line(s) => SegmentLike::Line(s.apply_transform(t)),
            SegmentLike::Arc(a) => SegmentLike::Arc(a.apply_transform(t)),
        }
    }
}

impl From<Segment> for SegmentLike {
    fn from(s: Segment) -> Self {
        SegmentLike::Line(s)
    }
}

impl From<ArcSegment> for SegmentLike {
    fn from(a: ArcSegment) -> Self {
        SegmentLike::Arc(a)
    }
}
