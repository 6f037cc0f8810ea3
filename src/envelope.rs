//! Envelopes: direction-indexed support functions.
//!
//! For a unit direction `d`, an envelope answers "how far along `d` does the
//! shape reach from its local origin", i.e. `max over x in shape of <x, d>`.
//! Placement combinators use it to put diagrams next to each other without
//! overlap; bounding boxes are read off it at the four compass directions.

use std::fmt;
use std::sync::Arc;

use crate::defaults::EPSILON;
use crate::errors::Result;
use crate::log::trace;
use crate::shapes::Segment;
use crate::transform::Affine;
use crate::types::{BoundingBox, ORIGIN, Point, UnitVec, Vector};

type SupportFn = dyn Fn(UnitVec) -> f64 + Send + Sync;

/// Support function of a diagram, or the empty envelope.
#[derive(Clone, Default)]
pub struct Envelope {
    f: Option<Arc<SupportFn>>,
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_bounding_box() {
            Some(bb) => f
                .debug_struct("Envelope")
                .field("left", &bb.left())
                .field("top", &bb.top())
                .field("right", &bb.right())
                .field("bottom", &bb.bottom())
                .finish(),
            None => f.write_str("Envelope(empty)"),
        }
    }
}

impl Envelope {
    pub fn new(f: impl Fn(UnitVec) -> f64 + Send + Sync + 'static) -> Self {
        Envelope { f: Some(Arc::new(f)) }
    }

    pub fn empty() -> Self {
        Envelope { f: None }
    }

    pub fn is_empty(&self) -> bool {
        self.f.is_none()
    }

    /// Envelope of a finite point set
    pub fn from_points(points: Vec<Point>) -> Self {
        if points.is_empty() {
            return Envelope::empty();
        }
        Envelope::new(move |d| {
            points
                .iter()
                .map(|p| d.dot(p.to_vector()))
                .fold(f64::NEG_INFINITY, f64::max)
        })
    }

    pub fn from_bounding_box(bb: &BoundingBox) -> Self {
        if bb.is_empty() {
            return Envelope::empty();
        }
        Envelope::from_points(bb.corners().to_vec())
    }

    /// Support value in direction `d`; zero for the empty envelope.
    pub fn at(&self, d: UnitVec) -> f64 {
        match &self.f {
            Some(f) => f(d),
            None => 0.0,
        }
    }

    /// Boundary point of the envelope in direction `d`, as a displacement
    /// from the local origin.
    ///
    /// Fails only for a zero direction.
    pub fn envelope_v(&self, d: Vector) -> Result<Vector> {
        let u = d.normalized()?;
        if self.is_empty() {
            return Ok(Vector::ZERO);
        }
        Ok(u * self.at(u))
    }

    /// Pointwise maximum; empty only when both sides are.
    pub fn union(&self, other: &Envelope) -> Envelope {
        match (&self.f, &other.f) {
            (None, _) => other.clone(),
            (_, None) => self.clone(),
            (Some(a), Some(b)) => {
                if Arc::ptr_eq(a, b) {
                    return self.clone();
                }
                let (a, b) = (a.clone(), b.clone());
                Envelope::new(move |d| a(d).max(b(d)))
            }
        }
    }

    pub fn concat(envelopes: impl IntoIterator<Item = Envelope>) -> Envelope {
        let parts: Vec<Arc<SupportFn>> = envelopes.into_iter().filter_map(|e| e.f).collect();
        match parts.len() {
            0 => Envelope::empty(),
            1 => Envelope { f: parts.into_iter().next() },
            _ => Envelope::new(move |d| {
                parts.iter().map(|f| f(d)).fold(f64::NEG_INFINITY, f64::max)
            }),
        }
    }

    /// Push the envelope through `t`.
    ///
    /// With `t(x) = Ax + b`, `max <Ax + b, d> = |Aᵀd| · e(Aᵀd / |Aᵀd|) + <b, d>`.
    /// When `Aᵀd` vanishes the shape collapses onto a line orthogonal to `d`
    /// and only the translation contributes.
    pub fn apply_transform(&self, t: &Affine) -> Envelope {
        let Some(inner) = self.f.clone() else {
            return Envelope::empty();
        };
        if *t == Affine::IDENTITY {
            return self.clone();
        }
        let transpose = t.transpose_linear();
        let b = t.translation_part();
        Envelope::new(move |d| {
            let v = transpose.apply_vector(d.to_vector());
            let offset = d.dot(b);
            match UnitVec::normalized(v.dx, v.dy) {
                Some(u) => inner(u) * v.length() + offset,
                None => {
                    trace!(dx = d.dx(), dy = d.dy(), "envelope direction collapsed by transform");
                    offset
                }
            }
        })
    }

    /// Axis-aligned box read off the four compass directions
    pub fn to_bounding_box(&self) -> Option<BoundingBox> {
        if self.is_empty() {
            return None;
        }
        Some(BoundingBox::from_limits(
            -self.at(UnitVec::WEST),
            -self.at(UnitVec::NORTH),
            self.at(UnitVec::EAST),
            self.at(UnitVec::SOUTH),
        ))
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.at(UnitVec::EAST) + self.at(UnitVec::WEST)
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.at(UnitVec::SOUTH) + self.at(UnitVec::NORTH)
    }

    /// Center of the bounding box; the origin for the empty envelope.
    pub fn center(&self) -> Point {
        self.to_bounding_box().map_or(ORIGIN, |bb| bb.center())
    }

    /// Boundary points sampled every `angle_increment` degrees.
    ///
    /// Debugging aid: the polygon through these points outlines the
    /// envelope. The first point is repeated at the end to close it.
    pub fn to_path(&self, angle_increment: f64) -> Vec<Point> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut points: Vec<Point> = sample_directions(angle_increment)
            .map(|u| ORIGIN + u * self.at(u))
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }

    /// Supporting lines of the envelope sampled every `angle_increment`
    /// degrees: each segment lies on the line `<x, u> = e(u)` and is
    /// centered on the boundary point.
    pub fn to_segments(&self, angle_increment: f64) -> Vec<Segment> {
        if self.is_empty() {
            return Vec::new();
        }
        sample_directions(angle_increment)
            .map(|u| {
                let v = u * self.at(u);
                let half = u.to_vector().perpendicular() * (v.length().max(EPSILON) * 0.5);
                Segment::new(ORIGIN + v - half, ORIGIN + v + half)
            })
            .collect()
    }
}

fn sample_directions(angle_increment: f64) -> impl Iterator<Item = UnitVec> {
    let step = if angle_increment.is_finite() && angle_increment > 0.0 {
        angle_increment
    } else {
        crate::defaults::ENVELOPE_DEBUG_ANGLE
    };
    let count = (360.0 / step).ceil() as usize;
    (0..count).map(move |i| UnitVec::from_angle((i as f64 * step).to_radians()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Envelope {
        Envelope::from_points(vec![
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ])
    }

    #[test]
    fn empty_envelope_is_zero_everywhere() {
        let e = Envelope::empty();
        assert!(e.is_empty());
        assert_eq!(e.at(UnitVec::EAST), 0.0);
        assert_eq!(e.envelope_v(Vector::new(3.0, 0.0)), Ok(Vector::ZERO));
        assert_eq!(e.to_bounding_box(), None);
    }

    #[test]
    fn envelope_v_rejects_zero_direction() {
        assert!(square().envelope_v(Vector::ZERO).is_err());
    }

    #[test]
    fn envelope_v_scales_unit_direction() {
        let v = square().envelope_v(Vector::new(0.0, 5.0)).unwrap();
        assert!((v.dy - 1.0).abs() < 1e-12);
        assert!(v.dx.abs() < 1e-12);
    }

    #[test]
    fn union_is_pointwise_max() {
        let a = Envelope::from_points(vec![Point::new(2.0, 0.0)]);
        let b = Envelope::from_points(vec![Point::new(-3.0, 0.0)]);
        let u = a.union(&b);
        assert_eq!(u.at(UnitVec::EAST), 2.0);
        assert_eq!(u.at(UnitVec::WEST), 3.0);
        assert!(!a.union(&Envelope::empty()).is_empty());
        assert!(Envelope::empty().union(&Envelope::empty()).is_empty());
    }

    #[test]
    fn translation_shifts_support() {
        let e = square().apply_transform(&Affine::translation(3.0, 0.0));
        assert!((e.at(UnitVec::EAST) - 4.0).abs() < 1e-12);
        assert!((e.at(UnitVec::WEST) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn scale_matches_direct_computation() {
        let t = Affine::scale(2.0, 0.5).then(&Affine::rotation(0.4));
        let pts = vec![Point::new(1.0, 2.0), Point::new(-1.0, 0.5), Point::new(0.0, -3.0)];
        let pushed = Envelope::from_points(pts.clone()).apply_transform(&t);
        let direct = Envelope::from_points(pts.into_iter().map(|p| t.apply_point(p)).collect());
        for i in 0..16 {
            let d = UnitVec::from_angle(i as f64 * 0.4);
            assert!((pushed.at(d) - direct.at(d)).abs() < 1e-9);
        }
    }

    #[test]
    fn singular_transform_keeps_translation() {
        let e = square().apply_transform(&Affine::scale(0.0, 0.0).then(&Affine::translation(1.0, 2.0)));
        assert!((e.at(UnitVec::EAST) - 1.0).abs() < 1e-12);
        assert!((e.at(UnitVec::SOUTH) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn bounding_box_uses_screen_axes() {
        let e = Envelope::from_points(vec![Point::new(-1.0, -2.0), Point::new(3.0, 4.0)]);
        let bb = e.to_bounding_box().unwrap();
        assert_eq!(bb, BoundingBox::from_limits(-1.0, -2.0, 3.0, 4.0));
        assert_eq!(e.width(), 4.0);
        assert_eq!(e.height(), 6.0);
        assert_eq!(e.center(), Point::new(1.0, 1.0));
    }

    #[test]
    fn debug_path_is_closed() {
        let path = square().to_path(90.0);
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), path.last());
        assert_eq!(square().to_segments(45.0).len(), 8);
    }
}
