//! Paths: ordered runs of line and arc pieces.

use std::f64::consts::{PI, TAU};

use crate::defaults::{CLOSED_PATH_TOLERANCE, EPSILON};
use crate::envelope::Envelope;
use crate::errors::{GeometryError, Result, check_finite, check_non_negative};
use crate::trace::Trace;
use crate::transform::{Affine, Transformable};
use crate::types::{Point, Vector};

use super::{ArcSegment, Segment, SegmentLike};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub segments: Vec<SegmentLike>,
}

impl Path {
    pub fn new(segments: Vec<SegmentLike>) -> Self {
        Path { segments }
    }

    /// A path that is a single point
    pub fn from_point(point: Point) -> Self {
        Path::new(vec![Segment::new(point, point).into()])
    }

    /// Polyline through `points` in order
    pub fn from_points(points: &[Point]) -> Self {
        Path::new(
            points
                .windows(2)
                .map(|w| Segment::new(w[0], w[1]).into())
                .collect(),
        )
    }

    /// Disconnected segments, one per pair
    pub fn from_pairs(pairs: &[(Point, Point)]) -> Self {
        Path::new(pairs.iter().map(|&(p, q)| Segment::new(p, q).into()).collect())
    }

    pub fn from_list_of_tuples(coords: &[(f64, f64)]) -> Self {
        let points: Vec<Point> = coords.iter().copied().map(Point::from).collect();
        Path::from_points(&points)
    }

    /// Horizontal line of `length` centered on the origin
    pub fn hrule(length: f64) -> Self {
        Path::from_list_of_tuples(&[(-length / 2.0, 0.0), (length / 2.0, 0.0)])
    }

    /// Vertical line of `length` centered on the origin
    pub fn vrule(length: f64) -> Self {
        Path::from_list_of_tuples(&[(0.0, -length / 2.0), (0.0, length / 2.0)])
    }

    /// Closed axis-aligned rectangle centered on the origin
    pub fn rectangle(width: f64, height: f64) -> Self {
        let (x, y) = (width / 2.0, height / 2.0);
        Path::from_list_of_tuples(&[(-x, y), (x, y), (x, -y), (-x, -y), (-x, y)])
    }

    /// Circle about the origin as two half arcs.
    pub fn circle(radius: f64) -> Result<Self> {
        let radius = check_non_negative("circle radius", radius)?;
        let scale = Affine::uniform_scale(radius);
        Ok(Path::new(vec![
            ArcSegment::unit(0.0, PI).apply_transform(&scale).into(),
            ArcSegment::unit(PI, PI).apply_transform(&scale).into(),
        ]))
    }

    /// Closed polygon with vertices on a circle of `radius`.
    ///
    /// With no `rotation` one vertex sits on the x axis for odd `sides`
    /// and the polygon rests on an edge otherwise.
    pub fn polygon(sides: usize, radius: f64, rotation: f64) -> Result<Self> {
        if sides < 3 {
            return Err(GeometryError::DegenerateGeometry {
                reason: "a polygon needs at least three sides",
            });
        }
        let radius = check_non_negative("polygon radius", radius)?;
        let rotation = check_finite("polygon rotation", rotation)?;
        let n = sides as f64;
        let points: Vec<Point> = (0..=sides)
            .map(|s| {
                let t = TAU * s as f64 / n + PI / 2.0 * n + rotation;
                Point::new(radius * t.cos(), radius * t.sin())
            })
            .collect();
        Ok(Path::from_points(&points))
    }

    /// Closed polygon whose edges all have length `side_length`
    pub fn regular_polygon(sides: usize, side_length: f64) -> Result<Self> {
        let side_length = check_non_negative("polygon side length", side_length)?;
        let n = sides.max(1) as f64;
        Path::polygon(sides, side_length / (2.0 * (PI / n).sin()), 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first piece followed by the end of every piece
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            points.push(first.p());
        }
        points.extend(self.segments.iter().map(SegmentLike::q));
        points
    }

    /// Whether the path ends where it starts.
    pub fn is_closed(&self) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => (first.p() - last.q()).length() < CLOSED_PATH_TOLERANCE,
            _ => false,
        }
    }

    /// Append the pieces of `other`
    pub fn extend(&self, other: &Path) -> Path {
        let mut segments = self.segments.clone();
        segments.extend_from_slice(&other.segments);
        Path::new(segments)
    }

    pub fn get_envelope(&self) -> Envelope {
        Envelope::concat(self.segments.iter().map(SegmentLike::get_envelope))
    }

    /// Hits where two pieces meet, such as a polygon corner or the seam
    /// of a circle, are reported once.
    pub fn get_trace(&self) -> Trace {
        let pieces = Trace::concat(self.segments.iter().map(SegmentLike::get_trace));
        if pieces.is_empty() {
            return pieces;
        }
        Trace::new(move |p, v| {
            let mut hits = pieces.trace(p, v);
            hits.dedup_by(|b, a| (*b - *a).abs() <= EPSILON * a.abs().max(b.abs()));
            hits
        })
    }

    /// Displacement from the first point to the last
    pub fn offset(&self) -> Vector {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => last.q() - first.p(),
            _ => Vector::ZERO,
        }
    }
}

impl Transformable for Path {
    fn apply_transform(&self, t: &Affine) -> Self {
        Path::new(self.segments.iter().map(|s| s.apply_transform(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnitVec;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn from_points_links_consecutive_points() {
        let path = Path::from_list_of_tuples(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(path.segments.len(), 2);
        assert_eq!(
            path.points(),
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)]
        );
        assert!(!path.is_closed());
        assert_eq!(path.offset(), Vector::new(1.0, 1.0));
    }

    #[test]
    fn from_pairs_keeps_pieces_apart() {
        let a = (Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let b = (Point::new(5.0, 5.0), Point::new(6.0, 5.0));
        let path = Path::from_pairs(&[a, b]);
        assert_eq!(path.segments.len(), 2);
        assert_eq!(path.segments[1].p(), b.0);
    }

    #[test]
    fn rectangle_is_closed_and_centered() {
        let path = Path::rectangle(2.0, 4.0);
        assert!(path.is_closed());
        let e = path.get_envelope();
        assert_eq!(e.at(UnitVec::EAST), 1.0);
        assert_eq!(e.at(UnitVec::SOUTH), 2.0);
        assert_eq!(e.at(UnitVec::NORTH), 2.0);
    }

    #[test]
    fn rules_are_centered() {
        let h = Path::hrule(4.0).get_envelope();
        assert_eq!(h.width(), 4.0);
        assert_eq!(h.height(), 0.0);
        let v = Path::vrule(3.0).get_envelope();
        assert_eq!(v.height(), 3.0);
    }

    #[test]
    fn single_point_path() {
        let path = Path::from_point(Point::new(1.0, 2.0));
        assert!(path.is_closed());
        assert_eq!(path.get_envelope().at(UnitVec::EAST), 1.0);
        assert!(path.get_trace().trace(Point::new(0.0, 2.0), Vector::new(1.0, 0.0)).is_empty());
    }

    #[test]
    fn circle_reaches_radius_in_every_direction() {
        let path = Path::circle(1.5).unwrap();
        assert!(path.is_closed());
        for i in 0..16 {
            let d = UnitVec::from_angle(i as f64 * TAU / 16.0);
            assert!(close(path.get_envelope().at(d), 1.5));
        }
        // Both half arcs end on the x axis; each crossing is reported once.
        let hits = path.get_trace().trace(Point::new(-5.0, 0.0), Vector::new(1.0, 0.0));
        assert_eq!(hits.len(), 2, "{hits:?}");
        assert!(close(hits[0], 3.5));
        assert!(close(hits[1], 6.5));
    }

    #[test]
    fn corner_hits_are_reported_once() {
        let path = Path::rectangle(2.0, 2.0);
        let hits = path.get_trace().trace(Point::new(-2.0, -2.0), Vector::new(1.0, 1.0));
        assert_eq!(hits.len(), 2, "{hits:?}");
        assert!(close(hits[0], 1.0));
        assert!(close(hits[1], 3.0));
        // Distinct crossings close together survive.
        let tiny = Path::rectangle(2e-6, 2e-6);
        let hits = tiny.get_trace().trace(Point::new(-1.0, 0.0), Vector::new(1.0, 0.0));
        assert_eq!(hits.len(), 2, "{hits:?}");
    }

    #[test]
    fn polygon_vertices_sit_on_circle() {
        let path = Path::polygon(5, 2.0, 0.3).unwrap();
        assert_eq!(path.segments.len(), 5);
        assert!(path.is_closed());
        for p in path.points() {
            assert!(close(p.to_vector().length(), 2.0));
        }
    }

    #[test]
    fn regular_polygon_has_equal_sides() {
        let path = Path::regular_polygon(6, 1.0).unwrap();
        for seg in &path.segments {
            assert!(close((seg.q() - seg.p()).length(), 1.0));
        }
    }

    #[test]
    fn polygon_needs_three_sides() {
        assert!(matches!(
            Path::polygon(2, 1.0, 0.0),
            Err(GeometryError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn transform_maps_every_piece() {
        let path = Path::hrule(2.0).translate(0.0, 3.0);
        assert_eq!(path.points(), vec![Point::new(-1.0, 3.0), Point::new(1.0, 3.0)]);
    }
}
