//! Value types for 2D geometry: points, vectors, unit directions and boxes.
//!
//! Points and vectors are kept apart so that `Point + Point` does not type
//! check: positions are moved by displacements, and the difference of two
//! positions is a displacement.
//!
//! The y axis grows downward, so `UnitVec::SOUTH` is `(0, 1)`.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use glam::DVec2;

use crate::defaults::EPSILON;
use crate::errors::{GeometryError, Result};

/// Absolute position in the plane
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The local origin of every shape.
pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Displacement from the origin to this point
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Calculate the midpoint between two points
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Displacement: a direction with a magnitude
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Vector { dx, dy }
    }

    /// Build a vector from polar coordinates (angle in radians)
    pub fn from_polar(r: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vector::new(r * cos, r * sin)
    }

    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Angle from the +x axis, in radians
    pub fn angle(self) -> f64 {
        self.dy.atan2(self.dx)
    }

    /// The vector turned a quarter turn: `(-dy, dx)`
    pub fn perpendicular(self) -> Vector {
        Vector::new(-self.dy, self.dx)
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// z component of the 3D cross product
    pub fn cross(self, other: Vector) -> f64 {
        self.dx * other.dy - self.dy * other.dx
    }

    /// Rotate by `by` radians, keeping the length
    pub fn rotate(self, by: f64) -> Vector {
        Vector::from_polar(self.length(), self.angle() + by)
    }

    /// Normalize to unit length.
    ///
    /// Fails for zero-length input, which has no direction.
    pub fn normalized(self) -> Result<UnitVec> {
        UnitVec::normalized(self.dx, self.dy).ok_or(GeometryError::DegenerateGeometry {
            reason: "cannot normalize a zero-length vector",
        })
    }

    pub fn is_zero(self) -> bool {
        self.length() < EPSILON
    }
}

impl From<(f64, f64)> for Vector {
    fn from((dx, dy): (f64, f64)) -> Self {
        Vector::new(dx, dy)
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        DVec2::new(v.dx, v.dy)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.dx / rhs, self.dy / rhs)
    }
}

/// Add a displacement to a point to get a new point
impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

/// Subtract two points to get a displacement
impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A unit direction vector (dimensionless, normalized)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitVec {
    dx: f64,
    dy: f64,
}

// 1/√2 for diagonal directions
const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

impl UnitVec {
    pub const NORTH: UnitVec = UnitVec { dx: 0.0, dy: -1.0 };
    pub const SOUTH: UnitVec = UnitVec { dx: 0.0, dy: 1.0 };
    pub const EAST: UnitVec = UnitVec { dx: 1.0, dy: 0.0 };
    pub const WEST: UnitVec = UnitVec { dx: -1.0, dy: 0.0 };
    pub const NORTH_EAST: UnitVec = UnitVec { dx: FRAC_1_SQRT_2, dy: -FRAC_1_SQRT_2 };
    pub const NORTH_WEST: UnitVec = UnitVec { dx: -FRAC_1_SQRT_2, dy: -FRAC_1_SQRT_2 };
    pub const SOUTH_EAST: UnitVec = UnitVec { dx: FRAC_1_SQRT_2, dy: FRAC_1_SQRT_2 };
    pub const SOUTH_WEST: UnitVec = UnitVec { dx: -FRAC_1_SQRT_2, dy: FRAC_1_SQRT_2 };

    /// Create a normalized unit vector from components.
    /// Returns None if the input has (near) zero length or is not finite.
    pub fn normalized(dx: f64, dy: f64) -> Option<Self> {
        let len = dx.hypot(dy);
        if len < EPSILON || !len.is_finite() {
            None
        } else {
            Some(UnitVec { dx: dx / len, dy: dy / len })
        }
    }

    /// Direction at `angle` radians from the +x axis
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        UnitVec { dx: cos, dy: sin }
    }

    pub fn dx(self) -> f64 {
        self.dx
    }

    pub fn dy(self) -> f64 {
        self.dy
    }

    pub fn angle(self) -> f64 {
        self.dy.atan2(self.dx)
    }

    pub fn to_vector(self) -> Vector {
        Vector::new(self.dx, self.dy)
    }

    /// Projection of `v` onto this direction
    pub fn dot(self, v: Vector) -> f64 {
        self.dx * v.dx + self.dy * v.dy
    }
}

impl Neg for UnitVec {
    type Output = UnitVec;
    fn neg(self) -> UnitVec {
        UnitVec { dx: -self.dx, dy: -self.dy }
    }
}

/// Scale a unit vector to get a displacement
impl Mul<f64> for UnitVec {
    type Output = Vector;
    fn mul(self, len: f64) -> Vector {
        Vector::new(self.dx * len, self.dy * len)
    }
}

impl From<UnitVec> for Vector {
    fn from(u: UnitVec) -> Self {
        u.to_vector()
    }
}

impl TryFrom<Vector> for UnitVec {
    type Error = GeometryError;
    fn try_from(v: Vector) -> Result<Self> {
        v.normalized()
    }
}

/// Named points on a bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Center,
}

impl FromStr for Anchor {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "N" => Anchor::North,
            "NE" => Anchor::NorthEast,
            "E" => Anchor::East,
            "SE" => Anchor::SouthEast,
            "S" => Anchor::South,
            "SW" => Anchor::SouthWest,
            "W" => Anchor::West,
            "NW" => Anchor::NorthWest,
            "C" => Anchor::Center,
            other => {
                return Err(GeometryError::UnknownAnchor { anchor: other.to_string() });
            }
        })
    }
}

/// Axis-aligned bounding box; `min` is the top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BoundingBox {
            min: Point::new(f64::MAX, f64::MAX),
            max: Point::new(f64::MIN, f64::MIN),
        }
    }

    pub fn from_limits(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        BoundingBox {
            min: Point::new(left, top),
            max: Point::new(right, bottom),
        }
    }

    /// Smallest box containing every point
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut bb = BoundingBox::new();
        for p in points {
            bb.expand_point(p);
        }
        bb
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut bb = *self;
        if !other.is_empty() {
            bb.expand_point(other.min);
            bb.expand_point(other.max);
        }
        bb
    }

    pub fn left(&self) -> f64 {
        self.min.x
    }

    pub fn top(&self) -> f64 {
        self.min.y
    }

    pub fn right(&self) -> f64 {
        self.max.x
    }

    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// The four corners, clockwise from top-left
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// Position of an edge midpoint, corner or center
    pub fn anchor(&self, anchor: Anchor) -> Point {
        let c = self.center();
        match anchor {
            Anchor::North => Point::new(c.x, self.top()),
            Anchor::South => Point::new(c.x, self.bottom()),
            Anchor::West => Point::new(self.left(), c.y),
            Anchor::East => Point::new(self.right(), c.y),
            Anchor::NorthWest => Point::new(self.left(), self.top()),
            Anchor::NorthEast => Point::new(self.right(), self.top()),
            Anchor::SouthWest => Point::new(self.left(), self.bottom()),
            Anchor::SouthEast => Point::new(self.right(), self.bottom()),
            Anchor::Center => c,
        }
    }

    /// Grow every side outward by the given amounts
    pub fn pad(&self, left: f64, top: f64, right: f64, bottom: f64) -> BoundingBox {
        BoundingBox::from_limits(
            self.left() - left,
            self.top() - top,
            self.right() + right,
            self.bottom() + bottom,
        )
    }
}

/// Simple color model; colour-space handling belongs to renderers.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Point/Vector tests ====================

    #[test]
    fn point_plus_vector_gives_point() {
        let p = Point::new(1.0, 2.0);
        let v = Vector::new(3.0, 4.0);
        assert_eq!(p + v, Point::new(4.0, 6.0));
        assert_eq!(p - v, Point::new(-2.0, -2.0));
    }

    #[test]
    fn point_minus_point_gives_vector() {
        let offset = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
        assert_eq!(offset, Vector::new(3.0, 4.0));
        assert_eq!(offset.length(), 5.0);
    }

    #[test]
    fn vector_perpendicular_is_quarter_turn() {
        let v = Vector::new(1.0, 0.0);
        assert_eq!(v.perpendicular(), Vector::new(-0.0, 1.0));
        assert_eq!(v.dot(v.perpendicular()), 0.0);
    }

    #[test]
    fn vector_angle_and_rotate() {
        let v = Vector::new(0.0, 2.0);
        assert!((v.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let r = v.rotate(std::f64::consts::FRAC_PI_2);
        assert!((r.dx + 2.0).abs() < 1e-12);
        assert!(r.dy.abs() < 1e-12);
    }

    #[test]
    fn normalizing_zero_vector_fails() {
        assert!(matches!(
            Vector::ZERO.normalized(),
            Err(GeometryError::DegenerateGeometry { .. })
        ));
    }

    // ==================== UnitVec tests ====================

    #[test]
    fn unitvec_compass_directions_are_unit_length() {
        let dirs = [
            UnitVec::NORTH,
            UnitVec::SOUTH,
            UnitVec::EAST,
            UnitVec::WEST,
            UnitVec::NORTH_EAST,
            UnitVec::NORTH_WEST,
            UnitVec::SOUTH_EAST,
            UnitVec::SOUTH_WEST,
        ];
        for dir in dirs {
            let len = dir.dx().hypot(dir.dy());
            assert!((len - 1.0).abs() < 1e-10, "{dir:?} should have unit length");
        }
    }

    #[test]
    fn unitvec_normalized_valid() {
        let v = UnitVec::normalized(3.0, 4.0).unwrap();
        assert!((v.dx() - 0.6).abs() < 1e-10);
        assert!((v.dy() - 0.8).abs() < 1e-10);
    }

    #[test]
    fn unitvec_scales_to_vector() {
        assert_eq!(UnitVec::EAST * 5.0, Vector::new(5.0, 0.0));
        assert_eq!(-UnitVec::EAST, UnitVec::WEST);
    }

    // ==================== BoundingBox tests ====================

    #[test]
    fn bbox_new_is_empty() {
        assert!(BoundingBox::new().is_empty());
    }

    #[test]
    fn bbox_from_points() {
        let bb = BoundingBox::from_points([Point::new(1.0, 2.0), Point::new(5.0, 8.0)]);
        assert!(!bb.is_empty());
        assert_eq!(bb.width(), 4.0);
        assert_eq!(bb.height(), 6.0);
        assert_eq!(bb.center(), Point::new(3.0, 5.0));
    }

    #[test]
    fn bbox_anchors_follow_screen_axes() {
        let bb = BoundingBox::from_limits(0.0, 0.0, 4.0, 2.0);
        assert_eq!(bb.anchor(Anchor::North), Point::new(2.0, 0.0));
        assert_eq!(bb.anchor(Anchor::SouthEast), Point::new(4.0, 2.0));
        assert_eq!(bb.anchor(Anchor::Center), Point::new(2.0, 1.0));
    }

    #[test]
    fn anchor_parses_compass_names() {
        assert_eq!("C".parse::<Anchor>(), Ok(Anchor::Center));
        assert!("sw".parse::<Anchor>().is_err());
        assert_eq!("SW".parse::<Anchor>(), Ok(Anchor::SouthWest));
    }

    #[test]
    fn bbox_union_ignores_empty() {
        let a = BoundingBox::from_limits(0.0, 0.0, 1.0, 1.0);
        assert_eq!(a.union(&BoundingBox::new()), a);
        let b = BoundingBox::from_limits(2.0, -1.0, 3.0, 0.5);
        assert_eq!(a.union(&b), BoundingBox::from_limits(0.0, -1.0, 3.0, 1.0));
    }
}
