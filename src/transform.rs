//! 2D affine transforms.
//!
//! An [`Affine`] is a 2×2 linear part plus a translation, stored as a
//! `glam::DAffine2`. Row-major, a transform maps
//!
//! ```text
//! | a  b  tx |   x' = a*x + b*y + tx
//! | c  d  ty |   y' = c*x + d*y + ty
//! ```

use glam::{DAffine2, DMat2, DVec2};

use crate::defaults::SINGULAR_DETERMINANT;
use crate::errors::{GeometryError, Result};
use crate::types::{Point, Vector};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine(DAffine2);

impl Default for Affine {
    fn default() -> Self {
        Affine::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine(DAffine2::IDENTITY);

    /// Build from row-major coefficients, see the module docs.
    pub fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        let linear = DMat2::from_cols(DVec2::new(a, c), DVec2::new(b, d));
        Affine(DAffine2::from_mat2_translation(linear, DVec2::new(tx, ty)))
    }

    /// Build from column-major coefficients as in SVG `matrix(a b c d e f)`:
    /// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
    pub fn from_cols(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Affine::new(a, c, b, d, e, f)
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Affine(DAffine2::from_translation(DVec2::new(dx, dy)))
    }

    pub fn translation_by(v: Vector) -> Self {
        Affine::translation(v.dx, v.dy)
    }

    /// Rotation about the origin by `angle` radians (from +x toward +y).
    pub fn rotation(angle: f64) -> Self {
        Affine(DAffine2::from_angle(angle))
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Affine(DAffine2::from_scale(DVec2::new(sx, sy)))
    }

    pub fn uniform_scale(factor: f64) -> Self {
        Affine::scale(factor, factor)
    }

    /// `x' = x + λy`
    pub fn shear_x(lambda: f64) -> Self {
        Affine::new(1.0, lambda, 0.0, 1.0, 0.0, 0.0)
    }

    /// `y' = λx + y`
    pub fn shear_y(lambda: f64) -> Self {
        Affine::new(1.0, 0.0, lambda, 1.0, 0.0, 0.0)
    }

    /// Mirror across the y axis
    pub fn reflect_x() -> Self {
        Affine::scale(-1.0, 1.0)
    }

    /// Mirror across the x axis
    pub fn reflect_y() -> Self {
        Affine::scale(1.0, -1.0)
    }

    /// `self ∘ inner`: apply `inner` first, then `self`.
    pub fn compose(&self, inner: &Affine) -> Affine {
        Affine(self.0 * inner.0)
    }

    /// `next ∘ self`: apply `self` first, then `next`.
    pub fn then(&self, next: &Affine) -> Affine {
        next.compose(self)
    }

    pub fn determinant(&self) -> f64 {
        self.0.matrix2.determinant()
    }

    /// Whether the linear part can be inverted.
    ///
    /// The determinant is compared against the squared size of the matrix,
    /// so uniformly tiny or huge scales stay invertible while flattening
    /// maps do not.
    pub fn is_invertible(&self) -> bool {
        let determinant = self.determinant();
        let m = self.0.matrix2;
        let size = m.x_axis.length_squared() + m.y_axis.length_squared();
        determinant.is_finite() && size > 0.0 && determinant.abs() > SINGULAR_DETERMINANT * size
    }

    pub fn inverse(&self) -> Result<Affine> {
        if !self.is_invertible() {
            return Err(GeometryError::SingularTransform {
                determinant: self.determinant(),
            });
        }
        Ok(Affine(self.0.inverse()))
    }

    /// The same transform with its translation removed
    pub fn linear(&self) -> Affine {
        Affine(DAffine2::from_mat2(self.0.matrix2))
    }

    /// Transposed linear part, without translation
    pub fn transpose_linear(&self) -> Affine {
        Affine(DAffine2::from_mat2(self.0.matrix2.transpose()))
    }

    pub fn translation_part(&self) -> Vector {
        self.0.translation.into()
    }

    pub fn apply_point(&self, p: Point) -> Point {
        self.0.transform_point2(p.into()).into()
    }

    /// Apply the linear part only; vectors ignore translation.
    pub fn apply_vector(&self, v: Vector) -> Vector {
        self.0.transform_vector2(v.into()).into()
    }

    pub fn abs_diff_eq(&self, other: &Affine, max_abs_diff: f64) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }

    pub fn as_daffine2(&self) -> &DAffine2 {
        &self.0
    }
}

impl From<DAffine2> for Affine {
    fn from(t: DAffine2) -> Self {
        Affine(t)
    }
}

/// Values that can be moved around by an affine map.
///
/// Only [`Transformable::apply_transform`] is required; the rest are
/// shorthands for the common transforms.
pub trait Transformable: Sized {
    fn apply_transform(&self, t: &Affine) -> Self;

    fn scale(&self, factor: f64) -> Self {
        self.apply_transform(&Affine::uniform_scale(factor))
    }

    fn scale_x(&self, factor: f64) -> Self {
        self.apply_transform(&Affine::scale(factor, 1.0))
    }

    fn scale_y(&self, factor: f64) -> Self {
        self.apply_transform(&Affine::scale(1.0, factor))
    }

    /// Rotate by `angle` radians about the origin
    fn rotate(&self, angle: f64) -> Self {
        self.apply_transform(&Affine::rotation(angle))
    }

    /// Rotate by fractions of a full turn
    fn rotate_by(&self, turns: f64) -> Self {
        self.rotate(std::f64::consts::TAU * turns)
    }

    fn reflect_x(&self) -> Self {
        self.apply_transform(&Affine::reflect_x())
    }

    fn reflect_y(&self) -> Self {
        self.apply_transform(&Affine::reflect_y())
    }

    fn shear_x(&self, lambda: f64) -> Self {
        self.apply_transform(&Affine::shear_x(lambda))
    }

    fn shear_y(&self, lambda: f64) -> Self {
        self.apply_transform(&Affine::shear_y(lambda))
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        self.apply_transform(&Affine::translation(dx, dy))
    }

    fn translate_by(&self, v: Vector) -> Self {
        self.apply_transform(&Affine::translation_by(v))
    }
}

impl Transformable for Point {
    fn apply_transform(&self, t: &Affine) -> Self {
        t.apply_point(*self)
    }
}

impl Transformable for Vector {
    fn apply_transform(&self, t: &Affine) -> Self {
        t.apply_vector(*self)
    }
}

impl Transformable for Affine {
    fn apply_transform(&self, t: &Affine) -> Self {
        t.compose(self)
    }
}
