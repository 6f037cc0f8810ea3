//! Placement, alignment and padding.
//!
//! Everything here is derived from two operations: `atop`, which overlays
//! without moving anything, and `beside`, which first slides the second
//! diagram along a direction until the two envelopes just touch.

use std::sync::Arc;

use crate::envelope::Envelope;
use crate::errors::{GeometryError, Result, check_finite};
use crate::log::debug;
use crate::shapes::{Path, Spacer};
use crate::transform::Transformable;
use crate::types::{BoundingBox, Point, UnitVec, Vector};

use super::{Compose, Diagram};

impl Diagram {
    /// Overlay `other` on top of `self`. Neither moves; the result keeps
    /// `self`'s origin and `other` paints last.
    pub fn atop(&self, other: &Diagram) -> Diagram {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Diagram::Compose(Compose {
            envelope: self.get_envelope().union(&other.get_envelope()),
            children: Arc::from([self.clone(), other.clone()]),
        })
    }

    /// Translation that puts `other` against `self` along `u`.
    fn touching_offset(&self, other: &Diagram, u: UnitVec) -> Vector {
        let (e1, e2) = (self.get_envelope(), other.get_envelope());
        if e1.is_empty() || e2.is_empty() {
            debug!(dx = u.dx(), dy = u.dy(), "beside with an empty operand");
        }
        u * e1.at(u) - (-u) * e2.at(-u)
    }

    pub(crate) fn beside_unit(&self, other: &Diagram, u: UnitVec) -> Diagram {
        self.atop(&other.translate_by(self.touching_offset(other, u)))
    }

    /// Place `other` next to `self` in direction `dir`, envelopes touching.
    ///
    /// Fails only for a zero direction.
    pub fn beside(&self, other: &Diagram, dir: Vector) -> Result<Diagram> {
        Ok(self.beside_unit(other, dir.normalized()?))
    }

    /// `other` moved so that it would touch `self` along `dir`, without
    /// combining the two.
    pub fn juxtapose(&self, other: &Diagram, dir: Vector) -> Result<Diagram> {
        let u = dir.normalized()?;
        Ok(other.translate_by(self.touching_offset(other, u)))
    }

    /// `other` to the right of `self`
    pub fn beside_right(&self, other: &Diagram) -> Diagram {
        self.beside_unit(other, UnitVec::EAST)
    }

    /// `other` below `self`
    pub fn above(&self, other: &Diagram) -> Diagram {
        self.beside_unit(other, UnitVec::SOUTH)
    }

    /// Move the origin to the envelope boundary in direction `dir`.
    pub fn align(&self, dir: Vector) -> Result<Diagram> {
        Ok(self.align_unit(dir.normalized()?))
    }

    fn align_unit(&self, u: UnitVec) -> Diagram {
        let e = self.get_envelope();
        if e.is_empty() {
            return self.clone();
        }
        self.translate_by(-(u * e.at(u)))
    }

    /// Origin on the top edge
    pub fn align_t(&self) -> Diagram {
        self.align_unit(UnitVec::NORTH)
    }

    pub fn align_b(&self) -> Diagram {
        self.align_unit(UnitVec::SOUTH)
    }

    pub fn align_l(&self) -> Diagram {
        self.align_unit(UnitVec::WEST)
    }

    pub fn align_r(&self) -> Diagram {
        self.align_unit(UnitVec::EAST)
    }

    pub fn align_tl(&self) -> Diagram {
        self.align_t().align_l()
    }

    pub fn align_tr(&self) -> Diagram {
        self.align_t().align_r()
    }

    pub fn align_bl(&self) -> Diagram {
        self.align_b().align_l()
    }

    pub fn align_br(&self) -> Diagram {
        self.align_b().align_r()
    }

    /// Move the bounding box center to the origin.
    pub fn center_xy(&self) -> Diagram {
        match self.get_bounding_box() {
            Some(bb) => {
                let c = bb.center();
                self.translate(-c.x, -c.y)
            }
            None => self.clone(),
        }
    }

    /// Overlay `other` with its origin moved to the center of `self`'s
    /// bounding box. An empty `self` leaves `other` in place.
    pub fn at_center(&self, other: &Diagram) -> Diagram {
        match self.get_bounding_box() {
            Some(bb) => self.atop(&other.translate_by(bb.center().to_vector())),
            None => self.atop(other),
        }
    }

    /// Same drawing, with its envelope replaced by `other`'s
    pub fn with_envelope(&self, other: &Diagram) -> Diagram {
        self.with_envelope_of(other.get_envelope())
    }

    fn with_envelope_of(&self, envelope: Envelope) -> Diagram {
        Diagram::Compose(Compose {
            envelope,
            children: Arc::from([self.clone()]),
        })
    }

    fn pad_box(&self, left: f64, top: f64, right: f64, bottom: f64) -> Diagram {
        match self.get_bounding_box() {
            Some(bb) => self.with_envelope_of(Envelope::from_bounding_box(
                &bb.pad(left, top, right, bottom),
            )),
            None => self.clone(),
        }
    }

    /// Grow the bounding box by `extra` on every side. The envelope
    /// becomes that box.
    pub fn pad(&self, extra: f64) -> Diagram {
        self.pad_box(extra, extra, extra, extra)
    }

    pub fn pad_l(&self, extra: f64) -> Diagram {
        self.pad_box(extra, 0.0, 0.0, 0.0)
    }

    pub fn pad_t(&self, extra: f64) -> Diagram {
        self.pad_box(0.0, extra, 0.0, 0.0)
    }

    pub fn pad_r(&self, extra: f64) -> Diagram {
        self.pad_box(0.0, 0.0, extra, 0.0)
    }

    pub fn pad_b(&self, extra: f64) -> Diagram {
        self.pad_box(0.0, 0.0, 0.0, extra)
    }

    /// Scale uniformly so the bounding box is `width` wide.
    pub fn scale_uniform_to_x(&self, width: f64) -> Result<Diagram> {
        let width = check_finite("target width", width)?;
        let current = self.extent(BoundingBox::width)?;
        Ok(self.scale(width / current))
    }

    /// Scale uniformly so the bounding box is `height` tall.
    pub fn scale_uniform_to_y(&self, height: f64) -> Result<Diagram> {
        let height = check_finite("target height", height)?;
        let current = self.extent(BoundingBox::height)?;
        Ok(self.scale(height / current))
    }

    fn extent(&self, measure: fn(&BoundingBox) -> f64) -> Result<f64> {
        match self.get_bounding_box().map(|bb| measure(&bb)) {
            Some(size) if size.abs() > crate::defaults::EPSILON => Ok(size),
            _ => Err(GeometryError::DegenerateGeometry {
                reason: "cannot scale a diagram with no extent",
            }),
        }
    }
}

/// Overlay all diagrams in order; later ones paint on top.
pub fn concat(diagrams: impl IntoIterator<Item = Diagram>) -> Diagram {
    let children: Vec<Diagram> = diagrams.into_iter().filter(|d| !d.is_empty()).collect();
    match children.len() {
        0 => Diagram::Empty,
        1 => children.into_iter().next().unwrap_or_default(),
        _ => Diagram::Compose(Compose {
            envelope: Envelope::concat(children.iter().map(Diagram::get_envelope)),
            children: Arc::from(children),
        }),
    }
}

fn cat_unit(diagrams: impl IntoIterator<Item = Diagram>, u: UnitVec, strut: &Diagram) -> Diagram {
    let mut diagrams = diagrams.into_iter();
    let Some(first) = diagrams.next() else {
        return Diagram::Empty;
    };
    diagrams.fold(first, |acc, d| acc.beside_unit(strut, u).beside_unit(&d, u))
}

fn strut(length: f64) -> Diagram {
    if length > 0.0 && length.is_finite() {
        Diagram::primitive(Spacer {
            width: length,
            height: 0.0,
        })
    } else {
        Diagram::Empty
    }
}

/// Stack diagrams along `dir`, `sep` apart. A non-positive `sep` leaves
/// no gap.
pub fn cat(diagrams: impl IntoIterator<Item = Diagram>, dir: Vector, sep: f64) -> Result<Diagram> {
    let u = dir.normalized()?;
    let strut = strut(sep).rotate(u.angle());
    Ok(cat_unit(diagrams, u, &strut))
}

/// Left to right, `sep` apart
pub fn hcat(diagrams: impl IntoIterator<Item = Diagram>, sep: f64) -> Diagram {
    cat_unit(diagrams, UnitVec::EAST, &strut(sep))
}

/// Top to bottom, `sep` apart
pub fn vcat(diagrams: impl IntoIterator<Item = Diagram>, sep: f64) -> Diagram {
    cat_unit(diagrams, UnitVec::SOUTH, &strut(sep).rotate_by(0.25))
}

/// Each diagram translated to its point; extra diagrams or points are
/// ignored.
pub fn place_at(diagrams: impl IntoIterator<Item = Diagram>, points: &[Point]) -> Diagram {
    concat(
        diagrams
            .into_iter()
            .zip(points)
            .map(|(d, p)| d.translate(p.x, p.y)),
    )
}

/// Each diagram placed on the successive vertices of `path`.
pub fn place_on_path(diagrams: impl IntoIterator<Item = Diagram>, path: &Path) -> Diagram {
    place_at(diagrams, &path.points())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rectangle;

    fn rect(w: f64, h: f64) -> Diagram {
        Diagram::primitive(Rectangle::new(w, h).unwrap())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn at_center_places_origin_on_box_center() {
        let frame = rect(4.0, 2.0).translate(3.0, 1.0).align_l();
        let d = frame.at_center(&rect(1.0, 1.0));
        let prims = d.to_list();
        assert_eq!(prims.len(), 2);
        let center = frame.get_bounding_box().unwrap().center();
        assert!(prims[1].transform.apply_point(Point::new(0.0, 0.0)).distance(center) < 1e-9);
        assert!(close(d.get_envelope().width(), 4.0));
        let alone = Diagram::Empty.at_center(&rect(1.0, 1.0));
        assert!(matches!(alone, Diagram::Primitive(_)));
    }

    #[test]
    fn atop_with_empty_is_identity() {
        let d = rect(1.0, 1.0);
        assert!(matches!(d.atop(&Diagram::Empty), Diagram::Primitive(_)));
        assert!(matches!(Diagram::Empty.atop(&d), Diagram::Primitive(_)));
    }

    #[test]
    fn atop_paints_other_last() {
        let a = rect(1.0, 1.0).named("a");
        let b = rect(2.0, 2.0).named("b");
        let d = a.atop(&b);
        let prims = d.to_list();
        assert_eq!(prims.len(), 2);
        assert_eq!(prims[1].get_envelope().width(), 2.0);
    }

    #[test]
    fn beside_touches_without_gap() {
        let d = rect(2.0, 2.0).beside_right(&rect(4.0, 2.0));
        let bb = d.get_bounding_box().unwrap();
        assert!(close(bb.left(), -1.0));
        assert!(close(bb.right(), 5.0));
        // The second rectangle's left edge sits on the first one's right.
        let second = &d.to_list()[1];
        assert!(close(second.get_envelope().to_bounding_box().unwrap().left(), 1.0));
    }

    #[test]
    fn beside_rejects_zero_direction() {
        assert!(rect(1.0, 1.0).beside(&rect(1.0, 1.0), Vector::ZERO).is_err());
    }

    #[test]
    fn above_stacks_downward() {
        let d = rect(1.0, 2.0).above(&rect(1.0, 2.0));
        let bb = d.get_bounding_box().unwrap();
        assert!(close(bb.top(), -1.0));
        assert!(close(bb.bottom(), 3.0));
    }

    #[test]
    fn juxtapose_moves_only_the_other() {
        let other = rect(2.0, 2.0).juxtapose(&rect(2.0, 2.0), Vector::new(0.0, -1.0)).unwrap();
        let bb = other.get_bounding_box().unwrap();
        assert!(close(bb.bottom(), -1.0));
        assert!(close(bb.top(), -3.0));
    }

    #[test]
    fn hcat_inserts_separation() {
        let d = hcat([rect(1.0, 1.0), rect(1.0, 1.0), rect(1.0, 1.0)], 0.5);
        assert!(close(d.get_envelope().width(), 4.0));
        assert_eq!(d.to_list().len(), 5);
        let d = hcat([rect(1.0, 1.0), rect(1.0, 1.0)], 0.0);
        assert!(close(d.get_envelope().width(), 2.0));
        assert!(hcat(Vec::new(), 1.0).is_empty());
    }

    #[test]
    fn vcat_stacks_with_separation() {
        let d = vcat([rect(1.0, 1.0), rect(1.0, 2.0)], 1.0);
        assert!(close(d.get_envelope().height(), 4.0));
        assert!(close(d.get_envelope().width(), 1.0));
    }

    #[test]
    fn cat_along_diagonal() {
        let d = cat([rect(1.0, 1.0), rect(1.0, 1.0)], Vector::new(1.0, 1.0), 0.0).unwrap();
        let bb = d.get_bounding_box().unwrap();
        // Corners meet on the diagonal.
        assert!(close(bb.right(), 1.5));
        assert!(close(bb.bottom(), 1.5));
    }

    #[test]
    fn concat_skips_empty_diagrams() {
        assert!(concat([Diagram::Empty, Diagram::Empty]).is_empty());
        assert!(matches!(concat([Diagram::Empty, rect(1.0, 1.0)]), Diagram::Primitive(_)));
        let d = concat([rect(1.0, 1.0), rect(3.0, 1.0), rect(1.0, 5.0)]);
        assert!(close(d.get_envelope().width(), 3.0));
        assert!(close(d.get_envelope().height(), 5.0));
    }

    #[test]
    fn place_on_path_uses_vertices() {
        let path = Path::from_list_of_tuples(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
        let d = place_on_path(std::iter::repeat_n(rect(1.0, 1.0), 3), &path);
        let centers: Vec<Point> = d
            .to_list()
            .iter()
            .map(|p| p.transform.apply_point(Point::new(0.0, 0.0)))
            .collect();
        assert_eq!(centers, vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 3.0)]);
    }

    #[test]
    fn alignment_moves_origin_to_edges() {
        let d = rect(2.0, 4.0);
        let bb = d.align_tl().get_bounding_box().unwrap();
        assert!(close(bb.left(), 0.0));
        assert!(close(bb.top(), 0.0));
        let bb = d.align_br().get_bounding_box().unwrap();
        assert!(close(bb.right(), 0.0));
        assert!(close(bb.bottom(), 0.0));
        let bb = d.align(Vector::new(1.0, 0.0)).unwrap().get_bounding_box().unwrap();
        assert!(close(bb.right(), 0.0));
    }

    #[test]
    fn center_xy_recenters() {
        let d = rect(2.0, 2.0).translate(5.0, -3.0).center_xy();
        let c = d.get_bounding_box().unwrap().center();
        assert!(close(c.x, 0.0) && close(c.y, 0.0));
    }

    #[test]
    fn padding_grows_the_envelope_only() {
        let d = rect(2.0, 2.0).pad(1.0);
        assert!(close(d.get_envelope().width(), 4.0));
        assert_eq!(d.to_list().len(), 1);
        let d = rect(2.0, 2.0).pad_l(1.0).pad_b(2.0);
        let bb = d.get_bounding_box().unwrap();
        assert!(close(bb.left(), -2.0));
        assert!(close(bb.bottom(), 3.0));
        assert!(close(bb.right(), 1.0));
    }

    #[test]
    fn with_envelope_borrows_extent() {
        let d = rect(1.0, 1.0).with_envelope(&rect(10.0, 10.0));
        assert!(close(d.get_envelope().width(), 10.0));
        assert!(d.get_trace().trace(Point::new(-4.0, 0.0), Vector::new(1.0, 0.0)).len() == 2);
    }

    #[test]
    fn scale_to_target_size() {
        let d = rect(2.0, 1.0).scale_uniform_to_x(6.0).unwrap();
        assert!(close(d.get_envelope().width(), 6.0));
        assert!(close(d.get_envelope().height(), 3.0));
        let d = rect(2.0, 1.0).scale_uniform_to_y(2.0).unwrap();
        assert!(close(d.get_envelope().width(), 4.0));
        assert!(Diagram::Empty.scale_uniform_to_x(1.0).is_err());
    }
}
