//! Lines drawn between named subdiagrams.
//!
//! Each helper looks its names up in the diagram it is called on and
//! returns that diagram with an arrow painted on top, drawn with the given
//! [`ArrowOpts`]. A missing name fails fast with
//! [`GeometryError::SubdiagramNotFound`].

use crate::arrow::{ArrowOpts, arrow_between};
use crate::errors::{GeometryError, Result};
use crate::shapes::Path;
use crate::types::{Anchor, Point, Vector};

use super::{Diagram, Subdiagram};

impl Diagram {
    fn require_subdiagram(&self, name: &str) -> Result<Subdiagram> {
        self.get_subdiagram(name)
            .ok_or_else(|| GeometryError::SubdiagramNotFound { name: name.to_string() })
    }

    fn with_arrow(&self, start: Point, end: Point, opts: &ArrowOpts) -> Result<Diagram> {
        Ok(self.atop(&arrow_between(start, end, opts)?))
    }

    /// Connect two anchors (`"N"`, `"SE"`, `"C"`, ...) of the bounding
    /// boxes of the named subdiagrams, with a plain line or a default
    /// arrow.
    pub fn connect_outer(
        &self,
        name1: &str,
        anchor1: &str,
        name2: &str,
        anchor2: &str,
        arrow: bool,
    ) -> Result<Diagram> {
        let (anchor1, anchor2): (Anchor, Anchor) = (anchor1.parse()?, anchor2.parse()?);
        let start = self.anchor_point(name1, anchor1)?;
        let end = self.anchor_point(name2, anchor2)?;
        if arrow {
            return self.with_arrow(start, end, &ArrowOpts::default());
        }
        Ok(self.atop(&Diagram::primitive(Path::from_points(&[start, end]))))
    }

    fn anchor_point(&self, name: &str, anchor: Anchor) -> Result<Point> {
        let sub = self.require_subdiagram(name)?;
        match sub.bounding_box() {
            Some(bb) => Ok(bb.anchor(anchor)),
            // Nothing to measure; the location is the only point we have.
            None => Ok(sub.location()),
        }
    }

    /// Connect the locations (transformed origins) of the named subdiagrams.
    pub fn connect(&self, name1: &str, name2: &str, opts: &ArrowOpts) -> Result<Diagram> {
        let start = self.require_subdiagram(name1)?.location();
        let end = self.require_subdiagram(name2)?.location();
        self.with_arrow(start, end, opts)
    }

    /// Connect the outlines of the named subdiagrams, along the line
    /// between their locations.
    pub fn connect_outside(&self, name1: &str, name2: &str, opts: &ArrowOpts) -> Result<Diagram> {
        let (sub1, sub2) = (self.require_subdiagram(name1)?, self.require_subdiagram(name2)?);
        let (loc1, loc2) = (sub1.location(), sub2.location());
        let v = loc2 - loc1;
        let midpoint = loc1 + v / 2.0;
        let start = sub1
            .trace()
            .trace_p(midpoint, -v)
            .ok_or_else(|| GeometryError::NoIntersection { name: name1.to_string() })?;
        let end = sub2
            .trace()
            .trace_p(midpoint, v)
            .ok_or_else(|| GeometryError::NoIntersection { name: name2.to_string() })?;
        self.with_arrow(start, end, opts)
    }

    /// Connect the outermost boundary points hit by rays cast from each
    /// subdiagram's location along `v1` and `v2`.
    pub fn connect_perim(
        &self,
        name1: &str,
        name2: &str,
        v1: Vector,
        v2: Vector,
        opts: &ArrowOpts,
    ) -> Result<Diagram> {
        let (sub1, sub2) = (self.require_subdiagram(name1)?, self.require_subdiagram(name2)?);
        let start = sub1
            .trace()
            .max_trace_p(sub1.location(), v1)
            .ok_or_else(|| GeometryError::NoIntersection { name: name1.to_string() })?;
        let end = sub2
            .trace()
            .max_trace_p(sub2.location(), v2)
            .ok_or_else(|| GeometryError::NoIntersection { name: name2.to_string() })?;
        self.with_arrow(start, end, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, Shape};
    use crate::transform::Transformable;

    fn close_point(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    fn two_boxes() -> Diagram {
        let a = Diagram::primitive(Rectangle::new(2.0, 2.0).unwrap()).named("a");
        let b = Diagram::primitive(Rectangle::new(2.0, 2.0).unwrap())
            .named("b")
            .translate(6.0, 0.0);
        a.atop(&b)
    }

    /// World points of the path painted `from_end` places before the last.
    fn painted_points(d: &Diagram, from_end: usize) -> Vec<Point> {
        let list = d.to_list();
        let prim = &list[list.len() - 1 - from_end];
        let Shape::Path(path) = prim.shape.as_ref() else {
            panic!("connector should be a path, got {:?}", prim.shape);
        };
        path.points()
            .into_iter()
            .map(|p| prim.transform.apply_point(p))
            .collect()
    }

    /// The arrow shaft sits just under its head.
    fn shaft_points(d: &Diagram) -> Vec<Point> {
        painted_points(d, 1)
    }

    fn plain() -> ArrowOpts {
        ArrowOpts::default()
    }

    #[test]
    fn connect_outer_uses_anchors() {
        let d = two_boxes().connect_outer("a", "E", "b", "W", false).unwrap();
        assert_eq!(d.to_list().len(), 3);
        let pts = painted_points(&d, 0);
        assert!(close_point(pts[0], Point::new(1.0, 0.0)));
        assert!(close_point(pts[1], Point::new(5.0, 0.0)));
    }

    #[test]
    fn connect_outer_can_draw_an_arrow() {
        let d = two_boxes().connect_outer("a", "E", "b", "W", true).unwrap();
        assert_eq!(d.to_list().len(), 4);
        let pts = shaft_points(&d);
        assert!(close_point(pts[0], Point::new(1.0, 0.0)));
        assert!(close_point(pts[1], Point::new(5.0, 0.0)));
        let head = d.to_list().pop().unwrap();
        assert!(close_point(head.transform.apply_point(Point::new(0.0, 0.0)), Point::new(5.0, 0.0)));
    }

    #[test]
    fn connect_outer_reports_missing_names() {
        let err = two_boxes().connect_outer("a", "C", "zzz", "C", false).unwrap_err();
        assert_eq!(err, GeometryError::SubdiagramNotFound { name: "zzz".into() });
        let err = two_boxes().connect_outer("a", "middle", "b", "C", false).unwrap_err();
        assert!(matches!(err, GeometryError::UnknownAnchor { .. }));
    }

    #[test]
    fn connect_joins_locations() {
        let pts = shaft_points(&two_boxes().connect("a", "b", &plain()).unwrap());
        assert!(close_point(pts[0], Point::new(0.0, 0.0)));
        assert!(close_point(pts[1], Point::new(6.0, 0.0)));
    }

    #[test]
    fn connect_outside_stops_at_outlines() {
        let pts = shaft_points(&two_boxes().connect_outside("a", "b", &plain()).unwrap());
        assert!(close_point(pts[0], Point::new(1.0, 0.0)));
        assert!(close_point(pts[1], Point::new(5.0, 0.0)));
    }

    #[test]
    fn connect_outside_honours_padding() {
        let opts = ArrowOpts {
            head_pad: 0.5,
            tail_pad: 0.5,
            ..Default::default()
        };
        let pts = shaft_points(&two_boxes().connect_outside("a", "b", &opts).unwrap());
        assert!(close_point(pts[0], Point::new(1.5, 0.0)));
        assert!(close_point(pts[1], Point::new(4.5, 0.0)));
    }

    #[test]
    fn connect_perim_uses_furthest_hit() {
        let d = two_boxes()
            .connect_perim("a", "b", Vector::new(0.0, 1.0), Vector::new(0.0, -1.0), &plain())
            .unwrap();
        let pts = shaft_points(&d);
        assert!(close_point(pts[0], Point::new(0.0, 1.0)));
        assert!(close_point(pts[1], Point::new(6.0, -1.0)));
    }

    #[test]
    fn rays_that_miss_are_reported() {
        let d = two_boxes().atop(&Diagram::primitive(Path::hrule(1.0)).named("line"));
        let err = d
            .connect_perim("a", "line", Vector::new(1.0, 0.0), Vector::new(1.0, 0.0), &plain())
            .unwrap_err();
        assert_eq!(err, GeometryError::NoIntersection { name: "line".into() });
    }
}
