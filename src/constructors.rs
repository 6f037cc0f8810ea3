//! Builders for primitive diagrams.
//!
//! Every shape is centered on its local origin unless noted. Builders that
//! take sizes validate them and return [`Result`]; the rest cannot fail.

use crate::diagram::{Diagram, Primitive};
use crate::errors::{Result, check_finite, check_non_negative};
use crate::shapes::{ArcSegment, Image, Latex, Path, Rectangle, Shape, Spacer, Text};
use crate::style::Style;
use crate::transform::Transformable;
use crate::types::Point;

pub fn empty() -> Diagram {
    Diagram::Empty
}

/// Circle of `radius` around the origin
pub fn circle(radius: f64) -> Result<Diagram> {
    Ok(Diagram::primitive(Path::circle(radius)?))
}

/// Arc of the circle of `radius`, from `angle0` to `angle1` radians
pub fn arc(radius: f64, angle0: f64, angle1: f64) -> Result<Diagram> {
    let radius = check_non_negative("arc radius", radius)?;
    let angle1 = check_finite("arc end angle", angle1)?;
    let seg = ArcSegment::new(1.0, angle0, angle1 - angle0)?;
    Ok(Diagram::primitive(Path::new(vec![seg.scale(radius).into()])))
}

/// Arc from `p` to `q` bowing `height` away from the chord, see
/// [`ArcSegment::arc_between`].
pub fn arc_between(p: impl Into<Point>, q: impl Into<Point>, height: f64) -> Result<Diagram> {
    let seg = ArcSegment::arc_between(p.into(), q.into(), height)?;
    Ok(Diagram::primitive(Path::new(vec![seg])))
}

pub fn rectangle(width: f64, height: f64) -> Result<Diagram> {
    Ok(Diagram::primitive(Rectangle::new(width, height)?))
}

/// Rectangle with corners rounded to `radius`
pub fn rounded_rectangle(width: f64, height: f64, radius: f64) -> Result<Diagram> {
    Ok(Diagram::primitive(Rectangle::new(width, height)?.with_radius(radius)?))
}

pub fn square(side: f64) -> Result<Diagram> {
    rectangle(side, side)
}

/// Polygon with `sides` vertices on a circle of `radius`, turned by
/// `rotation` radians
pub fn polygon(sides: usize, radius: f64, rotation: f64) -> Result<Diagram> {
    Ok(Diagram::primitive(Path::polygon(sides, radius, rotation)?))
}

pub fn regular_polygon(sides: usize, side_length: f64) -> Result<Diagram> {
    Ok(Diagram::primitive(Path::regular_polygon(sides, side_length)?))
}

/// Equilateral triangle with sides of `width`
pub fn triangle(width: f64) -> Result<Diagram> {
    regular_polygon(3, width)
}

pub fn hrule(length: f64) -> Diagram {
    Diagram::primitive(Path::hrule(length))
}

pub fn vrule(length: f64) -> Diagram {
    Diagram::primitive(Path::vrule(length))
}

/// Polyline through the given coordinates
pub fn make_path(coords: &[(f64, f64)]) -> Diagram {
    Diagram::primitive(Path::from_list_of_tuples(coords))
}

pub fn text(text: impl Into<String>, font_size: f64) -> Result<Diagram> {
    Ok(Diagram::primitive(Text::new(text, font_size)?))
}

/// Image of the given size; the file is read by the renderer.
pub fn image(local_path: impl Into<String>, width: f64, height: f64) -> Result<Diagram> {
    Ok(Diagram::primitive(Image::new(local_path, width, height)?))
}

pub fn latex(text: impl Into<String>) -> Diagram {
    Diagram::primitive(Latex::new(text))
}

/// Invisible box of the given size
pub fn spacer(width: f64, height: f64) -> Result<Diagram> {
    Ok(Diagram::primitive(Spacer::new(width, height)?))
}

/// Horizontal gap of `width` for use between diagrams
pub fn hstrut(width: f64) -> Result<Diagram> {
    spacer(width, 0.0)
}

/// Vertical gap of `height` for use between diagrams
pub fn vstrut(height: f64) -> Result<Diagram> {
    spacer(0.0, height)
}

/// Wrap a shape with a style already applied
pub fn primitive_with_style(shape: impl Into<Shape>, style: Style) -> Diagram {
    Diagram::Primitive(Primitive {
        style,
        ..Primitive::new(shape)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, UnitVec};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn circle_envelope_is_radius() {
        let e = circle(1.0).unwrap().get_envelope();
        assert!(close(e.at(UnitVec::EAST), 1.0));
        assert!(close(e.at(UnitVec::SOUTH), 1.0));
        assert!(circle(-1.0).is_err());
    }

    #[test]
    fn arc_spans_requested_angles() {
        let e = arc(2.0, 0.0, FRAC_PI_2).unwrap().get_envelope();
        assert!(close(e.at(UnitVec::EAST), 2.0));
        assert!(close(e.at(UnitVec::SOUTH), 2.0));
        assert!(close(e.at(UnitVec::WEST), 0.0));
        assert!(arc(-2.0, 0.0, PI).is_err());
    }

    #[test]
    fn arc_between_bows_upward() {
        let d = arc_between((0.0, 0.0), (2.0, 0.0), 1.0).unwrap();
        let bb = d.get_bounding_box().unwrap();
        assert!(close(bb.top(), -1.0));
        assert!(close(bb.bottom(), 0.0));
    }

    #[test]
    fn struts_have_extent_along_one_axis() {
        let h = hstrut(3.0).unwrap().get_envelope();
        assert_eq!(h.width(), 3.0);
        assert_eq!(h.height(), 0.0);
        let v = vstrut(2.0).unwrap().get_envelope();
        assert_eq!(v.width(), 0.0);
        assert_eq!(v.height(), 2.0);
        assert!(hstrut(-1.0).is_err());
    }

    #[test]
    fn triangle_has_equal_sides() {
        let list = triangle(2.0).unwrap().to_list();
        let Shape::Path(path) = list[0].shape.as_ref() else {
            panic!("triangle should be a path");
        };
        for seg in &path.segments {
            assert!(close((seg.q() - seg.p()).length(), 2.0));
        }
    }

    #[test]
    fn styled_primitive_keeps_style() {
        let style = Style::new().with_fill_color(Color::named("red"));
        let d = primitive_with_style(Rectangle::new(1.0, 1.0).unwrap(), style.clone());
        assert_eq!(d.to_list()[0].style, style);
    }

    #[test]
    fn make_path_links_points() {
        let d = make_path(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let bb = d.get_bounding_box().unwrap();
        assert_eq!(bb.width(), 2.0);
        assert_eq!(bb.height(), 1.0);
    }
}
