//! Shapes: the closed set of primitive geometry a diagram can hold.
//!
//! Geometry (envelope, trace) is dispatched statically through
//! [`ShapeGeometry`]; rendering goes through [`ShapeVisitor`] so backends
//! live outside this crate. Every shape is described about its own origin;
//! diagrams position it with an affine transform.

mod arc;
mod path;
mod segment;
mod text;

use std::f64::consts::{FRAC_PI_2, PI};

use enum_dispatch::enum_dispatch;

pub use arc::{ArcSegment, SegmentLike};
pub use path::Path;
pub use segment::Segment;
pub use text::{Text, text_length};

use crate::defaults::{EPSILON, LATEX_PLACEHOLDER};
use crate::envelope::Envelope;
use crate::errors::{Result, check_non_negative};
use crate::log::warn;
use crate::style::Style;
use crate::trace::Trace;
use crate::transform::Transformable;
use crate::types::BoundingBox;

/// Local-frame geometry every shape provides.
#[enum_dispatch]
pub trait ShapeGeometry {
    fn get_envelope(&self) -> Envelope;

    fn get_trace(&self) -> Trace;

    fn get_bounding_box(&self) -> Option<BoundingBox> {
        self.get_envelope().to_bounding_box()
    }
}

#[enum_dispatch(ShapeGeometry)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path(Path),
    Rectangle(Rectangle),
    Text(Text),
    Image(Image),
    Latex(Latex),
    Spacer(Spacer),
}

impl Shape {
    /// Hand the shape to the matching visitor method.
    pub fn accept<V: ShapeVisitor>(&self, visitor: &mut V, style: &Style) -> V::Output {
        match self {
            Shape::Path(p) => visitor.visit_path(p, style),
            Shape::Rectangle(r) => visitor.visit_rectangle(r, style),
            Shape::Text(t) => visitor.visit_text(t, style),
            Shape::Image(i) => visitor.visit_image(i, style),
            Shape::Latex(l) => visitor.visit_latex(l, style),
            Shape::Spacer(s) => visitor.visit_spacer(s, style),
        }
    }
}

/// Per-variant callbacks for renderers and other shape walkers.
///
/// Circles and arcs arrive through [`ShapeVisitor::visit_path`]. Rectangles
/// default to their outline path; backends with a native rounded
/// rectangle can override [`ShapeVisitor::visit_rectangle`].
pub trait ShapeVisitor {
    type Output;

    fn visit_path(&mut self, path: &Path, style: &Style) -> Self::Output;

    fn visit_rectangle(&mut self, rect: &Rectangle, style: &Style) -> Self::Output {
        self.visit_path(&rect.outline(), style)
    }

    fn visit_text(&mut self, text: &Text, style: &Style) -> Self::Output;

    fn visit_image(&mut self, image: &Image, style: &Style) -> Self::Output;

    fn visit_latex(&mut self, latex: &Latex, style: &Style) -> Self::Output;

    fn visit_spacer(&mut self, spacer: &Spacer, style: &Style) -> Self::Output;
}

impl ShapeGeometry for Path {
    fn get_envelope(&self) -> Envelope {
        Path::get_envelope(self)
    }

    fn get_trace(&self) -> Trace {
        Path::get_trace(self)
    }
}

// Box shapes share the outline of a width × height rectangle centered on
// the origin.
fn box_envelope(width: f64, height: f64) -> Envelope {
    Envelope::from_bounding_box(&BoundingBox::from_limits(
        -width / 2.0,
        -height / 2.0,
        width / 2.0,
        height / 2.0,
    ))
}

fn box_trace(width: f64, height: f64) -> Trace {
    Path::rectangle(width, height).get_trace()
}

/// Axis-aligned rectangle centered on the origin, optionally with rounded
/// corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
    pub radius: Option<f64>,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Rectangle {
            width: check_non_negative("rectangle width", width)?,
            height: check_non_negative("rectangle height", height)?,
            radius: None,
        })
    }

    /// Round the corners; the radius is capped at half the shorter side.
    pub fn with_radius(self, radius: f64) -> Result<Self> {
        let radius = check_non_negative("corner radius", radius)?;
        let cap = self.width.min(self.height) / 2.0;
        if radius > cap {
            warn!(radius, cap, "corner radius larger than half the shorter side");
        }
        Ok(Rectangle {
            radius: Some(radius),
            ..self
        })
    }

    fn corner_radius(&self) -> f64 {
        self.radius
            .unwrap_or(0.0)
            .min(self.width / 2.0)
            .min(self.height / 2.0)
    }

    /// The boundary as a path, running clockwise on screen from the top
    /// left.
    pub fn outline(&self) -> Path {
        let r = self.corner_radius();
        if r < EPSILON {
            return Path::rectangle(self.width, self.height);
        }
        let (x, y) = (self.width / 2.0, self.height / 2.0);
        let corner = |cx: f64, cy: f64, start: f64| -> SegmentLike {
            ArcSegment::unit(start, FRAC_PI_2)
                .scale(r)
                .translate(cx, cy)
                .into()
        };
        let line = |x0: f64, y0: f64, x1: f64, y1: f64| -> SegmentLike {
            Segment::new((x0, y0).into(), (x1, y1).into()).into()
        };
        Path::new(vec![
            line(-x + r, -y, x - r, -y),
            corner(x - r, -y + r, -FRAC_PI_2),
            line(x, -y + r, x, y - r),
            corner(x - r, y - r, 0.0),
            line(x - r, y, -x + r, y),
            corner(-x + r, y - r, FRAC_PI_2),
            line(-x, y - r, -x, -y + r),
            corner(-x + r, -y + r, PI),
        ])
    }
}

impl ShapeGeometry for Rectangle {
    /// Rounded corners pull the envelope in along the diagonals, matching
    /// the trace.
    fn get_envelope(&self) -> Envelope {
        if self.corner_radius() < EPSILON {
            return box_envelope(self.width, self.height);
        }
        self.outline().get_envelope()
    }

    fn get_trace(&self) -> Trace {
        self.outline().get_trace()
    }
}

/// Raster image reference; decoding is left to the renderer, so the size
/// is given up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub local_path: String,
    pub url_path: Option<String>,
    pub width: f64,
    pub height: f64,
}

impl Image {
    pub fn new(local_path: impl Into<String>, width: f64, height: f64) -> Result<Self> {
        Ok(Image {
            local_path: local_path.into(),
            url_path: None,
            width: check_non_negative("image width", width)?,
            height: check_non_negative("image height", height)?,
        })
    }

    pub fn with_url(self, url_path: impl Into<String>) -> Self {
        Image {
            url_path: Some(url_path.into()),
            ..self
        }
    }
}

impl ShapeGeometry for Image {
    fn get_envelope(&self) -> Envelope {
        box_envelope(self.width, self.height)
    }

    fn get_trace(&self) -> Trace {
        box_trace(self.width, self.height)
    }
}

/// LaTeX source, typeset by the renderer.
///
/// Until then it occupies a tiny square at the origin so that it can be
/// scaled and placed like any other shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Latex {
    pub text: String,
}

impl Latex {
    pub fn new(text: impl Into<String>) -> Self {
        Latex { text: text.into() }
    }
}

impl ShapeGeometry for Latex {
    fn get_envelope(&self) -> Envelope {
        Envelope::from_bounding_box(&BoundingBox::from_limits(
            0.0,
            0.0,
            LATEX_PLACEHOLDER,
            LATEX_PLACEHOLDER,
        ))
    }

    fn get_trace(&self) -> Trace {
        Trace::empty()
    }
}

/// Invisible box that only takes up room
#[derive(Debug, Clone, PartialEq)]
pub struct Spacer {
    pub width: f64,
    pub height: f64,
}

impl Spacer {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Spacer {
            width: check_non_negative("spacer width", width)?,
            height: check_non_negative("spacer height", height)?,
        })
    }
}

impl ShapeGeometry for Spacer {
    fn get_envelope(&self) -> Envelope {
        box_envelope(self.width, self.height)
    }

    fn get_trace(&self) -> Trace {
        Trace::empty()
    }
}

impl ShapeGeometry for Text {
    fn get_envelope(&self) -> Envelope {
        box_envelope(self.width(), self.height())
    }

    fn get_trace(&self) -> Trace {
        box_trace(self.width(), self.height())
    }
}
