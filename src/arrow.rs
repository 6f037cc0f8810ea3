//! Arrows: a stroked shaft with a filled head at its end.
//!
//! Every arrow is first built lying along +x with its tail at the origin,
//! then turned and moved into place. Heads are drawn once, tip at the
//! origin and pointing along +x.

use crate::defaults::{ARROW_HEAD_FILL, ARROW_HEAD_LENGTH, ARROW_HEAD_WIDTH, DART_NOTCH};
use crate::diagram::Diagram;
use crate::errors::{Result, check_finite};
use crate::log::trace;
use crate::shapes::{ArcSegment, Path};
use crate::style::Style;
use crate::trail::Trail;
use crate::transform::Transformable;
use crate::types::{Color, ORIGIN, Point, Vector};

/// How an arrow is drawn.
#[derive(Debug, Clone, Default)]
pub struct ArrowOpts {
    pub head_style: Style,
    /// Gap between the head's tip and the end point
    pub head_pad: f64,
    /// Gap between the start point and the shaft
    pub tail_pad: f64,
    /// Head to draw instead of [`dart`]. Its tip sits at the origin and it
    /// points along +x.
    pub head_arrow: Option<Diagram>,
    pub shaft_style: Style,
    /// Shaft outline, scaled uniformly to the shaft's length. The shaft is
    /// an arc of `arc_height` when unset.
    pub trail: Option<Trail>,
    /// Bow of the shaft, as in [`ArcSegment::arc_between`]. Zero draws a
    /// straight shaft.
    pub arc_height: f64,
}

/// Notched arrow head, tip at the origin pointing along +x.
pub fn dart() -> Diagram {
    let (l, w) = (ARROW_HEAD_LENGTH, ARROW_HEAD_WIDTH / 2.0);
    Diagram::primitive(Path::from_list_of_tuples(&[
        (0.0, 0.0),
        (-l, -w),
        (-l * (1.0 - DART_NOTCH), 0.0),
        (-l, w),
        (0.0, 0.0),
    ]))
}

/// Arrow of `length` along +x, tail at the origin.
///
/// The head is turned to follow the shaft where it ends, so bowed or
/// trail-shaped shafts still point into their end point.
pub fn arrow(length: f64, opts: &ArrowOpts) -> Result<Diagram> {
    let length = check_finite("arrow length", length)?;
    let shaft_len = length - opts.head_pad - opts.tail_pad;

    let (shaft, heading) = match &opts.trail {
        None => {
            let seg = ArcSegment::arc_between(ORIGIN, Point::new(shaft_len, 0.0), opts.arc_height)?;
            let heading = seg.end_tangent().angle();
            (Diagram::primitive(Path::new(vec![seg])), heading)
        }
        Some(trail) => {
            let shaft = trail.stroke().scale_uniform_to_x(shaft_len)?.fill_opacity(0.0);
            let heading = trail.offsets.last().map_or(0.0, |v| v.angle());
            (shaft, heading)
        }
    };
    trace!(length, shaft_len, heading, "arrow");

    // Styles from the options are inner, so they win over the head's
    // default fill.
    let head = opts
        .head_arrow
        .clone()
        .unwrap_or_else(dart)
        .apply_style(&opts.head_style)
        .fill_color(Color::named(ARROW_HEAD_FILL))
        .line_width(0.0)
        .rotate(heading)
        .translate(shaft_len + opts.tail_pad, 0.0);

    Ok(shaft
        .apply_style(&opts.shaft_style)
        .translate(opts.tail_pad, 0.0)
        .atop(&head))
}

/// Arrow from the origin along `v`
pub fn arrow_v(v: Vector, opts: &ArrowOpts) -> Result<Diagram> {
    Ok(arrow(v.length(), opts)?.rotate(v.angle()))
}

/// Arrow from `base` along `v`
pub fn arrow_at(base: Point, v: Vector, opts: &ArrowOpts) -> Result<Diagram> {
    Ok(arrow_v(v, opts)?.translate_by(base.to_vector()))
}

/// Arrow from `start` to `end`
pub fn arrow_between(start: Point, end: Point, opts: &ArrowOpts) -> Result<Diagram> {
    arrow_at(start, end - start, opts)
}
