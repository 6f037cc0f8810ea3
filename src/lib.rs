//! Declarative 2D diagrams.
//!
//! Shapes are wrapped in [`Diagram`] values and combined with `atop`,
//! `beside`, `above`, [`hcat`], [`vcat`] and friends into an immutable
//! tree. Every node can be measured: its [`Envelope`] says how far it
//! reaches in any direction, its [`Trace`] where a ray crosses its
//! boundary. Placement is computed from envelopes, so diagrams sit next
//! to each other without overlapping.
//!
//! ```
//! use easel::{circle, square, Transformable, UnitVec};
//!
//! let d = circle(1.0)?.beside(&square(2.0)?, UnitVec::EAST.to_vector())?;
//! let bb = d.get_bounding_box().expect("non-empty");
//! assert!((bb.width() - 4.0).abs() < 1e-9);
//! # let _ = d.rotate_by(0.25);
//! # Ok::<(), easel::GeometryError>(())
//! ```
//!
//! Named parts can be joined with arrows once laid out, see
//! [`Diagram::connect_outside`] and [`ArrowOpts`].
//!
//! Rendering is left to the caller: [`Diagram::to_list`] flattens a tree
//! into primitives with world transforms and effective styles, and each
//! primitive hands its shape to a [`ShapeVisitor`].

mod log;

pub mod arrow;
pub mod constructors;
pub mod debug;
pub mod defaults;
pub mod diagram;
pub mod envelope;
pub mod errors;
pub mod shapes;
pub mod style;
pub mod trace;
pub mod trail;
pub mod transform;
pub mod types;

pub use arrow::{ArrowOpts, arrow, arrow_at, arrow_between, arrow_v, dart};
pub use constructors::*;
pub use diagram::{
    Diagram, Name, Primitive, Subdiagram, cat, concat, hcat, place_at, place_on_path, vcat,
};
pub use envelope::Envelope;
pub use errors::{GeometryError, NumericError, Result};
pub use shapes::{
    ArcSegment, Image, Latex, Path, Rectangle, Segment, SegmentLike, Shape, ShapeGeometry,
    ShapeVisitor, Spacer, Text,
};
pub use style::{Dashing, Style};
pub use trace::Trace;
pub use trail::Trail;
pub use transform::{Affine, Transformable};
pub use types::{Anchor, BoundingBox, Color, ORIGIN, Point, UnitVec, Vector};
