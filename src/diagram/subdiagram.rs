use std::sync::Arc;

use crate::envelope::Envelope;
use crate::style::Style;
use crate::trace::Trace;
use crate::transform::Affine;
use crate::types::{BoundingBox, ORIGIN, Point};

use super::Diagram;

/// A named diagram found inside a larger one, together with the
/// transform and style in effect where the name was attached.
#[derive(Debug, Clone)]
pub struct Subdiagram {
    pub diagram: Arc<Diagram>,
    pub transform: Affine,
    pub style: Style,
}

impl Subdiagram {
    pub fn new(diagram: Arc<Diagram>, transform: Affine, style: Style) -> Self {
        Subdiagram {
            diagram,
            transform,
            style,
        }
    }

    /// Where the subdiagram's local origin ended up
    pub fn location(&self) -> Point {
        self.transform.apply_point(ORIGIN)
    }

    pub fn envelope(&self) -> Envelope {
        self.diagram.get_envelope().apply_transform(&self.transform)
    }

    pub fn trace(&self) -> Trace {
        self.diagram.get_trace().apply_transform(&self.transform)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.envelope().to_bounding_box()
    }
}
