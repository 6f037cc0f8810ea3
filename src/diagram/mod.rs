//! The diagram tree and its geometric queries.
//!
//! A [`Diagram`] is an immutable value. Combinators build new nodes on top
//! of existing ones and share children through `Arc`, so cloning a diagram
//! is cheap and never copies geometry. Geometry is described bottom-up:
//! every node answers envelope and trace queries in its own frame, pushing
//! its children's answers through whatever transform sits between.

mod combinators;
mod connect;
mod subdiagram;

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub use combinators::{cat, concat, hcat, place_at, place_on_path, vcat};
pub use subdiagram::Subdiagram;

use crate::envelope::Envelope;
use crate::shapes::{Shape, ShapeGeometry, ShapeVisitor};
use crate::style::Style;
use crate::trace::Trace;
use crate::transform::{Affine, Transformable};
use crate::types::{BoundingBox, Color};

/// Label attached to a subdiagram for later lookup
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name(s.to_string())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name(s)
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One shape with its own style and placement
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Arc<Shape>,
    pub style: Style,
    pub transform: Affine,
}

impl Primitive {
    pub fn new(shape: impl Into<Shape>) -> Self {
        Primitive {
            shape: Arc::new(shape.into()),
            style: Style::default(),
            transform: Affine::IDENTITY,
        }
    }

    /// Visit the shape with this primitive's style. The shape arrives in
    /// its local frame; renderers apply [`Primitive::transform`] first.
    pub fn accept<V: ShapeVisitor>(&self, visitor: &mut V) -> V::Output {
        self.shape.accept(visitor, &self.style)
    }

    pub fn get_envelope(&self) -> Envelope {
        self.shape.get_envelope().apply_transform(&self.transform)
    }

    pub fn get_trace(&self) -> Trace {
        self.shape.get_trace().apply_transform(&self.transform)
    }
}

/// Overlay of children in paint order. The envelope is fixed when the
/// node is built: the union of the children, or an override from padding
/// and [`Diagram::with_envelope`].
#[derive(Debug, Clone)]
pub struct Compose {
    pub envelope: Envelope,
    pub children: Arc<[Diagram]>,
}

#[derive(Debug, Clone)]
pub struct ApplyTransform {
    pub transform: Affine,
    pub diagram: Arc<Diagram>,
}

#[derive(Debug, Clone)]
pub struct ApplyStyle {
    pub style: Style,
    pub diagram: Arc<Diagram>,
}

#[derive(Debug, Clone)]
pub struct ApplyName {
    pub name: Name,
    pub diagram: Arc<Diagram>,
}

#[derive(Debug, Clone, Default)]
pub enum Diagram {
    #[default]
    Empty,
    Primitive(Primitive),
    Compose(Compose),
    ApplyTransform(ApplyTransform),
    ApplyStyle(ApplyStyle),
    ApplyName(ApplyName),
}

impl From<Primitive> for Diagram {
    fn from(p: Primitive) -> Self {
        Diagram::Primitive(p)
    }
}

impl From<Shape> for Diagram {
    fn from(shape: Shape) -> Self {
        Diagram::Primitive(Primitive::new(shape))
    }
}

impl Diagram {
    pub fn empty() -> Self {
        Diagram::Empty
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Diagram::Empty)
    }

    /// Wrap one shape at the origin with no style
    pub fn primitive(shape: impl Into<Shape>) -> Self {
        Primitive::new(shape).into()
    }

    pub fn get_envelope(&self) -> Envelope {
        match self {
            Diagram::Empty => Envelope::empty(),
            Diagram::Primitive(p) => p.get_envelope(),
            Diagram::Compose(c) => c.envelope.clone(),
            Diagram::ApplyTransform(t) => t.diagram.get_envelope().apply_transform(&t.transform),
            Diagram::ApplyStyle(s) => s.diagram.get_envelope(),
            Diagram::ApplyName(n) => n.diagram.get_envelope(),
        }
    }

    pub fn get_trace(&self) -> Trace {
        match self {
            Diagram::Empty => Trace::empty(),
            Diagram::Primitive(p) => p.get_trace(),
            Diagram::Compose(c) => Trace::concat(c.children.iter().map(Diagram::get_trace)),
            Diagram::ApplyTransform(t) => t.diagram.get_trace().apply_transform(&t.transform),
            Diagram::ApplyStyle(s) => s.diagram.get_trace(),
            Diagram::ApplyName(n) => n.diagram.get_trace(),
        }
    }

    pub fn get_bounding_box(&self) -> Option<BoundingBox> {
        self.get_envelope().to_bounding_box()
    }

    /// Flatten to primitives in paint order, each carrying its world
    /// transform and effective style.
    pub fn to_list(&self) -> Vec<Primitive> {
        let mut out = Vec::new();
        self.collect_primitives(&Affine::IDENTITY, &Style::default(), &mut out);
        out
    }

    fn collect_primitives(&self, t: &Affine, style: &Style, out: &mut Vec<Primitive>) {
        match self {
            Diagram::Empty => {}
            Diagram::Primitive(p) => out.push(Primitive {
                shape: p.shape.clone(),
                style: p.style.merge(style),
                transform: t.compose(&p.transform),
            }),
            Diagram::Compose(c) => {
                for child in c.children.iter() {
                    child.collect_primitives(t, style, out);
                }
            }
            Diagram::ApplyTransform(a) => {
                a.diagram.collect_primitives(&t.compose(&a.transform), style, out)
            }
            Diagram::ApplyStyle(s) => s.diagram.collect_primitives(t, &s.style.merge(style), out),
            Diagram::ApplyName(n) => n.diagram.collect_primitives(t, style, out),
        }
    }

    /// Every named subdiagram, grouped by name. Within a name, entries are
    /// in paint order.
    pub fn get_sub_map(&self) -> BTreeMap<Name, Vec<Subdiagram>> {
        let mut map = BTreeMap::new();
        self.collect_subdiagrams(&Affine::IDENTITY, &Style::default(), &mut map);
        map
    }

    fn collect_subdiagrams(
        &self,
        t: &Affine,
        style: &Style,
        map: &mut BTreeMap<Name, Vec<Subdiagram>>,
    ) {
        match self {
            Diagram::Empty | Diagram::Primitive(_) => {}
            Diagram::Compose(c) => {
                for child in c.children.iter() {
                    child.collect_subdiagrams(t, style, map);
                }
            }
            Diagram::ApplyTransform(a) => {
                a.diagram.collect_subdiagrams(&t.compose(&a.transform), style, map)
            }
            Diagram::ApplyStyle(s) => s.diagram.collect_subdiagrams(t, &s.style.merge(style), map),
            Diagram::ApplyName(n) => {
                map.entry(n.name.clone())
                    .or_default()
                    .push(Subdiagram::new(n.diagram.clone(), *t, style.clone()));
                n.diagram.collect_subdiagrams(t, style, map);
            }
        }
    }

    /// First subdiagram carrying `name`, in paint order
    pub fn get_subdiagram(&self, name: &str) -> Option<Subdiagram> {
        self.find_subdiagram(name, &Affine::IDENTITY, &Style::default())
    }

    fn find_subdiagram(&self, name: &str, t: &Affine, style: &Style) -> Option<Subdiagram> {
        match self {
            Diagram::Empty | Diagram::Primitive(_) => None,
            Diagram::Compose(c) => c
                .children
                .iter()
                .find_map(|child| child.find_subdiagram(name, t, style)),
            Diagram::ApplyTransform(a) => {
                a.diagram.find_subdiagram(name, &t.compose(&a.transform), style)
            }
            Diagram::ApplyStyle(s) => s.diagram.find_subdiagram(name, t, &s.style.merge(style)),
            Diagram::ApplyName(n) if n.name.as_str() == name => {
                Some(Subdiagram::new(n.diagram.clone(), *t, style.clone()))
            }
            Diagram::ApplyName(n) => n.diagram.find_subdiagram(name, t, style),
        }
    }

    /// World bounding box of the first subdiagram named `name`
    pub fn get_subdiagram_bounding_box(&self, name: &str) -> Option<BoundingBox> {
        self.get_subdiagram(name).and_then(|sub| sub.bounding_box())
    }

    /// Attach `name` so the diagram can be found after composition.
    pub fn named(&self, name: impl Into<Name>) -> Diagram {
        Diagram::ApplyName(ApplyName {
            name: name.into(),
            diagram: Arc::new(self.clone()),
        })
    }

    pub fn apply_style(&self, style: &Style) -> Diagram {
        match self {
            Diagram::Empty => Diagram::Empty,
            Diagram::ApplyStyle(s) => Diagram::ApplyStyle(ApplyStyle {
                style: s.style.merge(style),
                diagram: s.diagram.clone(),
            }),
            _ => Diagram::ApplyStyle(ApplyStyle {
                style: style.clone(),
                diagram: Arc::new(self.clone()),
            }),
        }
    }

    pub fn line_width(&self, width: f64) -> Diagram {
        self.apply_style(&Style::new().with_line_width(width))
    }

    pub fn line_color(&self, color: Color) -> Diagram {
        self.apply_style(&Style::new().with_line_color(color))
    }

    pub fn fill_color(&self, color: Color) -> Diagram {
        self.apply_style(&Style::new().with_fill_color(color))
    }

    pub fn fill_opacity(&self, opacity: f64) -> Diagram {
        self.apply_style(&Style::new().with_fill_opacity(opacity))
    }

    pub fn dashing(&self, lengths: Vec<f64>, offset: f64) -> Diagram {
        self.apply_style(&Style::new().with_dashing(lengths, offset))
    }
}

impl Transformable for Diagram {
    /// Primitives and transform nodes absorb `t`; every other node is
    /// wrapped.
    fn apply_transform(&self, t: &Affine) -> Self {
        match self {
            Diagram::Empty => Diagram::Empty,
            Diagram::Primitive(p) => Diagram::Primitive(Primitive {
                transform: t.compose(&p.transform),
                ..p.clone()
            }),
            Diagram::ApplyTransform(a) => Diagram::ApplyTransform(ApplyTransform {
                transform: t.compose(&a.transform),
                diagram: a.diagram.clone(),
            }),
            _ => Diagram::ApplyTransform(ApplyTransform {
                transform: *t,
                diagram: Arc::new(self.clone()),
            }),
        }
    }
}
