//! Traces: ray-indexed intersection functions.
//!
//! A trace maps a ray `p + s·v` to the sorted parameters `s` at which it
//! crosses the boundary of a shape. Parameters may be negative (hits behind
//! the ray origin). Connection helpers use the nearest or furthest positive
//! hit to land on a shape's outline.

use std::fmt;
use std::sync::Arc;

use crate::log::debug;
use crate::transform::Affine;
use crate::types::{Point, Vector};

type RayFn = dyn Fn(Point, Vector) -> Vec<f64> + Send + Sync;

/// Ray-intersection function of a diagram, or the empty trace.
#[derive(Clone, Default)]
pub struct Trace {
    f: Option<Arc<RayFn>>,
}

impl fmt::Debug for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Trace(empty)")
        } else {
            f.write_str("Trace(..)")
        }
    }
}

impl Trace {
    /// Wrap a ray function. Its output need not be sorted.
    pub fn new(f: impl Fn(Point, Vector) -> Vec<f64> + Send + Sync + 'static) -> Self {
        Trace {
            f: Some(Arc::new(move |p, v| {
                let mut hits = f(p, v);
                hits.retain(|s| s.is_finite());
                hits.sort_by(f64::total_cmp);
                hits
            })),
        }
    }

    pub fn empty() -> Self {
        Trace { f: None }
    }

    pub fn is_empty(&self) -> bool {
        self.f.is_none()
    }

    /// Sorted ray parameters where `p + s·v` crosses the boundary.
    pub fn trace(&self, p: Point, v: Vector) -> Vec<f64> {
        match &self.f {
            Some(f) => f(p, v),
            None => Vec::new(),
        }
    }

    /// Merge both hit lists, keeping them sorted.
    pub fn union(&self, other: &Trace) -> Trace {
        match (&self.f, &other.f) {
            (None, _) => other.clone(),
            (_, None) => self.clone(),
            (Some(a), Some(b)) => {
                let (a, b) = (a.clone(), b.clone());
                Trace {
                    f: Some(Arc::new(move |p, v| merge_sorted(a(p, v), b(p, v)))),
                }
            }
        }
    }

    pub fn concat(traces: impl IntoIterator<Item = Trace>) -> Trace {
        let parts: Vec<Arc<RayFn>> = traces.into_iter().filter_map(|t| t.f).collect();
        match parts.len() {
            0 => Trace::empty(),
            1 => Trace { f: parts.into_iter().next() },
            _ => Trace {
                f: Some(Arc::new(move |p, v| {
                    parts
                        .iter()
                        .fold(Vec::new(), |acc, f| merge_sorted(acc, f(p, v)))
                })),
            },
        }
    }

    /// Push the trace through `t`.
    ///
    /// The query ray is pulled back into the local frame; since affine maps
    /// preserve ratios along a line, a hit at local parameter `s` lies at the
    /// same parameter on the world ray. A singular `t` flattens the shape
    /// and yields the empty trace.
    pub fn apply_transform(&self, t: &Affine) -> Trace {
        let Some(inner) = self.f.clone() else {
            return Trace::empty();
        };
        if *t == Affine::IDENTITY {
            return self.clone();
        }
        let Ok(inv) = t.inverse() else {
            debug!(
                determinant = t.determinant(),
                "trace pushed through singular transform"
            );
            return Trace::empty();
        };
        Trace {
            f: Some(Arc::new(move |p, v| {
                inner(inv.apply_point(p), inv.apply_vector(v))
            })),
        }
    }

    /// Nearest hit in front of the ray origin, as a displacement from `p`.
    pub fn trace_v(&self, p: Point, v: Vector) -> Option<Vector> {
        self.trace(p, v)
            .into_iter()
            .find(|&s| s >= 0.0)
            .map(|s| v * s)
    }

    pub fn trace_p(&self, p: Point, v: Vector) -> Option<Point> {
        self.trace_v(p, v).map(|d| p + d)
    }

    /// Furthest hit in front of the ray origin, as a displacement from `p`.
    pub fn max_trace_v(&self, p: Point, v: Vector) -> Option<Vector> {
        self.trace(p, v)
            .into_iter()
            .rev()
            .find(|&s| s >= 0.0)
            .map(|s| v * s)
    }

    pub fn max_trace_p(&self, p: Point, v: Vector) -> Option<Point> {
        self.max_trace_v(p, v).map(|d| p + d)
    }
}

fn merge_sorted(a: Vec<f64>, b: Vec<f64>) -> Vec<f64> {
    if a.is_empty() {
        return b;
    }
    if b.is_empty() {
        return a;
    }
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            out.push(a[i]);
            i += 1;
        } else {
            out.push(b[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}
