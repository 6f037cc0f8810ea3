//! Overlays for inspecting layout: origins, envelopes, bounding boxes,
//! `beside` placement and subdiagram names, all drawn in red.

use crate::constructors::circle;
use crate::defaults::{DEBUG_DASH, ORIGIN_MARKER_MIN};
use crate::diagram::{Diagram, concat};
use crate::errors::Result;
use crate::shapes::{Path, Text};
use crate::transform::Transformable;
use crate::types::{Color, ORIGIN, Vector};

fn red() -> Color {
    Color::named("red")
}

fn blue() -> Color {
    Color::named("blue")
}

impl Diagram {
    /// Red dot at the local origin.
    pub fn show_origin(&self) -> Diagram {
        let envelope = self.get_envelope();
        if envelope.is_empty() {
            return self.clone();
        }
        let size = ORIGIN_MARKER_MIN.max(envelope.height().min(envelope.width()) / 50.0);
        match circle(size) {
            Ok(marker) => self.atop(&marker.line_color(red())),
            Err(_) => self.clone(),
        }
    }

    /// Outline of the envelope sampled every `angle` degrees, with the
    /// supporting line at each sample dashed. With `phantom` the overlay
    /// does not count toward the envelope.
    pub fn show_envelope(&self, angle: f64, phantom: bool) -> Diagram {
        let envelope = self.get_envelope();
        if envelope.is_empty() {
            return self.clone();
        }
        let outline = Diagram::primitive(Path::from_points(&envelope.to_path(angle)))
            .fill_opacity(0.0)
            .line_color(red());
        let supports = concat(
            envelope
                .to_segments(angle)
                .into_iter()
                .map(|seg| Diagram::primitive(Path::new(vec![seg.into()]))),
        )
        .line_color(red())
        .dashing(vec![DEBUG_DASH, DEBUG_DASH], 0.0);
        let shown = self.atop(&outline.atop(&supports));
        if phantom { shown.with_envelope(self) } else { shown }
    }

    /// Bounding box drawn around the diagram.
    pub fn show_bounding_box(&self) -> Diagram {
        let Some(bb) = self.get_bounding_box() else {
            return self.clone();
        };
        let c = bb.center();
        let frame = Diagram::primitive(Path::rectangle(bb.width(), bb.height()))
            .translate(c.x, c.y)
            .fill_opacity(0.0)
            .line_color(red());
        self.atop(&frame)
    }

    /// `self.beside(other, dir)` annotated with both envelope vectors and
    /// the separating line between the diagrams.
    pub fn show_beside(&self, other: &Diagram, dir: Vector) -> Result<Diagram> {
        let u = dir.normalized()?.to_vector();
        let v1 = self.get_envelope().envelope_v(u)?;
        let v2 = other.get_envelope().envelope_v(-u)?;
        let arm = |v: Vector| {
            Diagram::primitive(Path::from_points(&[ORIGIN, ORIGIN + v]))
                .line_color(red())
                .dashing(vec![DEBUG_DASH, DEBUG_DASH], 0.0)
                .line_width(DEBUG_DASH)
        };
        let split = Diagram::primitive(Path::from_points(&[
            ORIGIN + v1 + u.perpendicular(),
            ORIGIN + v1 - u.perpendicular(),
        ]))
        .line_color(blue())
        .line_width(2.0 * DEBUG_DASH);
        let one = self.show_origin().atop(&arm(v1)).atop(&split).with_envelope(self);
        let two = other.show_origin().atop(&arm(v2)).with_envelope(other);
        one.beside(&two, u)
    }

    /// Every subdiagram name written at its location.
    pub fn show_labels(&self, font_size: f64) -> Result<Diagram> {
        let mut labels = Vec::new();
        for (name, subs) in self.get_sub_map() {
            for sub in subs {
                let p = sub.location();
                let label = Diagram::primitive(Text::new(name.as_str(), font_size)?)
                    .fill_color(red())
                    .translate(p.x, p.y);
                labels.push(label);
            }
        }
        Ok(self.atop(&concat(labels)))
    }
}
