//! Stroke and fill attributes.
//!
//! Every field is optional; unset fields inherit from enclosing styles and
//! finally fall back to the constants in [`crate::defaults`]. Styles nest
//! like CSS: the style closest to a primitive wins.

use crate::defaults::{LINE_COLOR, LINE_WIDTH};
use crate::types::Color;

/// Dash lengths (alternating on/off) and the starting offset into them
#[derive(Debug, Clone, PartialEq)]
pub struct Dashing {
    pub lengths: Vec<f64>,
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub line_width: Option<f64>,
    pub line_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub fill_opacity: Option<f64>,
    pub dashing: Option<Dashing>,
}

impl Style {
    pub fn new() -> Self {
        Style::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Keep every field set on `self` and take the rest from `outer`.
    pub fn merge(&self, outer: &Style) -> Style {
        Style {
            line_width: self.line_width.or(outer.line_width),
            line_color: self.line_color.clone().or_else(|| outer.line_color.clone()),
            fill_color: self.fill_color.clone().or_else(|| outer.fill_color.clone()),
            fill_opacity: self.fill_opacity.or(outer.fill_opacity),
            dashing: self.dashing.clone().or_else(|| outer.dashing.clone()),
        }
    }

    pub fn with_line_width(self, width: f64) -> Style {
        Style {
            line_width: Some(width),
            ..self
        }
    }

    pub fn with_line_color(self, color: Color) -> Style {
        Style {
            line_color: Some(color),
            ..self
        }
    }

    pub fn with_fill_color(self, color: Color) -> Style {
        Style {
            fill_color: Some(color),
            ..self
        }
    }

    pub fn with_fill_opacity(self, opacity: f64) -> Style {
        Style {
            fill_opacity: Some(opacity),
            ..self
        }
    }

    pub fn with_dashing(self, lengths: Vec<f64>, offset: f64) -> Style {
        Style {
            dashing: Some(Dashing { lengths, offset }),
            ..self
        }
    }

    /// Line width, or the default when unset
    pub fn effective_line_width(&self) -> f64 {
        self.line_width.unwrap_or(LINE_WIDTH)
    }

    /// Line colour, or the default when unset
    pub fn effective_line_color(&self) -> Color {
        self.line_color
            .clone()
            .unwrap_or_else(|| Color::named(LINE_COLOR))
    }
}
