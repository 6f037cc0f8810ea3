//! Text labels with an estimated extent.
//!
//! No font is loaded here. Width comes from a proportional advance table
//! for printable ASCII (hundredths of a nominal character cell), which is
//! close enough for layout; renderers place the real glyphs centered on
//! the origin.

use crate::defaults::CHAR_ADVANCE_RATIO;
use crate::errors::{Result, check_positive};

/// Advance width of each printable ASCII character, `' '` through `'~'`,
/// in hundredths of a character cell.
#[rustfmt::skip]
const ADVANCE: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Width of `text` in hundredths of a character cell. Characters outside
/// printable ASCII count as one full cell.
pub fn text_length(text: &str) -> u32 {
    text.chars()
        .map(|c| match c {
            ' '..='~' => ADVANCE[c as usize - 0x20] as u32,
            _ => 100,
        })
        .sum()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub font_size: f64,
}

impl Text {
    pub fn new(text: impl Into<String>, font_size: f64) -> Result<Self> {
        Ok(Text {
            text: text.into(),
            font_size: check_positive("font size", font_size)?,
        })
    }

    /// Estimated advance of the whole string
    pub fn width(&self) -> f64 {
        text_length(&self.text) as f64 * 0.01 * self.font_size * CHAR_ADVANCE_RATIO
    }

    pub fn height(&self) -> f64 {
        self.font_size
    }
}
