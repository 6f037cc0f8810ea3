//! Default sizes and numeric tolerances

/// Below this magnitude a length or determinant is treated as zero.
pub const EPSILON: f64 = 1e-9;

/// A transform whose determinant is below this fraction of its squared
/// matrix norm is treated as non-invertible.
pub const SINGULAR_DETERMINANT: f64 = 1e-12;

/// Bow heights smaller than this make `arc_between` draw a straight segment.
pub const ARC_HEIGHT_EPSILON: f64 = 1e-6;

/// Endpoint distance under which a path counts as closed.
pub const CLOSED_PATH_TOLERANCE: f64 = 1e-3;

/// Slack allowed when clipping a hit to a segment's `[0, 1]` parameter range.
pub const SEGMENT_PARAM_TOLERANCE: f64 = 1e-9;

/// Size of the placeholder box reserved for a LaTeX snippet.
pub const LATEX_PLACEHOLDER: f64 = 1e-4;

/// Angular step, in degrees, used by envelope debugging overlays.
pub const ENVELOPE_DEBUG_ANGLE: f64 = 45.0;

/// Average character advance relative to the font size
/// (0.08in advance for 0.14in text).
pub const CHAR_ADVANCE_RATIO: f64 = 0.08 / 0.14;

/// Stroke width used when no style sets one.
pub const LINE_WIDTH: f64 = 0.01;

/// Stroke colour used when no style sets one.
pub const LINE_COLOR: &str = "black";

/// Smallest radius of the origin marker drawn by debug overlays.
pub const ORIGIN_MARKER_MIN: f64 = 0.1;

/// Dash and gap length of debug overlay strokes.
pub const DEBUG_DASH: f64 = 0.01;

/// Length of the default arrow head, tip to back corners (pikchr's `arrowht`).
pub const ARROW_HEAD_LENGTH: f64 = 0.08;

/// Full base width of the default arrow head (pikchr's `arrowwid`).
pub const ARROW_HEAD_WIDTH: f64 = 0.06;

/// How far the notch at the back of a dart head reaches toward the tip,
/// as a fraction of the head length.
pub const DART_NOTCH: f64 = 0.2;

/// Fill of arrow heads when no style sets one.
pub const ARROW_HEAD_FILL: &str = "black";
