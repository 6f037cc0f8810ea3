//! Error types with diagnostics using miette
//!
//! Construction errors surface immediately; degenerate geometry met during a
//! query is usually recovered as an empty envelope or trace instead.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

/// Why a numeric parameter was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors raised by geometric construction and queries
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("degenerate geometry: {reason}")]
    #[diagnostic(code(easel::geometry::degenerate))]
    DegenerateGeometry { reason: &'static str },

    #[error("transform is not invertible (determinant {determinant})")]
    #[diagnostic(
        code(easel::transform::singular),
        help("a scale by zero collapses the plane; only translate, rotate or scale by non-zero factors")
    )]
    SingularTransform { determinant: f64 },

    #[error("no subdiagram named `{name}`")]
    #[diagnostic(
        code(easel::diagram::subdiagram_not_found),
        help("attach the name with `Diagram::named` before composing")
    )]
    SubdiagramNotFound { name: String },

    #[error("invalid {what} {value}: {kind}")]
    #[diagnostic(code(easel::shape::invalid_parameter))]
    InvalidParameter {
        what: &'static str,
        value: f64,
        kind: NumericError,
    },

    #[error("unknown anchor `{anchor}`")]
    #[diagnostic(
        code(easel::diagram::unknown_anchor),
        help("use one of N, S, E, W, NE, NW, SE, SW or C")
    )]
    UnknownAnchor { anchor: String },

    #[error("ray does not meet the boundary of subdiagram `{name}`")]
    #[diagnostic(code(easel::diagram::no_intersection))]
    NoIntersection { name: String },
}

/// Validate a finite value.
pub(crate) fn check_finite(what: &'static str, value: f64) -> Result<f64> {
    let kind = if value.is_nan() {
        NumericError::NaN
    } else if value.is_infinite() {
        NumericError::Infinite
    } else {
        return Ok(value);
    };
    Err(GeometryError::InvalidParameter { what, value, kind })
}

/// Validate a finite, non-negative value.
pub(crate) fn check_non_negative(what: &'static str, value: f64) -> Result<f64> {
    let value = check_finite(what, value)?;
    if value < 0.0 {
        return Err(GeometryError::InvalidParameter {
            what,
            value,
            kind: NumericError::Negative,
        });
    }
    Ok(value)
}

/// Validate a finite, strictly positive value.
pub(crate) fn check_positive(what: &'static str, value: f64) -> Result<f64> {
    let value = check_non_negative(what, value)?;
    if value == 0.0 {
        return Err(GeometryError::InvalidParameter {
            what,
            value,
            kind: NumericError::Zero,
        });
    }
    Ok(value)
}
