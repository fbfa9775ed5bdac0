//! Error types with diagnostics using miette
//!
//! The core only ever fails in two ways: a bounded value left its range,
//! or a required argument was missing or unusable.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Range Errors
// ============================================================================

/// A value fell outside the range of a bounded coordinate kind.
///
/// Carries the offending value together with the bounds it was checked
/// against, so callers can clamp or prompt for re-entry.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
#[error("{kind} value {value} is not in range {low:?} .. {high:?}{}", exclusive_suffix(.high_inclusive))]
#[diagnostic(
    code(getback::range::out_of_range),
    help("normalize or clamp the value before assigning it")
)]
pub struct RangeError {
    /// Name of the coordinate kind (`latitude`, `longitude`, `bearing`)
    pub kind: &'static str,
    /// The rejected value
    pub value: f64,
    /// Lowest accepted value (always inclusive)
    pub low: f64,
    /// Highest accepted value
    pub high: f64,
    /// Whether `high` itself is accepted
    pub high_inclusive: bool,
}

fn exclusive_suffix(high_inclusive: &bool) -> &'static str {
    if *high_inclusive { "" } else { " (exclusive)" }
}

// ============================================================================
// Argument Errors
// ============================================================================

/// A required argument was absent or not a usable number.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum InvalidArgumentError {
    #[error("{name} must be a finite number, got {value}")]
    #[diagnostic(code(getback::argument::non_finite))]
    NonFinite { name: &'static str, value: f64 },

    #[error("coordinate is missing")]
    #[diagnostic(
        code(getback::argument::missing_coordinate),
        help("pass an existing Coordinate")
    )]
    MissingCoordinate,

    #[error("coordinate converter is missing")]
    #[diagnostic(
        code(getback::argument::missing_converter),
        help("the identity transform is the default; install a converter only to replace it")
    )]
    MissingConverter,
}

impl InvalidArgumentError {
    /// Reject NaN and infinite inputs for the named argument.
    pub(crate) fn check_finite(name: &'static str, value: f64) -> std::result::Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(InvalidArgumentError::NonFinite { name, value })
        }
    }
}

// ============================================================================
// Crate Error
// ============================================================================

/// Any error produced by this crate.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
}

/// Result type for fallible operations that may raise either error kind
pub type Result<T> = std::result::Result<T, Error>;
